use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::owner::{OwnerDto, RegisterOwnerDto, UpdateOwnerDto},
    server::{
        data::{outlet::OutletRepository, owner::OwnerRepository},
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        model::expansion::OutletExpansion,
        service::outlet::load_outlet_dto,
        util::validation::{
            validate_email, validate_isd_code, validate_optional_text, validate_phone,
            MAX_NAME_LEN,
        },
    },
};

/// Dialling prefix used when registration omits one
pub const DEFAULT_ISD_CODE: &str = "+91";

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Get or create an owner based upon the provided mobile number
    //
    // Registering a number that is already known returns the existing owner unchanged,
    // including its original ISD code.
    //
    // # Returns
    // Returns a Result containing:
    // - `(OwnerDto, bool)`: The owner and whether it was created by this call
    // - [`Error`]: Invalid mobile number or ISD code, or a database error
    pub async fn register(&self, owner: RegisterOwnerDto) -> Result<(OwnerDto, bool), Error> {
        let isd_code = owner.isd_code.as_deref().unwrap_or(DEFAULT_ISD_CODE);

        validate_phone(&owner.mobile_number, "mobileNumber")?;
        validate_isd_code(isd_code, "isdCode")?;

        let owner_repo = OwnerRepository::new(self.db);

        if let Some(existing) = owner_repo.find_by_mobile_number(&owner.mobile_number).await? {
            return Ok((existing.into(), false));
        }

        let created = owner_repo
            .create(&owner.mobile_number, isd_code)
            .await
            .map_err(|err| Error::on_unique_violation(err, ConflictError::OwnerMobileTaken))?;

        tracing::info!(owner_id = %created.id, "Registered owner");

        Ok((created.into(), true))
    }

    /// Update an owner's name and email, omitted fields are kept
    pub async fn update_profile(
        &self,
        owner_id: Uuid,
        profile: UpdateOwnerDto,
    ) -> Result<OwnerDto, Error> {
        validate_optional_text(profile.name.as_deref(), "name", MAX_NAME_LEN)?;
        if let Some(email) = &profile.email {
            validate_email(email, "email")?;
        }

        let owner = OwnerRepository::new(self.db)
            .update_profile(owner_id, profile.name, profile.email)
            .await?;

        match owner {
            Some(owner) => {
                tracing::info!(owner_id = %owner_id, "Updated owner profile");
                Ok(owner.into())
            }
            None => Err(NotFoundError::Owner(owner_id).into()),
        }
    }

    /// Fetch an owner with its outlets, each expanded as requested
    pub async fn get_owner(
        &self,
        owner_id: Uuid,
        expansion: &OutletExpansion,
    ) -> Result<OwnerDto, Error> {
        let owner = match OwnerRepository::new(self.db).get(owner_id).await? {
            Some(owner) => owner,
            None => return Err(NotFoundError::Owner(owner_id).into()),
        };

        let outlets = OutletRepository::new(self.db).find_by_owner(owner_id).await?;

        let mut outlet_dtos = Vec::with_capacity(outlets.len());
        for outlet in outlets {
            outlet_dtos.push(load_outlet_dto(self.db, outlet, expansion).await?);
        }

        let mut dto = OwnerDto::from(owner);
        dto.outlets = Some(outlet_dtos);

        Ok(dto)
    }
}
