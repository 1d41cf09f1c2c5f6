use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::infinity_pass::{CreateInfinityPassDto, OutletInfinityPassDto},
    server::{
        data::{infinity_pass::InfinityPassRepository, outlet::OutletRepository},
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        model::input::NewInfinityPass,
        util::{
            time::{is_before, parse_clock_time},
            validation::{validate_non_negative, validate_optional_text, MAX_NAME_LEN},
        },
    },
};

/// Commission applied when a pass is created without one
pub const DEFAULT_COMMISSION: i32 = 300;

const MAX_DAYS: usize = 7;

/// Validate an infinity pass submission
///
/// Duplicate days are rejected, the same policy weekly schedules follow.
pub fn validate_infinity_pass(
    pass: &CreateInfinityPassDto,
) -> Result<NewInfinityPass, ValidationError> {
    let start_time = parse_clock_time("startTime", &pass.start_time)?;
    let end_time = parse_clock_time("endTime", &pass.end_time)?;

    if !is_before(start_time, end_time) {
        return Err(ValidationError::new(
            "endTime",
            "Start time must be before end time",
        ));
    }

    if pass.days.is_empty() {
        return Err(ValidationError::new("days", "Days cannot be empty"));
    }
    if pass.days.len() > MAX_DAYS {
        return Err(ValidationError::new("days", "Days cannot be greater than 7"));
    }
    let mut seen = HashSet::with_capacity(pass.days.len());
    if !pass.days.iter().all(|day| seen.insert(*day)) {
        return Err(ValidationError::new(
            "days",
            "Each day can only be listed once",
        ));
    }

    let commission = pass.commission.unwrap_or(DEFAULT_COMMISSION);
    validate_non_negative(pass.price, "price")?;
    validate_non_negative(commission, "commission")?;

    validate_optional_text(pass.cuisine.as_deref(), "cuisine", MAX_NAME_LEN)?;
    validate_optional_text(pass.liquor_type.as_deref(), "liquorType", MAX_NAME_LEN)?;
    validate_optional_text(pass.special_offer.as_deref(), "specialOffer", MAX_NAME_LEN)?;

    Ok(NewInfinityPass {
        start_time,
        end_time,
        days: pass.days.clone(),
        price: pass.price,
        commission,
        cuisine: pass.cuisine.clone(),
        liquor_type: pass.liquor_type.clone(),
        special_offer: pass.special_offer.clone(),
    })
}

pub struct InfinityPassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfinityPassService<'a> {
    /// Creates a new instance of [`InfinityPassService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an infinity pass and link it to an outlet in one transaction
    ///
    /// The link is a conditional update that only matches while the outlet has no pass, so
    /// of two concurrent requests at most one links its pass. The loser rolls back along
    /// with the pass row it inserted.
    ///
    /// # Returns
    /// - `Ok(OutletInfinityPassDto)` - The outlet now pointing at the new pass
    /// - `Err(Error::ValidationError)` - Invalid time window, day list or amounts
    /// - `Err(Error::NotFoundError)` - The outlet does not exist
    /// - `Err(Error::ConflictError)` - The outlet already has a pass
    pub async fn create(
        &self,
        outlet_id: Uuid,
        pass: CreateInfinityPassDto,
    ) -> Result<OutletInfinityPassDto, Error> {
        let pass = validate_infinity_pass(&pass)?;

        let txn = self.db.begin().await?;
        let outlet_repo = OutletRepository::new(&txn);

        let outlet = match outlet_repo.get(outlet_id).await? {
            Some(outlet) => outlet,
            None => return Err(NotFoundError::Outlet(outlet_id).into()),
        };
        if outlet.infinity_pass_id.is_some() {
            return Err(ConflictError::InfinityPassAlreadyAttached.into());
        }

        let created = InfinityPassRepository::new(&txn).create(&pass).await?;

        let rows = outlet_repo
            .attach_infinity_pass(outlet_id, created.id)
            .await?;
        if rows == 0 {
            return Err(ConflictError::InfinityPassAlreadyAttached.into());
        }

        let outlet = outlet_repo.get(outlet_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Outlet {outlet_id} disappeared after its infinity pass was linked"
            ))
        })?;

        txn.commit().await?;

        tracing::info!(
            outlet_id = %outlet_id,
            infinity_pass_id = %created.id,
            "Attached infinity pass to outlet"
        );

        Ok(OutletInfinityPassDto {
            outlet: outlet.into(),
            infinity_pass: created.into(),
        })
    }

    /// Fetch an outlet together with its infinity pass
    ///
    /// A missing outlet and an outlet without a pass are both not found, with distinct
    /// messages.
    pub async fn get(&self, outlet_id: Uuid) -> Result<OutletInfinityPassDto, Error> {
        let outlet = match OutletRepository::new(self.db).get(outlet_id).await? {
            Some(outlet) => outlet,
            None => return Err(NotFoundError::Outlet(outlet_id).into()),
        };

        let infinity_pass_id = match outlet.infinity_pass_id {
            Some(id) => id,
            None => return Err(NotFoundError::InfinityPass(outlet_id).into()),
        };

        let pass = InfinityPassRepository::new(self.db)
            .get(infinity_pass_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Outlet {outlet_id} references missing infinity pass {infinity_pass_id}"
                ))
            })?;

        Ok(OutletInfinityPassDto {
            outlet: outlet.into(),
            infinity_pass: pass.into(),
        })
    }
}
