//! Outlet verification.
//!
//! An outlet is created unverified. An administrator moves it between verified and
//! unverified with an explicit boolean; setting the current value again is a no-op.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::outlet::OutletDto,
    server::{
        data::outlet::OutletRepository,
        error::{not_found::NotFoundError, Error},
    },
};

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Set the verification flag of an outlet
    ///
    /// # Returns
    /// - `Ok(OutletDto)` - The outlet as stored after the update
    /// - `Err(Error::NotFoundError)` - The outlet does not exist
    pub async fn set_verified(&self, outlet_id: Uuid, is_verified: bool) -> Result<OutletDto, Error> {
        let outlet_repo = OutletRepository::new(self.db);

        if outlet_repo.set_verified(outlet_id, is_verified).await? == 0 {
            return Err(NotFoundError::Outlet(outlet_id).into());
        }

        let outlet = outlet_repo.get(outlet_id).await?.ok_or_else(|| {
            Error::InternalError(format!("Outlet {outlet_id} disappeared after verification"))
        })?;

        tracing::info!(outlet_id = %outlet_id, is_verified, "Set outlet verification");

        Ok(outlet.into())
    }
}
