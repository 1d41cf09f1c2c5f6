use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::outlet::OutletDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOwnerDto {
    pub mobile_number: String,
    /// Defaults to `+91`
    pub isd_code: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: String,
    pub isd_code: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Present only when outlets were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlets: Option<Vec<OutletDto>>,
}

impl From<entity::owner::Model> for OwnerDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            email: owner.email,
            mobile_number: owner.mobile_number,
            isd_code: owner.isd_code,
            created_at: owner.created_at,
            updated_at: owner.updated_at,
            outlets: None,
        }
    }
}

/// Owner fields without the outlet list, embedded in expanded outlets
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummaryDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: String,
    pub isd_code: String,
}

impl From<entity::owner::Model> for OwnerSummaryDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            email: owner.email,
            mobile_number: owner.mobile_number,
            isd_code: owner.isd_code,
        }
    }
}
