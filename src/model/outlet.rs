use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::BankAccountType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::{
    collection::CollectionDto, infinity_pass::InfinityPassDto, owner::OwnerSummaryDto,
    timing::{CreateTimingDto, TimingDto},
};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutletDetailsDto {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub pincode: String,
    /// At most two
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLegalDocumentDto {
    pub fssai_number: String,
    pub fssai_url: Option<String>,
    pub pan_card_number: Option<String>,
    pub pan_card_url: Option<String>,
    pub gst_number: String,
    pub on_shop_license_url: Option<String>,
    pub off_shop_license_url: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_account_type: BankAccountType,
    pub bank_ifsc_code: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagerDto {
    pub name: String,
    pub contact_number: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBartenderDto {
    pub name: String,
    pub contact_number: String,
}

/// Everything needed to create an outlet and all of its parts in one go
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutletDto {
    pub owner_id: Uuid,
    pub name: String,
    pub details: CreateOutletDetailsDto,
    pub legal_document: CreateLegalDocumentDto,
    pub manager: CreateManagerDto,
    pub timing: CreateTimingDto,
    pub bartender: Option<CreateBartenderDto>,
}

/// Create an outlet from parts that were stored earlier
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutletDto {
    pub owner_id: Uuid,
    pub name: Option<String>,
    pub details_id: Uuid,
    pub legal_document_id: Uuid,
    pub manager_id: Uuid,
    pub timing_id: Uuid,
    pub bartender_id: Option<Uuid>,
}

/// Details, manager and optional bartender created together ahead of linking
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutletStaffDto {
    pub details: CreateOutletDetailsDto,
    pub manager: CreateManagerDto,
    pub bartender: Option<CreateBartenderDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutletStaffDto {
    pub details: OutletDetailsDto,
    pub manager: ManagerDto,
    pub bartender: Option<BartenderDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutletDto {
    pub is_verified: bool,
}

/// Relations to expand when fetching an outlet, all off by default
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OutletExpandQuery {
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub details: bool,
    #[serde(default)]
    pub legal_document: bool,
    #[serde(default)]
    pub manager: bool,
    #[serde(default)]
    pub bartender: bool,
    /// Includes every slot of the schedule
    #[serde(default)]
    pub timing: bool,
    #[serde(default)]
    pub collections: bool,
    #[serde(default)]
    pub infinity_pass: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutletDetailsDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub pincode: String,
    pub image_urls: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::outlet_details::Model> for OutletDetailsDto {
    fn from(details: entity::outlet_details::Model) -> Self {
        Self {
            id: details.id,
            name: details.name,
            address: details.address,
            contact_number: details.contact_number,
            latitude: details.latitude,
            longitude: details.longitude,
            country: details.country,
            pincode: details.pincode,
            image_urls: details.image_urls.0,
            created_at: details.created_at,
            updated_at: details.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocumentDto {
    pub id: Uuid,
    pub fssai_number: String,
    pub fssai_url: Option<String>,
    pub pan_card_number: Option<String>,
    pub pan_card_url: Option<String>,
    pub gst_number: String,
    pub on_shop_license_url: Option<String>,
    pub off_shop_license_url: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_account_type: BankAccountType,
    pub bank_ifsc_code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::outlet_legal_document::Model> for LegalDocumentDto {
    fn from(document: entity::outlet_legal_document::Model) -> Self {
        Self {
            id: document.id,
            fssai_number: document.fssai_number,
            fssai_url: document.fssai_url,
            pan_card_number: document.pan_card_number,
            pan_card_url: document.pan_card_url,
            gst_number: document.gst_number,
            on_shop_license_url: document.on_shop_license_url,
            off_shop_license_url: document.off_shop_license_url,
            bank_account_number: document.bank_account_number,
            bank_account_type: document.bank_account_type,
            bank_ifsc_code: document.bank_ifsc_code,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDto {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::outlet_manager::Model> for ManagerDto {
    fn from(manager: entity::outlet_manager::Model) -> Self {
        Self {
            id: manager.id,
            name: manager.name,
            contact_number: manager.contact_number,
            email: manager.email,
            created_at: manager.created_at,
            updated_at: manager.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BartenderDto {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::outlet_bartender::Model> for BartenderDto {
    fn from(bartender: entity::outlet_bartender::Model) -> Self {
        Self {
            id: bartender.id,
            name: bartender.name,
            contact_number: bartender.contact_number,
            created_at: bartender.created_at,
            updated_at: bartender.updated_at,
        }
    }
}

/// An outlet row with whichever relations were requested.
///
/// Relation fields are omitted from the JSON body unless expanded. The collection
/// fields are populated only when collections are expanded and the tier is filled.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutletDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub owner_id: Uuid,
    pub is_verified: bool,
    pub details_id: Uuid,
    pub legal_document_id: Uuid,
    pub manager_id: Uuid,
    pub timing_id: Uuid,
    pub bartender_id: Option<Uuid>,
    pub infinity_pass_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<OutletDetailsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_document: Option<LegalDocumentDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<ManagerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bartender: Option<BartenderDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_collection: Option<CollectionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silver_collection: Option<CollectionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crystal_collection: Option<CollectionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinity_pass: Option<InfinityPassDto>,
}

impl From<entity::outlet::Model> for OutletDto {
    fn from(outlet: entity::outlet::Model) -> Self {
        Self {
            id: outlet.id,
            name: outlet.name,
            owner_id: outlet.owner_id,
            is_verified: outlet.is_verified,
            details_id: outlet.details_id,
            legal_document_id: outlet.legal_document_id,
            manager_id: outlet.manager_id,
            timing_id: outlet.timing_id,
            bartender_id: outlet.bartender_id,
            infinity_pass_id: outlet.infinity_pass_id,
            created_at: outlet.created_at,
            updated_at: outlet.updated_at,
            owner: None,
            details: None,
            legal_document: None,
            manager: None,
            bartender: None,
            timing: None,
            gold_collection: None,
            silver_collection: None,
            crystal_collection: None,
            infinity_pass: None,
        }
    }
}
