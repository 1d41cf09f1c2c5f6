use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::CollectionTier;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::outlet::OutletDto;

/// A liquor line item as submitted by a client.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLiquorDto {
    pub category: Option<String>,
    pub starting_price: Option<i32>,
    pub brand_names: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionDto {
    pub tier: CollectionTier,
    pub pegs_per_day: i32,
    pub label_one: Option<String>,
    pub label_two: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: NaiveDate,
    /// `YYYY-MM-DD`, on or after `startDate`
    pub end_date: NaiveDate,
    pub booking_price: i32,
    pub liquors: Vec<CreateLiquorDto>,
}

/// Collections to attach to an outlet, at most one per tier.
///
/// Tiers left out are not touched. A tier named here that the outlet already holds
/// rejects the whole request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachCollectionsDto {
    pub gold_collection_id: Option<Uuid>,
    pub silver_collection_id: Option<Uuid>,
    pub crystal_collection_id: Option<Uuid>,
}

impl AttachCollectionsDto {
    /// The requested `(tier, collection id)` pairs in Gold, Silver, Crystal order
    pub fn requested(&self) -> Vec<(CollectionTier, Uuid)> {
        [
            (CollectionTier::Gold, self.gold_collection_id),
            (CollectionTier::Silver, self.silver_collection_id),
            (CollectionTier::Crystal, self.crystal_collection_id),
        ]
        .into_iter()
        .filter_map(|(tier, id)| id.map(|id| (tier, id)))
        .collect()
    }
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
pub struct TierQuery {
    pub tier: CollectionTier,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiquorDto {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub category: String,
    pub starting_price: i32,
    pub brand_names: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::liquor::Model> for LiquorDto {
    fn from(liquor: entity::liquor::Model) -> Self {
        Self {
            id: liquor.id,
            collection_id: liquor.collection_id,
            category: liquor.category,
            starting_price: liquor.starting_price,
            brand_names: liquor.brand_names.0,
            created_at: liquor.created_at,
            updated_at: liquor.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
    pub id: Uuid,
    pub tier: CollectionTier,
    pub pegs_per_day: i32,
    pub label_one: Option<String>,
    pub label_two: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub booking_price: i32,
    pub liquors: Vec<LiquorDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CollectionDto {
    pub fn new(collection: entity::collection::Model, liquors: Vec<entity::liquor::Model>) -> Self {
        Self {
            id: collection.id,
            tier: collection.tier,
            pegs_per_day: collection.pegs_per_day,
            label_one: collection.label_one,
            label_two: collection.label_two,
            start_date: collection.start_date,
            end_date: collection.end_date,
            booking_price: collection.booking_price,
            liquors: liquors.into_iter().map(LiquorDto::from).collect(),
            created_at: collection.created_at,
            updated_at: collection.updated_at,
        }
    }
}

/// An outlet together with the collection it holds for one tier
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutletCollectionDto {
    pub outlet: OutletDto,
    pub collection: CollectionDto,
}
