use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::DayOfWeek;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{model::outlet::OutletDto, server::util::time::format_clock_time};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInfinityPassDto {
    /// `HH:MM`, 24 hour clock
    pub start_time: String,
    /// `HH:MM`, 24 hour clock, after `startTime`
    pub end_time: String,
    pub days: Vec<DayOfWeek>,
    pub price: i32,
    /// Defaults to 300
    pub commission: Option<i32>,
    pub cuisine: Option<String>,
    pub liquor_type: Option<String>,
    pub special_offer: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfinityPassDto {
    pub id: Uuid,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<DayOfWeek>,
    pub price: i32,
    pub commission: i32,
    pub cuisine: Option<String>,
    pub liquor_type: Option<String>,
    pub special_offer: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::infinity_pass::Model> for InfinityPassDto {
    fn from(pass: entity::infinity_pass::Model) -> Self {
        Self {
            id: pass.id,
            start_time: format_clock_time(pass.start_time),
            end_time: format_clock_time(pass.end_time),
            days: pass.days.0,
            price: pass.price,
            commission: pass.commission,
            cuisine: pass.cuisine,
            liquor_type: pass.liquor_type,
            special_offer: pass.special_offer,
            created_at: pass.created_at,
            updated_at: pass.updated_at,
        }
    }
}

/// An outlet together with its infinity pass
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutletInfinityPassDto {
    pub outlet: OutletDto,
    pub infinity_pass: InfinityPassDto,
}
