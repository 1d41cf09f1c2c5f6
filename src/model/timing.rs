use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{DayOfWeek, EstablishmentType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::util::time::format_clock_time;

/// One day's opening hours as submitted by a client.
///
/// Every field is optional on the wire so a slot missing a component is reported as a
/// validation error rather than a deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimingSlotInputDto {
    pub day: Option<DayOfWeek>,
    /// `HH:MM`, 24 hour clock
    pub opening_time: Option<String>,
    /// `HH:MM`, 24 hour clock
    pub closing_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimingDto {
    pub establishment_type: EstablishmentType,
    #[serde(default)]
    pub hotel_stay: bool,
    #[serde(default)]
    pub event_space: bool,
    pub slots: Vec<TimingSlotInputDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTimingSlotDto {
    pub day: DayOfWeek,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimingSlotDto {
    pub day: Option<DayOfWeek>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimingSlotDto {
    pub id: Uuid,
    pub outlet_timing_id: Uuid,
    pub day: DayOfWeek,
    pub opening_time: String,
    pub closing_time: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::outlet_timing_slot::Model> for TimingSlotDto {
    fn from(slot: entity::outlet_timing_slot::Model) -> Self {
        Self {
            id: slot.id,
            outlet_timing_id: slot.outlet_timing_id,
            day: slot.day,
            opening_time: format_clock_time(slot.opening_time),
            closing_time: format_clock_time(slot.closing_time),
            created_at: slot.created_at,
            updated_at: slot.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimingDto {
    pub id: Uuid,
    pub establishment_type: EstablishmentType,
    pub hotel_stay: bool,
    pub event_space: bool,
    /// Ordered Monday to Sunday
    pub slots: Vec<TimingSlotDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TimingDto {
    pub fn new(
        timing: entity::outlet_timing::Model,
        mut slots: Vec<entity::outlet_timing_slot::Model>,
    ) -> Self {
        slots.sort_by_key(|slot| slot.day);

        Self {
            id: timing.id,
            establishment_type: timing.establishment_type,
            hotel_stay: timing.hotel_stay,
            event_space: timing.event_space,
            slots: slots.into_iter().map(TimingSlotDto::from).collect(),
            created_at: timing.created_at,
            updated_at: timing.updated_at,
        }
    }
}
