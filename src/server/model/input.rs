//! Validated inputs.
//!
//! Services parse client DTOs into these types before any storage call, so repositories
//! only ever receive values that already satisfy field-level rules.

use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{CollectionTier, DayOfWeek};
use uuid::Uuid;

/// A timing slot whose times are parsed and ordered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTimingSlot {
    pub day: DayOfWeek,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

/// Slot fields to overwrite, `None` keeps the stored value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimingSlotChanges {
    pub day: Option<DayOfWeek>,
    pub opening_time: Option<NaiveTime>,
    pub closing_time: Option<NaiveTime>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLiquor {
    pub category: String,
    pub starting_price: i32,
    pub brand_names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCollection {
    pub tier: CollectionTier,
    pub pegs_per_day: i32,
    pub label_one: Option<String>,
    pub label_two: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub booking_price: i32,
    pub liquors: Vec<NewLiquor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInfinityPass {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub days: Vec<DayOfWeek>,
    pub price: i32,
    pub commission: i32,
    pub cuisine: Option<String>,
    pub liquor_type: Option<String>,
    pub special_offer: Option<String>,
}

/// Foreign keys and attributes for a new outlet row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewOutlet {
    pub owner_id: Uuid,
    pub name: Option<String>,
    pub details_id: Uuid,
    pub legal_document_id: Uuid,
    pub manager_id: Uuid,
    pub timing_id: Uuid,
    pub bartender_id: Option<Uuid>,
}
