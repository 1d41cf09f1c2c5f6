//! Factory functions for generating in-memory entity models.
//!
//! These are pure functions returning models with standard test values, suitable for unit
//! tests that convert or inspect models without database interaction.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::{
    json::StringList,
    sea_orm_active_enums::{CollectionTier, DayOfWeek},
};
use uuid::Uuid;

/// Build a time of day, panicking on out-of-range components.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Build a calendar date, panicking on an invalid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a mock timing slot model for the given day and hours.
pub fn mock_slot_model(
    outlet_timing_id: Uuid,
    day: DayOfWeek,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
) -> entity::outlet_timing_slot::Model {
    let now = Utc::now().naive_utc();
    entity::outlet_timing_slot::Model {
        id: Uuid::new_v4(),
        outlet_timing_id,
        day,
        opening_time,
        closing_time,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock collection model of the given tier running through 2026.
pub fn mock_collection_model(tier: CollectionTier) -> entity::collection::Model {
    let now = Utc::now().naive_utc();
    entity::collection::Model {
        id: Uuid::new_v4(),
        tier,
        pegs_per_day: 2,
        label_one: Some("Happy Hours".to_string()),
        label_two: None,
        start_date: date(2026, 1, 1),
        end_date: date(2026, 12, 31),
        booking_price: 499,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock liquor model belonging to the given collection.
pub fn mock_liquor_model(collection_id: Uuid, category: &str) -> entity::liquor::Model {
    let now = Utc::now().naive_utc();
    entity::liquor::Model {
        id: Uuid::new_v4(),
        collection_id,
        category: category.to_string(),
        starting_price: 250,
        brand_names: StringList(vec!["Brand A".to_string(), "Brand B".to_string()]),
        created_at: now,
        updated_at: now,
    }
}
