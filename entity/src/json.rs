//! Typed wrappers for list-valued columns stored as JSON.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::DayOfWeek;

/// A JSON array of strings (image URLs, brand names).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// A JSON array of days of the week.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DayList(pub Vec<DayOfWeek>);
