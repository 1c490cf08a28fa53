use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum YearLevel {
    #[default]
    #[serde(rename = "1st Year")]
    #[strum(to_string = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    #[strum(to_string = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    #[strum(to_string = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    #[strum(to_string = "4th Year")]
    Fourth,
    #[serde(rename = "5th Year")]
    #[strum(to_string = "5th Year")]
    Fifth,
}

/// A submitted entry into one sub-event. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub sub_event: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub year_level: YearLevel,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
