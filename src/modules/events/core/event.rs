use serde::{Deserialize, Serialize};

use crate::modules::events::core::lookups::{CategoryAccent, EventIcon};

/// One competition within an [`Event`]. Names are unique within their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl SubEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            emoji: None,
        }
    }
}

/// Display metadata only the conference-style listing shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl EventDetails {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A top-level competition category, e.g. "Ball Games".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub sub_events: Vec<SubEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            sub_events: Vec::new(),
            icon: None,
            details: EventDetails::default(),
        }
    }

    pub fn with_sub_events<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_events = names.into_iter().map(SubEvent::new).collect();
        self
    }

    pub fn sub_event(&self, name: &str) -> Option<&SubEvent> {
        self.sub_events.iter().find(|s| s.name == name)
    }

    pub fn has_sub_event(&self, name: &str) -> bool {
        self.sub_event(name).is_some()
    }

    pub fn icon(&self) -> EventIcon {
        EventIcon::from_name(self.icon.as_deref())
    }

    pub fn accent(&self) -> CategoryAccent {
        CategoryAccent::from_category(&self.category)
    }
}
