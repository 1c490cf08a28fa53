use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::modules::events::core::builtin;
use crate::modules::events::core::event::Event;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("event id must not be empty (title: {title:?})")]
    EmptyEventId { title: String },

    #[error("duplicate event id: {0}")]
    DuplicateEventId(String),

    #[error("duplicate sub-event {sub_event:?} in event {event_id}")]
    DuplicateSubEvent { event_id: String, sub_event: String },

    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable, validated list of events in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for event in &events {
            if event.id.is_empty() {
                return Err(CatalogError::EmptyEventId {
                    title: event.title.clone(),
                });
            }
            if !ids.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateEventId(event.id.clone()));
            }
            let mut names = HashSet::new();
            for sub_event in &event.sub_events {
                if !names.insert(sub_event.name.as_str()) {
                    return Err(CatalogError::DuplicateSubEvent {
                        event_id: event.id.clone(),
                        sub_event: sub_event.name.clone(),
                    });
                }
            }
        }
        Ok(Self { events })
    }

    pub fn cpe_fair_2024() -> Self {
        Self {
            events: builtin::cpe_fair_2024_events(),
        }
    }

    pub fn conference_showcase() -> Self {
        Self {
            events: builtin::conference_showcase_events(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .map(|e| e.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
