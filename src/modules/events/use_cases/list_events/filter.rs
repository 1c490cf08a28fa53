use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::modules::events::core::catalog::Catalog;
use crate::modules::events::core::event::Event;

/// Filter value selecting every event or one specific key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryKey {
    #[default]
    All,
    Key(String),
}

impl CategoryKey {
    pub fn key(value: impl Into<String>) -> Self {
        Self::Key(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for CategoryKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Key(s.to_string()))
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// Which event attribute a [`CategoryKey::Key`] is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterBy {
    #[default]
    Id,
    Title,
    Category,
}

impl FilterBy {
    fn value_of(self, event: &Event) -> &str {
        match self {
            Self::Id => &event.id,
            Self::Title => &event.title,
            Self::Category => &event.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub key: CategoryKey,
    pub label: String,
}

/// Events to display for `key`, in catalog order. A key that matches nothing yields an empty list.
pub fn filter_events<'a>(catalog: &'a Catalog, key: &CategoryKey, by: FilterBy) -> Vec<&'a Event> {
    match key {
        CategoryKey::All => catalog.events().iter().collect(),
        CategoryKey::Key(wanted) => catalog
            .events()
            .iter()
            .filter(|event| by.value_of(event) == wanted)
            .collect(),
    }
}

/// The choices a filter bar offers, "All" first.
pub fn filter_options(catalog: &Catalog, by: FilterBy) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        key: CategoryKey::All,
        label: "All".to_string(),
    }];
    match by {
        FilterBy::Id => options.extend(catalog.events().iter().map(|e| FilterOption {
            key: CategoryKey::key(&e.id),
            label: e.title.clone(),
        })),
        FilterBy::Title => options.extend(catalog.events().iter().map(|e| FilterOption {
            key: CategoryKey::key(&e.title),
            label: e.title.clone(),
        })),
        FilterBy::Category => options.extend(catalog.categories().into_iter().map(|c| {
            FilterOption {
                key: CategoryKey::key(c),
                label: c.to_string(),
            }
        })),
    }
    options
}
