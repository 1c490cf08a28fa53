use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use crate::modules::events::core::catalog::Catalog;
use crate::modules::events::use_cases::list_events::filter::FilterBy;
use crate::modules::registrations::use_cases::register_for_event::decision::ValidationPolicy;

pub const CATALOG: &str = "CPE_FAIR_CATALOG";
pub const CATALOG_PATH: &str = "CPE_FAIR_CATALOG_PATH";
pub const FILTER_BY: &str = "CPE_FAIR_FILTER_BY";
pub const STRICT_FIELDS: &str = "CPE_FAIR_STRICT_FIELDS";
pub const NO_COLOR: &str = "NO_COLOR";
pub const LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CPE_FAIR_CATALOG must be `fair` or `conference`, got {0:?}")]
    InvalidCatalog(String),

    #[error("CPE_FAIR_FILTER_BY must be `id`, `title` or `category`, got {0:?}")]
    InvalidFilterBy(String),

    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Fair,
    Conference,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: CatalogSource,
    pub filter_by: FilterBy,
    pub policy: ValidationPolicy,
    pub no_color: bool,
    pub log_filter: String,
}

/// Loads `KEY=value` lines from `path` into the process environment. A missing file is fine, a
/// malformed one is an error.
pub fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog = match lookup(CATALOG_PATH).filter(|p| !p.trim().is_empty()) {
            Some(path) => CatalogSource::File(PathBuf::from(path)),
            None => match lookup(CATALOG).as_deref().map(str::trim) {
                None | Some("") | Some("fair") => CatalogSource::Fair,
                Some("conference") => CatalogSource::Conference,
                Some(other) => return Err(ConfigError::InvalidCatalog(other.to_string())),
            },
        };

        let filter_by = match lookup(FILTER_BY) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidFilterBy(raw.clone()))?,
            None if catalog == CatalogSource::Conference => FilterBy::Category,
            None => FilterBy::Id,
        };

        let strict = match lookup(STRICT_FIELDS) {
            Some(raw) => parse_bool(STRICT_FIELDS, &raw)?,
            None => false,
        };
        let policy = if strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        };

        Ok(Self {
            catalog,
            filter_by,
            policy,
            no_color: lookup(NO_COLOR).is_some_and(|v| !v.is_empty()),
            log_filter: lookup(LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            CatalogSource::Fair => Ok(Catalog::cpe_fair_2024()),
            CatalogSource::Conference => Ok(Catalog::conference_showcase()),
            CatalogSource::File(path) => Catalog::load(path)
                .with_context(|| format!("loading catalog from {}", path.display())),
        }
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[rstest]
    fn it_should_default_to_the_fair_catalog() {
        let config = config(&[]).unwrap();
        assert_eq!(
            config,
            AppConfig {
                catalog: CatalogSource::Fair,
                filter_by: FilterBy::Id,
                policy: ValidationPolicy::Lenient,
                no_color: false,
                log_filter: "warn".into(),
            }
        );
    }

    #[rstest]
    fn it_should_filter_the_conference_catalog_by_category() {
        let config = config(&[(CATALOG, "conference")]).unwrap();
        assert_eq!(config.catalog, CatalogSource::Conference);
        assert_eq!(config.filter_by, FilterBy::Category);
    }

    #[rstest]
    fn it_should_prefer_a_catalog_file_over_the_builtin_choice() {
        let config = config(&[
            (CATALOG, "conference"),
            (CATALOG_PATH, "/tmp/events.json"),
        ])
        .unwrap();
        assert_eq!(config.catalog, CatalogSource::File("/tmp/events.json".into()));
        assert_eq!(config.filter_by, FilterBy::Id);
    }

    #[rstest]
    #[case("id", FilterBy::Id)]
    #[case("Title", FilterBy::Title)]
    #[case(" category ", FilterBy::Category)]
    fn it_should_read_the_filter_mode(#[case] raw: &str, #[case] expected: FilterBy) {
        assert_eq!(config(&[(FILTER_BY, raw)]).unwrap().filter_by, expected);
    }

    #[rstest]
    #[case("true", ValidationPolicy::Strict)]
    #[case("1", ValidationPolicy::Strict)]
    #[case("off", ValidationPolicy::Lenient)]
    #[case("", ValidationPolicy::Lenient)]
    fn it_should_read_the_validation_policy(#[case] raw: &str, #[case] expected: ValidationPolicy) {
        assert_eq!(config(&[(STRICT_FIELDS, raw)]).unwrap().policy, expected);
    }

    #[rstest]
    fn it_should_reject_invalid_values() {
        assert_eq!(
            config(&[(CATALOG, "expo")]),
            Err(ConfigError::InvalidCatalog("expo".into()))
        );
        assert_eq!(
            config(&[(FILTER_BY, "colour")]),
            Err(ConfigError::InvalidFilterBy("colour".into()))
        );
        assert_eq!(
            config(&[(STRICT_FIELDS, "maybe")]),
            Err(ConfigError::InvalidBool {
                key: STRICT_FIELDS,
                value: "maybe".into(),
            })
        );
    }

    #[rstest]
    fn it_should_honour_no_color_and_log_filter() {
        let config = config(&[(NO_COLOR, "1"), (LOG_FILTER, "debug")]).unwrap();
        assert!(config.no_color);
        assert_eq!(config.log_filter, "debug");
    }

    #[rstest]
    fn it_should_report_a_missing_catalog_file() {
        let config = config(&[(CATALOG_PATH, "/nonexistent/cpe-fair-events.json")]).unwrap();
        let error = config.load_catalog().unwrap_err();
        assert!(
            format!("{error:#}")
                .contains("loading catalog from /nonexistent/cpe-fair-events.json")
        );
    }

    #[rstest]
    fn it_should_ignore_a_missing_env_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_env_file(&dir.path().join(".env")).is_ok());
    }

    #[rstest]
    fn it_should_report_a_malformed_env_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "CPE_FAIR_UNUSED='unterminated\n").unwrap();
        let error = load_env_file(&path).unwrap_err();
        assert!(!error.not_found());
    }
}
