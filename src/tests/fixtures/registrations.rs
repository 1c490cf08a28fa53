use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::modules::registrations::core::draft::RegistrationDraft;
use crate::modules::registrations::core::registration::{Registration, YearLevel};
use crate::shared::core::primitives::{Clock, IdGenerator};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Mints `<prefix>-0001`, `<prefix>-0002`, ...
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n:04}", self.prefix)
    }
}

pub fn filled_draft() -> RegistrationDraft {
    RegistrationDraft {
        sub_event: "Basketball".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "123".into(),
        year_level: YearLevel::First,
    }
}

pub struct RegistrationBuilder {
    inner: Registration,
}

impl Default for RegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationBuilder {
    pub fn new() -> Self {
        Self {
            inner: Registration {
                id: "reg-fixed-0001".into(),
                event_id: "1".into(),
                event_title: "Ball Games".into(),
                sub_event: "Basketball".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                phone: "123".into(),
                year_level: YearLevel::First,
                registered_at: fixed_instant(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn event(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.inner.event_id = id.into();
        self.inner.event_title = title.into();
        self
    }

    pub fn sub_event(mut self, v: impl Into<String>) -> Self {
        self.inner.sub_event = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn year_level(mut self, v: YearLevel) -> Self {
        self.inner.year_level = v;
        self
    }

    pub fn build(self) -> Registration {
        self.inner
    }
}

#[cfg(test)]
mod registration_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let built = RegistrationBuilder::new()
            .id("r-9")
            .event("3", "Board Games")
            .sub_event("Chess")
            .first_name("Alan")
            .last_name("Turing")
            .email("alan@example.com")
            .phone("999")
            .year_level(YearLevel::Fourth)
            .build();
        assert_eq!(built.id, "r-9");
        assert_eq!(built.event_id, "3");
        assert_eq!(built.event_title, "Board Games");
        assert_eq!(built.sub_event, "Chess");
        assert_eq!(built.full_name(), "Alan Turing");
        assert_eq!(built.email, "alan@example.com");
        assert_eq!(built.phone, "999");
        assert_eq!(built.year_level, YearLevel::Fourth);
    }

    #[rstest]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new("reg");
        assert_eq!(ids.next_id(), "reg-0001");
        assert_eq!(ids.next_id(), "reg-0002");
    }
}
