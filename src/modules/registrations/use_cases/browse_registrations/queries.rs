use std::collections::HashSet;

use serde::Serialize;

use crate::modules::registrations::core::registration::Registration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total: usize,
    pub unique_events: usize,
    pub unique_sub_events: usize,
}

fn matches(registration: &Registration, needle: &str) -> bool {
    [
        &registration.event_title,
        &registration.sub_event,
        &registration.first_name,
        &registration.last_name,
        &registration.email,
    ]
    .into_iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over title, sub-event, names and email, in insertion order.
pub fn search<'a>(registrations: &'a [Registration], term: &str) -> Vec<&'a Registration> {
    if term.is_empty() {
        return registrations.iter().collect();
    }
    let needle = term.to_lowercase();
    registrations
        .iter()
        .filter(|r| matches(r, &needle))
        .collect()
}

pub fn summary_stats(registrations: &[Registration]) -> SummaryStats {
    let events: HashSet<&str> = registrations.iter().map(|r| r.event_id.as_str()).collect();
    let sub_events: HashSet<&str> = registrations.iter().map(|r| r.sub_event.as_str()).collect();
    SummaryStats {
        total: registrations.len(),
        unique_events: events.len(),
        unique_sub_events: sub_events.len(),
    }
}
