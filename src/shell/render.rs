// Plain-text views for the terminal session. Colour is applied only when enabled.

use owo_colors::{AnsiColors, OwoColorize};
use strum::IntoEnumIterator;

use crate::modules::events::core::event::{Event, EventDetails};
use crate::modules::events::core::lookups::CategoryAccent;
use crate::modules::events::use_cases::list_events::filter::{CategoryKey, FilterOption};
use crate::modules::registrations::core::draft::FormField;
use crate::modules::registrations::core::registration::{Registration, YearLevel};
use crate::modules::registrations::use_cases::browse_registrations::queries::SummaryStats;
use crate::modules::registrations::use_cases::register_for_event::handler::RegistrationForm;

pub const NO_MATCHES: &str = "No registrations found matching your search.";
pub const NO_REGISTRATIONS: &str = "No registrations yet. Register for an event to get started!";
pub const NO_EVENTS: &str = "No events in this category.";

fn accent_color(accent: CategoryAccent) -> AnsiColors {
    match accent {
        CategoryAccent::Sports => AnsiColors::Red,
        CategoryAccent::Academic => AnsiColors::Yellow,
        CategoryAccent::Strategy => AnsiColors::BrightRed,
        CategoryAccent::Entertainment => AnsiColors::BrightYellow,
        CategoryAccent::Gaming => AnsiColors::BrightMagenta,
        CategoryAccent::Fallback => AnsiColors::Red,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn events(
        &self,
        events: &[&Event],
        options: &[FilterOption],
        active: &CategoryKey,
    ) -> String {
        let mut lines = vec![self.heading("Event Categories")];
        let pills: Vec<String> = options
            .iter()
            .map(|option| {
                let label = match &option.key {
                    CategoryKey::Key(key) if *key != option.label => {
                        format!("{} ({key})", option.label)
                    }
                    _ => option.label.clone(),
                };
                if option.key == *active {
                    format!("[{}]", self.paint(&label, AnsiColors::Red))
                } else {
                    label
                }
            })
            .collect();
        lines.push(format!("Filter: {}", pills.join("  ")));
        lines.push(String::new());

        if events.is_empty() {
            lines.push(NO_EVENTS.to_string());
        }
        for event in events {
            lines.extend(self.event_card(event));
        }
        lines.join("\n")
    }

    fn event_card(&self, event: &Event) -> Vec<String> {
        let title = self.paint(&event.title, accent_color(event.accent()));
        let mut lines = vec![format!(
            "{} {title}  (id {}) · {} · {} sub-events",
            event.icon().glyph(),
            event.id,
            event.category,
            event.sub_events.len()
        )];
        if !event.description.is_empty() {
            lines.push(format!("    {}", event.description));
        }
        if let Some(details) = details_line(&event.details) {
            lines.push(format!("    {details}"));
        }
        for sub_event in &event.sub_events {
            let glyph = sub_event.emoji.as_deref().unwrap_or("•");
            match &sub_event.description {
                Some(description) => {
                    lines.push(format!("    {glyph} {}: {description}", sub_event.name))
                }
                None => lines.push(format!("    {glyph} {}", sub_event.name)),
            }
        }
        lines.push(String::new());
        lines
    }

    pub fn form(&self, form: &RegistrationForm) -> String {
        let event = form.event();
        let draft = form.draft();
        let mut lines = vec![self.heading(&format!("Register for {}", event.title))];
        for field in FormField::iter() {
            let value = draft.get(field);
            let hint = match field {
                FormField::SubEvent => Some(
                    event
                        .sub_events
                        .iter()
                        .map(|s| s.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                FormField::YearLevel => Some(
                    YearLevel::iter()
                        .map(|y| y.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                _ => None,
            };
            match hint {
                Some(hint) => lines.push(format!("  {:<10} : {value}   [{hint}]", field.as_ref())),
                None => lines.push(format!("  {:<10} : {value}", field.as_ref())),
            }
        }
        lines.push("Use `set <field> <value>`, then `submit` or `cancel`.".to_string());
        lines.join("\n")
    }

    pub fn dashboard(&self, rows: &[&Registration], stats: SummaryStats, term: &str) -> String {
        let mut lines = vec![
            self.heading("Registration Dashboard"),
            format!(
                "Total Registrations: {}   Events: {}   Sub-Events: {}",
                stats.total, stats.unique_events, stats.unique_sub_events
            ),
        ];
        if !term.is_empty() {
            lines.push(format!("Search: {term:?}"));
        }
        lines.push(String::new());

        if rows.is_empty() {
            let message = if term.is_empty() {
                NO_REGISTRATIONS
            } else {
                NO_MATCHES
            };
            lines.push(message.to_string());
            return lines.join("\n");
        }
        for row in rows {
            lines.push(format!(
                "{}  {} / {}",
                self.paint(&row.id, AnsiColors::BrightBlack),
                row.event_title,
                row.sub_event
            ));
            lines.push(format!(
                "    {} <{}> {} · {} · registered {}",
                row.full_name(),
                row.email,
                row.phone,
                row.year_level,
                row.registered_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        lines.join("\n")
    }

    pub fn registered(&self, registration: &Registration) -> String {
        format!(
            "{} {} registered for {} / {} (id {})",
            self.paint("✓", AnsiColors::Green),
            registration.full_name().trim(),
            registration.event_title,
            registration.sub_event,
            registration.id
        )
    }

    pub fn confirm_delete(&self, registration: &Registration) -> String {
        format!(
            "Cancel registration {} ({}, {})? This action cannot be undone.\nType `confirm` to cancel the registration or `keep` to keep it.",
            registration.id,
            registration.full_name().trim(),
            registration.sub_event
        )
    }

    pub fn error(&self, message: &str) -> String {
        format!("{} {message}", self.paint("✗", AnsiColors::Red))
    }
}

fn details_line(details: &EventDetails) -> Option<String> {
    if details.is_empty() {
        return None;
    }
    let mut parts = Vec::new();
    match (&details.date, &details.time) {
        (Some(date), Some(time)) => parts.push(format!("{date} {time}")),
        (Some(date), None) => parts.push(date.clone()),
        (None, Some(time)) => parts.push(time.clone()),
        (None, None) => {}
    }
    if let Some(location) = &details.location {
        parts.push(location.clone());
    }
    if let Some(price) = details.price {
        parts.push(format!("${price}"));
    }
    if let Some(capacity) = details.capacity {
        parts.push(format!("{capacity} seats"));
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}
