use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::modules::registrations::core::registration::YearLevel;

/// Fields a registration form exposes. Accepts camelCase or snake_case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FormField {
    #[strum(to_string = "subEvent", serialize = "sub_event")]
    SubEvent,
    #[strum(to_string = "firstName", serialize = "first_name")]
    FirstName,
    #[strum(to_string = "lastName", serialize = "last_name")]
    LastName,
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "phone")]
    Phone,
    #[strum(to_string = "yearLevel", serialize = "year_level")]
    YearLevel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("invalid year level {0:?}, expected one of 1st Year .. 5th Year")]
    InvalidYearLevel(String),
}

/// In-progress field values of one registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub sub_event: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub year_level: YearLevel,
}

impl RegistrationDraft {
    pub fn seeded(preselected_sub_event: Option<&str>) -> Self {
        Self {
            sub_event: preselected_sub_event.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Plain assignment of one field. Only the year level is parsed; text fields take any value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        match field {
            FormField::SubEvent => self.sub_event = value,
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::YearLevel => {
                self.year_level = value
                    .parse()
                    .map_err(|_| FieldError::InvalidYearLevel(value))?;
            }
        }
        Ok(())
    }

    pub fn set_named(&mut self, field: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let field: FormField = field
            .parse()
            .map_err(|_| FieldError::UnknownField(field.to_string()))?;
        self.set(field, value)
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SubEvent => &self.sub_event,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::YearLevel => self.year_level.as_ref(),
        }
    }
}
