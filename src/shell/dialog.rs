use thiserror::Error;
use tracing::{debug, info};

use crate::modules::events::core::event::Event;
use crate::modules::registrations::adapters::outbound::registration_store::RegistrationStore;
use crate::modules::registrations::core::draft::{FieldError, FormField};
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::decision::ValidationError;
use crate::modules::registrations::use_cases::register_for_event::handler::{
    RegistrationForm, SubmissionContext,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("no registration form is open")]
    NotOpen,

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Modal around one [`RegistrationForm`]. Closed means no target event and no form state.
pub struct RegistrationDialog {
    form: Option<RegistrationForm>,
    target_sub_event: Option<String>,
    context: SubmissionContext,
}

impl RegistrationDialog {
    pub fn new(context: SubmissionContext) -> Self {
        Self {
            form: None,
            target_sub_event: None,
            context,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn target_event(&self) -> Option<&Event> {
        self.form.as_ref().map(RegistrationForm::event)
    }

    pub fn target_sub_event(&self) -> Option<&str> {
        self.target_sub_event.as_deref()
    }

    pub fn form(&self) -> Option<&RegistrationForm> {
        self.form.as_ref()
    }

    /// Opens on `event`, discarding whatever was in progress before.
    pub fn open(&mut self, event: Event, sub_event: Option<String>) {
        info!(event_id = %event.id, sub_event = ?sub_event, "registration dialog opened");
        match self.form.as_mut() {
            Some(form) => form.initialize(event, sub_event.as_deref()),
            None => {
                self.form = Some(RegistrationForm::new(
                    event,
                    sub_event.as_deref(),
                    self.context.clone(),
                ))
            }
        }
        self.target_sub_event = sub_event;
    }

    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), DialogError> {
        let form = self.form.as_mut().ok_or(DialogError::NotOpen)?;
        form.set_field(field, value)?;
        Ok(())
    }

    /// Appends the produced registration to `store` and closes. Stays open on validation errors.
    pub fn submit(
        &mut self,
        store: &mut impl RegistrationStore,
    ) -> Result<Registration, DialogError> {
        let form = self.form.as_mut().ok_or(DialogError::NotOpen)?;
        let registration = form.submit()?;
        store.append(registration.clone());
        self.close();
        Ok(registration)
    }

    pub fn close(&mut self) {
        if let Some(mut form) = self.form.take() {
            form.cancel();
            debug!(event_id = %form.event().id, "registration dialog closed");
        }
        self.target_sub_event = None;
    }
}
