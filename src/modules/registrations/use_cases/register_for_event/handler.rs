use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::modules::events::core::event::Event;
use crate::modules::registrations::core::draft::{FieldError, FormField, RegistrationDraft};
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::decide::{decide_submit, validate};
use crate::modules::registrations::use_cases::register_for_event::decision::{
    Decision, ValidationError, ValidationPolicy,
};
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Ids};

/// Collaborators a form needs to turn a valid draft into a [`Registration`].
#[derive(Clone)]
pub struct SubmissionContext {
    pub policy: ValidationPolicy,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
}

impl SubmissionContext {
    pub fn new(
        policy: ValidationPolicy,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { policy, clock, ids }
    }
}

impl Default for SubmissionContext {
    fn default() -> Self {
        Self::new(
            ValidationPolicy::default(),
            Arc::new(SystemClock),
            Arc::new(UuidV7Ids),
        )
    }
}

/// Field state of exactly one in-progress registration for one event.
pub struct RegistrationForm {
    event: Event,
    draft: RegistrationDraft,
    context: SubmissionContext,
}

impl RegistrationForm {
    pub fn new(
        event: Event,
        preselected_sub_event: Option<&str>,
        context: SubmissionContext,
    ) -> Self {
        debug!(
            event_id = %event.id,
            preselected = ?preselected_sub_event,
            "registration form initialized"
        );
        Self {
            draft: RegistrationDraft::seeded(preselected_sub_event),
            event,
            context,
        }
    }

    /// Replaces any in-progress state with defaults for `event`.
    pub fn initialize(&mut self, event: Event, preselected_sub_event: Option<&str>) {
        debug!(
            event_id = %event.id,
            preselected = ?preselected_sub_event,
            "registration form initialized"
        );
        self.event = event;
        self.draft = RegistrationDraft::seeded(preselected_sub_event);
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        self.draft.set(field, value)?;
        debug!(field = %field, "registration form field set");
        Ok(())
    }

    /// On success the draft resets to defaults. On failure nothing changes, the id generator
    /// and clock included.
    pub fn submit(&mut self) -> Result<Registration, ValidationError> {
        if let Err(reason) = validate(&self.draft, &self.event, self.context.policy) {
            warn!(event_id = %self.event.id, %reason, "registration rejected");
            return Err(reason);
        }
        let id = self.context.ids.next_id();
        let now = self.context.clock.now();
        match decide_submit(&self.draft, &self.event, self.context.policy, id, now) {
            Decision::Accepted { registration } => {
                info!(
                    registration_id = %registration.id,
                    event_id = %registration.event_id,
                    sub_event = %registration.sub_event,
                    "registration submitted"
                );
                self.draft = RegistrationDraft::default();
                Ok(registration)
            }
            Decision::Rejected { reason } => {
                warn!(event_id = %self.event.id, %reason, "registration rejected");
                Err(reason)
            }
        }
    }

    pub fn cancel(&mut self) {
        debug!(event_id = %self.event.id, "registration form cancelled");
        self.draft = RegistrationDraft::default();
    }
}
