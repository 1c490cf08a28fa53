use thiserror::Error;
use tracing::{debug, info};

use crate::modules::registrations::adapters::outbound::registration_store::RegistrationStore;
use crate::modules::registrations::core::registration::Registration;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CancelError {
    #[error("no registration with id {0}")]
    UnknownRegistration(String),

    #[error("no registration is awaiting confirmation")]
    NothingPending,
}

/// Two-step delete: an id is marked first and only removed once confirmed.
#[derive(Debug, Default)]
pub struct PendingDelete {
    id: Option<String>,
}

impl PendingDelete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Marks `id` for deletion, replacing any earlier mark.
    pub fn request(&mut self, store: &impl RegistrationStore, id: &str) -> Result<(), CancelError> {
        if store.get(id).is_none() {
            return Err(CancelError::UnknownRegistration(id.to_string()));
        }
        debug!(registration_id = %id, "delete requested");
        self.id = Some(id.to_string());
        Ok(())
    }

    /// Keeps the registration. Returns the id that was pending, if any.
    pub fn cancel(&mut self) -> Option<String> {
        let id = self.id.take();
        if let Some(id) = &id {
            debug!(registration_id = %id, "delete dismissed");
        }
        id
    }

    /// Deletes the pending id. `Ok(None)` when it was already gone from the store.
    pub fn confirm(
        &mut self,
        store: &mut impl RegistrationStore,
    ) -> Result<Option<Registration>, CancelError> {
        let id = self.id.take().ok_or(CancelError::NothingPending)?;
        info!(registration_id = %id, "delete confirmed");
        Ok(store.delete_by_id(&id))
    }
}
