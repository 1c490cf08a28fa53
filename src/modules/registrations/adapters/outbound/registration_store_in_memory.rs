use tracing::{debug, info};

use crate::modules::registrations::adapters::outbound::registration_store::RegistrationStore;
use crate::modules::registrations::core::registration::Registration;

#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    rows: Vec<Registration>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistrationStore for InMemoryRegistrationStore {
    fn append(&mut self, registration: Registration) {
        info!(
            registration_id = %registration.id,
            total = self.rows.len() + 1,
            "registration stored"
        );
        self.rows.push(registration);
    }

    fn delete_by_id(&mut self, id: &str) -> Option<Registration> {
        match self.rows.iter().position(|r| r.id == id) {
            Some(index) => {
                let removed = self.rows.remove(index);
                info!(registration_id = %id, total = self.rows.len(), "registration deleted");
                Some(removed)
            }
            None => {
                debug!(registration_id = %id, "delete ignored, no such registration");
                None
            }
        }
    }

    fn all(&self) -> &[Registration] {
        &self.rows
    }
}
