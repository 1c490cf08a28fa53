// Port for the session's registration collection. The owner holds the only `&mut`; views read
// through `all`, `search` and `summary_stats`.

use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::browse_registrations::queries::{
    self, SummaryStats,
};

pub trait RegistrationStore {
    /// Appends at the end. Id uniqueness is the caller's responsibility.
    fn append(&mut self, registration: Registration);

    /// Removes the first record with `id`. Absent ids are a no-op.
    fn delete_by_id(&mut self, id: &str) -> Option<Registration>;

    fn all(&self) -> &[Registration];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    fn get(&self, id: &str) -> Option<&Registration> {
        self.all().iter().find(|r| r.id == id)
    }

    fn search(&self, term: &str) -> Vec<&Registration> {
        queries::search(self.all(), term)
    }

    fn summary_stats(&self) -> SummaryStats {
        queries::summary_stats(self.all())
    }
}
