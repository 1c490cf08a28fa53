use thiserror::Error;
use tracing::debug;

use crate::modules::events::core::catalog::Catalog;
use crate::modules::events::use_cases::list_events::filter::{
    CategoryKey, FilterBy, filter_events, filter_options,
};
use crate::modules::registrations::adapters::outbound::registration_store::RegistrationStore;
use crate::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use crate::modules::registrations::use_cases::cancel_registration::handler::{
    CancelError, PendingDelete,
};
use crate::modules::registrations::use_cases::register_for_event::handler::SubmissionContext;
use crate::shell::command::{Command, joined};
use crate::shell::dialog::{DialogError, RegistrationDialog};
use crate::shell::render::Renderer;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no event with id {0:?}")]
    UnknownEvent(String),

    #[error("sub-event {sub_event:?} is not part of {event_title}")]
    UnknownSubEvent {
        event_title: String,
        sub_event: String,
    },

    #[error(transparent)]
    Dialog(#[from] DialogError),

    #[error(transparent)]
    Cancel(#[from] CancelError),

    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Events,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// One user's session: owns the catalog, the only writable registration store and all view state.
pub struct Session {
    catalog: Catalog,
    filter_by: FilterBy,
    store: InMemoryRegistrationStore,
    dialog: RegistrationDialog,
    pending_delete: PendingDelete,
    view: View,
    category: CategoryKey,
    search_term: String,
    renderer: Renderer,
}

impl Session {
    pub fn new(
        catalog: Catalog,
        filter_by: FilterBy,
        context: SubmissionContext,
        renderer: Renderer,
    ) -> Self {
        Self {
            catalog,
            filter_by,
            store: InMemoryRegistrationStore::new(),
            dialog: RegistrationDialog::new(context),
            pending_delete: PendingDelete::new(),
            view: View::default(),
            category: CategoryKey::All,
            search_term: String::new(),
            renderer,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dialog(&self) -> &RegistrationDialog {
        &self.dialog
    }

    pub fn store(&self) -> &impl RegistrationStore {
        &self.store
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.pending()
    }

    pub fn render_current(&self) -> String {
        if let Some(form) = self.dialog.form() {
            return self.renderer.form(form);
        }
        match self.view {
            View::Events => {
                let shown = filter_events(&self.catalog, &self.category, self.filter_by);
                let options = filter_options(&self.catalog, self.filter_by);
                self.renderer.events(&shown, &options, &self.category)
            }
            View::Dashboard => self.renderer.dashboard(
                &self.store.search(&self.search_term),
                self.store.summary_stats(),
                &self.search_term,
            ),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        debug!(?command, "executing command");
        let output = match command {
            Command::Events { key } => {
                if let Some(key) = joined(&key) {
                    self.category = CategoryKey::from(key.as_str());
                }
                self.view = View::Events;
                self.render_current()
            }
            Command::Dashboard => {
                self.view = View::Dashboard;
                self.render_current()
            }
            Command::Search { term } => {
                self.search_term = joined(&term).unwrap_or_default();
                self.view = View::Dashboard;
                self.render_current()
            }
            Command::Register {
                event_id,
                sub_event,
            } => {
                let sub_event = joined(&sub_event);
                let event = self
                    .catalog
                    .find(&event_id)
                    .ok_or_else(|| SessionError::UnknownEvent(event_id.clone()))?;
                if let Some(name) = sub_event.as_deref() {
                    if !event.has_sub_event(name) {
                        return Err(SessionError::UnknownSubEvent {
                            event_title: event.title.clone(),
                            sub_event: name.to_string(),
                        });
                    }
                }
                self.dialog.open(event.clone(), sub_event);
                self.render_current()
            }
            Command::Set { field, value } => {
                self.dialog.set_field(field, value.join(" "))?;
                self.render_current()
            }
            Command::Submit => {
                let registration = self.dialog.submit(&mut self.store)?;
                self.renderer.registered(&registration)
            }
            Command::Cancel => {
                if !self.dialog.is_open() {
                    return Err(DialogError::NotOpen.into());
                }
                self.dialog.close();
                self.render_current()
            }
            Command::Delete { id } => {
                self.pending_delete.request(&self.store, &id)?;
                match self.store.get(&id) {
                    Some(registration) => self.renderer.confirm_delete(registration),
                    None => return Err(CancelError::UnknownRegistration(id).into()),
                }
            }
            Command::Confirm => {
                self.pending_delete.confirm(&mut self.store)?;
                self.view = View::Dashboard;
                self.render_current()
            }
            Command::Keep => {
                if self.pending_delete.cancel().is_none() {
                    return Err(CancelError::NothingPending.into());
                }
                self.render_current()
            }
            Command::Export => serde_json::to_string_pretty(self.store.all())?,
            Command::Help => Command::help(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }
}
