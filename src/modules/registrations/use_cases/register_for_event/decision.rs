use strum::{AsRefStr, Display, EnumString};

use crate::modules::registrations::core::draft::FormField;
use crate::modules::registrations::core::registration::Registration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("sub-event required")]
    SubEventRequired,

    #[error("sub-event {sub_event:?} is not part of event {event_id}")]
    UnknownSubEvent { event_id: String, sub_event: String },

    #[error("{0} required")]
    MissingField(FormField),
}

/// How strictly a submission is checked beyond the sub-event selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ValidationPolicy {
    /// Only the sub-event is checked; blank contact fields are accepted.
    #[default]
    Lenient,
    /// Name, email and phone must also be non-blank.
    Strict,
}

pub enum Decision {
    Accepted { registration: Registration },
    Rejected { reason: ValidationError },
}
