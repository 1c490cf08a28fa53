use chrono::{DateTime, Utc};

use crate::modules::events::core::event::Event;
use crate::modules::registrations::core::draft::{FormField, RegistrationDraft};
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::decision::{
    Decision, ValidationError, ValidationPolicy,
};

const STRICT_FIELDS: [FormField; 4] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::Phone,
];

/// Checks run in order: sub-event present, sub-event belongs to the event, then strict fields.
pub fn validate(
    draft: &RegistrationDraft,
    event: &Event,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    if draft.sub_event.is_empty() {
        return Err(ValidationError::SubEventRequired);
    }
    if !event.has_sub_event(&draft.sub_event) {
        return Err(ValidationError::UnknownSubEvent {
            event_id: event.id.clone(),
            sub_event: draft.sub_event.clone(),
        });
    }
    if policy == ValidationPolicy::Strict {
        if let Some(field) = STRICT_FIELDS
            .into_iter()
            .find(|f| draft.get(*f).trim().is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

pub fn decide_submit(
    draft: &RegistrationDraft,
    event: &Event,
    policy: ValidationPolicy,
    id: String,
    registered_at: DateTime<Utc>,
) -> Decision {
    if let Err(reason) = validate(draft, event, policy) {
        return Decision::Rejected { reason };
    }
    Decision::Accepted {
        registration: Registration {
            id,
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            sub_event: draft.sub_event.clone(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            year_level: draft.year_level,
            registered_at,
        },
    }
}

#[cfg(test)]
mod register_for_event_decide_tests {
    use super::*;
    use crate::modules::registrations::core::registration::YearLevel;
    use crate::tests::fixtures::events::ball_games_event;
    use crate::tests::fixtures::registrations::{filled_draft, fixed_instant};
    use rstest::{fixture, rstest};

    #[fixture]
    fn event() -> Event {
        ball_games_event()
    }

    fn rejection(decision: Decision) -> ValidationError {
        match decision {
            Decision::Rejected { reason } => reason,
            Decision::Accepted { .. } => panic!("expected Rejected decision"),
        }
    }

    #[rstest]
    fn it_should_accept_and_copy_event_and_draft_fields(event: Event) {
        let mut draft = filled_draft();
        draft.year_level = YearLevel::Second;
        let decision = decide_submit(
            &draft,
            &event,
            ValidationPolicy::Lenient,
            "reg-0001".into(),
            fixed_instant(),
        );
        match decision {
            Decision::Accepted { registration } => {
                assert_eq!(registration.id, "reg-0001");
                assert_eq!(registration.event_id, "1");
                assert_eq!(registration.event_title, "Ball Games");
                assert_eq!(registration.sub_event, "Basketball");
                assert_eq!(registration.first_name, "Ada");
                assert_eq!(registration.last_name, "Lovelace");
                assert_eq!(registration.email, "ada@example.com");
                assert_eq!(registration.phone, "123");
                assert_eq!(registration.year_level, YearLevel::Second);
                assert_eq!(registration.registered_at, fixed_instant());
            }
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_reject_a_missing_sub_event(event: Event) {
        let mut draft = filled_draft();
        draft.sub_event.clear();
        let reason = rejection(decide_submit(
            &draft,
            &event,
            ValidationPolicy::Lenient,
            "reg-0001".into(),
            fixed_instant(),
        ));
        assert_eq!(reason, ValidationError::SubEventRequired);
        assert_eq!(reason.to_string(), "sub-event required");
    }

    #[rstest]
    fn it_should_reject_a_sub_event_of_another_event(event: Event) {
        let mut draft = filled_draft();
        draft.sub_event = "Chess".into();
        let reason = rejection(decide_submit(
            &draft,
            &event,
            ValidationPolicy::Lenient,
            "reg-0001".into(),
            fixed_instant(),
        ));
        assert_eq!(
            reason,
            ValidationError::UnknownSubEvent {
                event_id: "1".into(),
                sub_event: "Chess".into(),
            }
        );
    }

    #[rstest]
    fn it_should_accept_blank_contact_fields_when_lenient(event: Event) {
        let draft = RegistrationDraft::seeded(Some("Basketball"));
        let decision = decide_submit(
            &draft,
            &event,
            ValidationPolicy::Lenient,
            "reg-0001".into(),
            fixed_instant(),
        );
        assert!(matches!(decision, Decision::Accepted { .. }));
    }

    #[rstest]
    #[case(FormField::FirstName)]
    #[case(FormField::LastName)]
    #[case(FormField::Email)]
    #[case(FormField::Phone)]
    fn it_should_report_the_blank_field_when_strict(event: Event, #[case] field: FormField) {
        let mut draft = filled_draft();
        draft.set(field, "   ").unwrap();
        let reason = rejection(decide_submit(
            &draft,
            &event,
            ValidationPolicy::Strict,
            "reg-0001".into(),
            fixed_instant(),
        ));
        assert_eq!(reason, ValidationError::MissingField(field));
    }

    #[rstest]
    fn it_should_check_the_sub_event_before_strict_fields(event: Event) {
        let reason = rejection(decide_submit(
            &RegistrationDraft::default(),
            &event,
            ValidationPolicy::Strict,
            "reg-0001".into(),
            fixed_instant(),
        ));
        assert_eq!(reason, ValidationError::SubEventRequired);
    }
}
