use super::*;

fn filled(name: &str, email: &str) -> FormSession {
    let mut session = FormSession::default();
    session.set_field(FormField::Name, name);
    session.set_field(FormField::Email, email);
    session
}

// =============================================================
// FormField
// =============================================================

#[test]
fn form_field_keys_are_unique() {
    let keys = FormField::ALL.map(FormField::key);
    for (i, key) in keys.iter().enumerate() {
        assert!(!keys[i + 1..].contains(key));
    }
}

#[test]
fn only_name_and_email_are_required() {
    let required = FormField::ALL
        .into_iter()
        .filter(|f| f.is_required())
        .collect::<Vec<_>>();
    assert_eq!(required, vec![FormField::Name, FormField::Email]);
}

// =============================================================
// submit
// =============================================================

#[test]
fn session_starts_editing_and_empty() {
    let session = FormSession::default();
    assert_eq!(session.phase(), FormPhase::Editing);
    assert_eq!(session.fields(), &ContactPayload::default());
}

#[test]
fn submit_with_blank_name_stays_editing() {
    let mut session = filled("", "a@b.com");
    let err = session.submit().unwrap_err();
    assert_eq!(err, SubmitError::MissingRequired(vec![FormField::Name]));
    assert_eq!(session.phase(), FormPhase::Editing);
    assert_eq!(session.error_for(FormField::Name), Some("Please enter your name."));
    assert_eq!(session.error_for(FormField::Email), None);
}

#[test]
fn submit_treats_whitespace_as_missing() {
    let mut session = filled("   ", "\t");
    let err = session.submit().unwrap_err();
    assert_eq!(err, SubmitError::MissingRequired(vec![FormField::Name, FormField::Email]));
    assert_eq!(session.missing_fields(), &[FormField::Name, FormField::Email]);
}

#[test]
fn editing_field_clears_its_error() {
    let mut session = FormSession::default();
    let _ = session.submit();
    assert!(session.error_for(FormField::Name).is_some());
    session.set_field(FormField::Name, "A");
    assert_eq!(session.error_for(FormField::Name), None);
    assert!(session.error_for(FormField::Email).is_some());
}

#[test]
fn submit_with_required_fields_transitions() {
    let mut session = filled("A", "a@b.com");
    session.set_field(FormField::Message, "  roof faces south  ");
    let submission = session.submit().unwrap();
    assert_eq!(session.phase(), FormPhase::Submitted);
    assert_eq!(submission.payload.name, "A");
    assert_eq!(submission.payload.email, "a@b.com");
    assert_eq!(submission.payload.message, "roof faces south");
    assert_eq!(submission.payload.phone, "");
}

#[test]
fn submitted_form_is_frozen() {
    let mut session = filled("A", "a@b.com");
    session.submit().unwrap();
    assert!(!session.set_field(FormField::Name, "B"));
    assert_eq!(session.value(FormField::Name), "A");
    assert_eq!(session.submit(), Err(SubmitError::AlreadySubmitted));
}

// =============================================================
// complete_reset
// =============================================================

#[test]
fn reset_after_delay_clears_fields() {
    let mut session = filled("A", "a@b.com");
    session.set_field(FormField::Phone, "555");
    let submission = session.submit().unwrap();
    assert!(session.complete_reset(submission.ticket));
    assert_eq!(session.phase(), FormPhase::Editing);
    for field in FormField::ALL {
        assert_eq!(session.value(field), "");
    }
}

#[test]
fn stale_ticket_does_not_reset_newer_submission() {
    let mut session = filled("A", "a@b.com");
    let first = session.submit().unwrap();
    assert!(session.complete_reset(first.ticket));

    session.set_field(FormField::Name, "B");
    session.set_field(FormField::Email, "b@c.com");
    let second = session.submit().unwrap();

    assert!(!session.complete_reset(first.ticket));
    assert!(session.is_submitted());
    assert!(session.complete_reset(second.ticket));
}

#[test]
fn reset_while_editing_is_ignored() {
    let mut session = filled("A", "a@b.com");
    let submission = session.submit().unwrap();
    session.complete_reset(submission.ticket);
    session.set_field(FormField::Name, "draft");
    assert!(!session.complete_reset(submission.ticket));
    assert_eq!(session.value(FormField::Name), "draft");
}

#[test]
fn reset_delay_is_three_seconds() {
    assert_eq!(RESET_DELAY.as_millis(), 3000);
}

// =============================================================
// ContactPayload
// =============================================================

#[test]
fn payload_deserializes_with_optional_fields_missing() {
    let payload: ContactPayload = serde_json::from_str(r#"{"name":"A","email":"a@b.com"}"#).unwrap();
    assert_eq!(payload.name, "A");
    assert!(payload.missing_required().is_empty());
    assert_eq!(payload.address, "");
}
