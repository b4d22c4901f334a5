use super::*;

fn payload(name: &str, email: &str) -> ContactPayload {
    ContactPayload { name: name.into(), email: email.into(), ..ContactPayload::default() }
}

#[test]
fn validate_trims_and_accepts_required_fields() {
    let mut input = payload("  Jane Doe ", " jane@example.com");
    input.message = " Quote for a 2,000 sq ft roof \n".into();

    let valid = validate(&input).unwrap();
    assert_eq!(valid.name, "Jane Doe");
    assert_eq!(valid.email, "jane@example.com");
    assert_eq!(valid.message, "Quote for a 2,000 sq ft roof");
}

#[test]
fn validate_lists_blank_required_fields_in_form_order() {
    let err = validate(&payload("   ", "")).unwrap_err();
    match err {
        ContactError::MissingFields(fields) => assert_eq!(fields, vec![FormField::Name, FormField::Email]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_fields_error_names_keys() {
    let err = ContactError::MissingFields(vec![FormField::Name, FormField::Email]);
    assert_eq!(err.to_string(), "missing required fields: name, email");
}

#[test]
fn escape_html_escapes_markup_characters() {
    assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn render_template_fills_and_escapes_fields() {
    let mut input = payload("Ann <script>", "ann@example.com");
    input.message = "Call me after 5 & before 8".into();

    let html = render_contact_template(&input);
    assert!(html.contains("Ann &lt;script&gt;"));
    assert!(html.contains("ann@example.com"));
    assert!(html.contains("Call me after 5 &amp; before 8"));
    assert!(!html.contains("{{"));
}

#[test]
fn render_template_dashes_empty_optional_fields() {
    let html = render_contact_template(&payload("Ann", "ann@example.com"));
    assert!(html.contains("<td>-</td>"));
}

#[test]
fn mailer_keeps_configured_inbox() {
    let mailer = Mailer::new(&MailConfig {
        api_key: "re_test".into(),
        from: "site@zenithsolar.com".into(),
        inbox: "quotes@zenithsolar.com".into(),
    });
    assert_eq!(mailer.inbox(), "quotes@zenithsolar.com");
}
