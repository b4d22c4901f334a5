use super::*;

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(400), "contact request failed: 400");
}

#[test]
fn contact_endpoint_is_under_api() {
    assert!(CONTACT_ENDPOINT.starts_with("/api/"));
}
