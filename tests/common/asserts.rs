use super::headers::{Response, has_header, header_value, vary_values};
use cors_gate::constants::header;

pub const DOWNSTREAM_MARKER: &str = "X-Downstream";

pub fn assert_header_eq(response: &Response, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_header_absent(response: &Response, name: &str) {
    assert!(
        !has_header(response, name),
        "header {name} should be absent, got {:?}",
        header_value(response, name)
    );
}

pub fn assert_vary_contains(response: &Response, entry: &str) {
    assert!(
        vary_values(response).contains(entry),
        "Vary should contain {entry}, got {:?}",
        header_value(response, header::VARY)
    );
}

pub fn assert_vary_is_empty(response: &Response) {
    assert!(
        vary_values(response).is_empty(),
        "Vary should be empty, got {:?}",
        header_value(response, header::VARY)
    );
}

pub fn assert_downstream_ran(response: &Response) {
    assert_header_eq(response, DOWNSTREAM_MARKER, "true");
}

pub fn assert_downstream_skipped(response: &Response) {
    assert_header_absent(response, DOWNSTREAM_MARKER);
}

pub fn assert_rejected(response: &Response, status: u16, body: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.body(), body);
    assert_header_absent(response, header::ACCESS_CONTROL_ALLOW_ORIGIN);
    assert_downstream_skipped(response);
}
