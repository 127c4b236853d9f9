use crate::constants::{header, method};
use crate::context::CorsRequest;

/// A request is cross-origin as soon as it carries an `Origin` header, even an empty one.
pub fn is_cors_request(request: &dyn CorsRequest) -> bool {
    request.has_header(header::ORIGIN)
}

/// `OPTIONS` + `Origin` + `Access-Control-Request-Method`.
pub fn is_preflight_request(request: &dyn CorsRequest) -> bool {
    is_cors_request(request)
        && request.method().eq_ignore_ascii_case(method::OPTIONS)
        && request.has_header(header::ACCESS_CONTROL_REQUEST_METHOD)
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;
