use crate::constants::header;

/// Read-only view of an inbound request.
///
/// The engine only ever needs the method and a case-insensitive header lookup.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// Returns the header value, or `None` when absent. An empty value counts as present.
    fn header(&self, name: &str) -> Option<&str>;

    fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// Borrowed request description for hosts that do not use the `http` crate types.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub vary: Option<&'a str>,
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_METHOD) {
            self.access_control_request_method
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            self.access_control_request_headers
        } else if name.eq_ignore_ascii_case(header::VARY) {
            self.vary
        } else {
            None
        }
    }
}

// Values that are not visible ASCII read as `None`, but still count as present.
impl<B> CorsRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
