use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use tracing::warn;

/// Mutable response sink the engine decorates or creates.
pub trait CorsResponse: Sized {
    /// Creates a fresh response carrying `status` and a plain-text `body`.
    fn from_parts(status: u16, body: String) -> Self;

    fn status(&self) -> u16;

    fn set_status(&mut self, status: u16);

    fn header(&self, name: &str) -> Option<&str>;

    fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Replaces any existing value of `name`.
    fn set_header(&mut self, name: &str, value: &str);
}

impl<B> CorsResponse for http::Response<B>
where
    B: From<String>,
{
    fn from_parts(status: u16, body: String) -> Self {
        let mut response = http::Response::new(B::from(body));
        response.set_status(status);
        response
    }

    fn status(&self) -> u16 {
        http::Response::status(self).as_u16()
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => warn!(status, "ignoring invalid response status"),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::try_from(name),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers_mut().insert(name, value);
            }
            _ => warn!(header = name, value, "dropping header that is not valid HTTP"),
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
