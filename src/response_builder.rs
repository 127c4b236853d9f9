use crate::constants::{WILDCARD, header, message};
use crate::context::CorsRequest;
use crate::headers::merge_vary;
use crate::policy::{CorsPolicy, RejectionHook};
use crate::preflight::Decision;
use crate::response::CorsResponse;
use crate::util::{normalize_upper, split_header_list};
use tracing::trace;

const STATUS_OK: u16 = 200;
const STATUS_FORBIDDEN: u16 = 403;
const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// Synthesizes preflight and rejection responses, and decorates actual responses.
pub struct ResponseBuilder<'a, R> {
    policy: &'a CorsPolicy<R>,
}

impl<'a, R: CorsResponse> ResponseBuilder<'a, R> {
    pub fn new(policy: &'a CorsPolicy<R>) -> Self {
        Self { policy }
    }

    /// Builds the `200` answer to a preflight the policy allows.
    pub fn build_preflight_response(&self, request: &dyn CorsRequest) -> R {
        let mut response = R::from_parts(STATUS_OK, String::new());

        self.apply_allow_origin(request, &mut response);
        self.apply_credentials(&mut response);

        let max_age = self.policy.max_age();
        if max_age > 0 {
            response.set_header(header::ACCESS_CONTROL_MAX_AGE, &max_age.to_string());
        }

        let allow_methods = if self.policy.methods().is_any() {
            request
                .header(header::ACCESS_CONTROL_REQUEST_METHOD)
                .map(|method| normalize_upper(method.trim()))
                .filter(|method| !method.is_empty())
        } else {
            self.policy.methods().header_value()
        };
        if let Some(value) = allow_methods {
            response.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, &value);
        }

        let allow_headers = if self.policy.headers().is_any() {
            request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .map(|headers| split_header_list(headers).collect::<Vec<_>>().join(", "))
                .filter(|headers| !headers.is_empty())
        } else {
            self.policy.headers().header_value()
        };
        if let Some(value) = allow_headers {
            response.set_header(header::ACCESS_CONTROL_ALLOW_HEADERS, &value);
        }

        response
    }

    /// Builds the terminal response for a preflight decision.
    ///
    /// Rejections use the matching hook when one is configured, otherwise a plain-text default.
    /// [`Decision::Allowed`] is answered with [`build_preflight_response`](Self::build_preflight_response).
    pub fn build_rejection_response(&self, decision: &Decision, request: &dyn CorsRequest) -> R {
        match decision {
            Decision::Allowed => self.build_preflight_response(request),
            Decision::OriginRejected => Self::reject(
                self.policy.on_origin_rejected(),
                request,
                STATUS_FORBIDDEN,
                message::ORIGIN_NOT_ALLOWED,
            ),
            Decision::MethodRejected { .. } => Self::reject(
                self.policy.on_method_rejected(),
                request,
                STATUS_METHOD_NOT_ALLOWED,
                message::METHOD_NOT_ALLOWED,
            ),
            Decision::HeaderRejected { .. } => Self::reject(
                self.policy.on_header_rejected(),
                request,
                STATUS_FORBIDDEN,
                message::HEADER_NOT_ALLOWED,
            ),
        }
    }

    /// Answer for actual requests from disallowed origins when blocking is enabled.
    pub fn build_blocked_response(&self) -> R {
        R::from_parts(STATUS_FORBIDDEN, message::REQUEST_NOT_ALLOWED.to_string())
    }

    /// Adds CORS headers to the downstream response when the request origin is allowed.
    ///
    /// A disallowed origin leaves the response untouched. `Origin` is appended to the
    /// response's own `Vary`; the request's `Vary` is used only when the response has none.
    pub fn decorate_actual_response(&self, request: &dyn CorsRequest, mut response: R) -> R {
        let origin = request.header(header::ORIGIN);
        if !self.policy.origins().is_allowed(origin) {
            trace!(origin, "origin not allowed, response passed through unchanged");
            return response;
        }

        self.apply_allow_origin(request, &mut response);

        if !self.policy.origins().is_any() {
            let existing = response
                .header(header::VARY)
                .or_else(|| request.header(header::VARY));
            let vary = merge_vary(existing, header::ORIGIN);
            response.set_header(header::VARY, &vary);
        }

        self.apply_credentials(&mut response);

        if let Some(value) = self.policy.exposed_headers().header_value() {
            response.set_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &value);
        }

        response
    }

    fn apply_allow_origin(&self, request: &dyn CorsRequest, response: &mut R) {
        if self.policy.origins().is_any() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
        } else {
            let origin = request.header(header::ORIGIN).unwrap_or_default();
            response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
    }

    fn apply_credentials(&self, response: &mut R) {
        if self.policy.credentials() {
            response.set_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn reject(
        hook: Option<&RejectionHook<R>>,
        request: &dyn CorsRequest,
        status: u16,
        body: &str,
    ) -> R {
        match hook {
            Some(hook) => hook(request),
            None => R::from_parts(status, body.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "response_builder_test.rs"]
mod response_builder_test;
