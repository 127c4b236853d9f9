use crate::constants::header;
use crate::context::CorsRequest;
use crate::policy::CorsPolicy;
use crate::util::normalize_upper;
use tracing::debug;

/// Outcome of validating a preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    OriginRejected,
    /// Carries the raw `Access-Control-Request-Method` value.
    MethodRejected { requested_method: String },
    /// Carries the first requested header, lowercased, that the policy does not allow.
    HeaderRejected { requested_header: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Checks origin, then method, then headers, stopping at the first failure.
pub fn validate_preflight<R>(policy: &CorsPolicy<R>, request: &dyn CorsRequest) -> Decision {
    let origin = request.header(header::ORIGIN);
    if !policy.origins().is_allowed(origin) {
        debug!(origin, "preflight rejected: origin not allowed");
        return Decision::OriginRejected;
    }

    let requested_method = request
        .header(header::ACCESS_CONTROL_REQUEST_METHOD)
        .unwrap_or_default();
    if !policy
        .methods()
        .allows_method(&normalize_upper(requested_method.trim()))
    {
        debug!(
            method = requested_method,
            "preflight rejected: method not allowed"
        );
        return Decision::MethodRejected {
            requested_method: requested_method.to_string(),
        };
    }

    if let Some(requested_headers) = request.header(header::ACCESS_CONTROL_REQUEST_HEADERS)
        && let Some(rejected) = policy.headers().first_disallowed(requested_headers)
    {
        debug!(header = %rejected, "preflight rejected: header not allowed");
        return Decision::HeaderRejected {
            requested_header: rejected,
        };
    }

    Decision::Allowed
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
