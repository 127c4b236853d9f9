use crate::classifier;
use crate::constants::header;
use crate::context::CorsRequest;
use crate::error::ConfigError;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::preflight::{Decision, validate_preflight};
use crate::response::CorsResponse;
use crate::response_builder::ResponseBuilder;
use std::convert::Infallible;
use tracing::{debug, trace};

/// CORS policy engine: the single entry point a host server calls per request.
///
/// The engine holds no mutable state; share it behind an `Arc` across threads.
pub struct Cors<R> {
    policy: CorsPolicy<R>,
}

impl<R: CorsResponse> Cors<R> {
    pub fn new(policy: CorsPolicy<R>) -> Self {
        Self { policy }
    }

    pub fn from_options(options: CorsOptions) -> Result<Self, ConfigError> {
        CorsPolicy::new(options).map(Self::new)
    }

    pub fn policy(&self) -> &CorsPolicy<R> {
        &self.policy
    }

    pub fn is_cors_request(&self, request: &dyn CorsRequest) -> bool {
        classifier::is_cors_request(request)
    }

    pub fn is_preflight_request(&self, request: &dyn CorsRequest) -> bool {
        classifier::is_preflight_request(request)
    }

    /// Runs the request through the policy.
    ///
    /// Non-CORS requests go straight to `next`. Preflights are answered here and `next` is
    /// never invoked. Actual CORS requests get `next`'s response decorated with CORS headers.
    pub fn handle<Q, F>(&self, request: &Q, next: F) -> R
    where
        Q: CorsRequest,
        F: FnOnce(&Q) -> R,
    {
        match self.try_handle(request, |request| Ok::<R, Infallible>(next(request))) {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// Same as [`handle`](Self::handle) for a fallible `next`; its error is returned untouched.
    pub fn try_handle<Q, F, E>(&self, request: &Q, next: F) -> Result<R, E>
    where
        Q: CorsRequest,
        F: FnOnce(&Q) -> Result<R, E>,
    {
        if !self.is_cors_request(request) {
            trace!("no Origin header, passing request through");
            return next(request);
        }

        if self.is_preflight_request(request) {
            return Ok(self.handle_preflight(request));
        }

        if self.is_blocked(request) {
            return Ok(ResponseBuilder::new(&self.policy).build_blocked_response());
        }

        let response = next(request)?;
        Ok(self.decorate(request, response))
    }

    /// Validates a preflight and builds its terminal response.
    pub fn handle_preflight(&self, request: &dyn CorsRequest) -> R {
        let builder = ResponseBuilder::new(&self.policy);
        match validate_preflight(&self.policy, request) {
            Decision::Allowed => builder.build_preflight_response(request),
            rejected => builder.build_rejection_response(&rejected, request),
        }
    }

    /// Adds CORS headers to a response produced for an actual CORS request.
    pub fn decorate(&self, request: &dyn CorsRequest, response: R) -> R {
        ResponseBuilder::new(&self.policy).decorate_actual_response(request, response)
    }

    /// Whether an actual request must be answered with `403` instead of reaching `next`.
    ///
    /// Always `false` unless `block_disallowed_requests` is enabled.
    pub fn is_blocked(&self, request: &dyn CorsRequest) -> bool {
        if !self.policy.block_disallowed_requests() {
            return false;
        }
        let origin = request.header(header::ORIGIN);
        let blocked = !self.policy.origins().is_allowed(origin);
        if blocked {
            debug!(origin, "actual request blocked: origin not allowed");
        }
        blocked
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
