use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::context::CorsRequest;
use crate::error::ConfigError;
use crate::exposed_headers::ExposedHeaders;
use crate::options::CorsOptions;
use crate::origin::AllowedOrigins;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Produces a complete response for a rejected preflight, replacing the default body.
pub type RejectionHook<R> = Arc<dyn Fn(&dyn CorsRequest) -> R + Send + Sync>;

/// Immutable CORS policy shared by every request the engine handles.
pub struct CorsPolicy<R> {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    headers: AllowedHeaders,
    credentials: bool,
    exposed_headers: ExposedHeaders,
    max_age: u64,
    block_disallowed_requests: bool,
    on_origin_rejected: Option<RejectionHook<R>>,
    on_method_rejected: Option<RejectionHook<R>>,
    on_header_rejected: Option<RejectionHook<R>>,
}

impl<R> CorsPolicy<R> {
    /// Builds a policy without rejection hooks.
    pub fn new(options: CorsOptions) -> Result<Self, ConfigError> {
        CorsPolicyBuilder::from_options(options)?.build()
    }

    pub fn builder() -> CorsPolicyBuilder<R> {
        CorsPolicyBuilder::new()
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    pub fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub fn headers(&self) -> &AllowedHeaders {
        &self.headers
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    pub fn block_disallowed_requests(&self) -> bool {
        self.block_disallowed_requests
    }

    pub(crate) fn on_origin_rejected(&self) -> Option<&RejectionHook<R>> {
        self.on_origin_rejected.as_ref()
    }

    pub(crate) fn on_method_rejected(&self) -> Option<&RejectionHook<R>> {
        self.on_method_rejected.as_ref()
    }

    pub(crate) fn on_header_rejected(&self) -> Option<&RejectionHook<R>> {
        self.on_header_rejected.as_ref()
    }
}

impl<R> Clone for CorsPolicy<R> {
    fn clone(&self) -> Self {
        Self {
            origins: self.origins.clone(),
            methods: self.methods.clone(),
            headers: self.headers.clone(),
            credentials: self.credentials,
            exposed_headers: self.exposed_headers.clone(),
            max_age: self.max_age,
            block_disallowed_requests: self.block_disallowed_requests,
            on_origin_rejected: self.on_origin_rejected.clone(),
            on_method_rejected: self.on_method_rejected.clone(),
            on_header_rejected: self.on_header_rejected.clone(),
        }
    }
}

impl<R> fmt::Debug for CorsPolicy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsPolicy")
            .field("origins", &self.origins)
            .field("methods", &self.methods)
            .field("headers", &self.headers)
            .field("credentials", &self.credentials)
            .field("exposed_headers", &self.exposed_headers)
            .field("max_age", &self.max_age)
            .field("block_disallowed_requests", &self.block_disallowed_requests)
            .field("on_origin_rejected", &self.on_origin_rejected.is_some())
            .field("on_method_rejected", &self.on_method_rejected.is_some())
            .field("on_header_rejected", &self.on_header_rejected.is_some())
            .finish()
    }
}

/// Step-by-step construction of a [`CorsPolicy`]; validation happens in [`build`](Self::build).
pub struct CorsPolicyBuilder<R> {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    headers: AllowedHeaders,
    credentials: bool,
    exposed_headers: ExposedHeaders,
    max_age: i64,
    block_disallowed_requests: bool,
    on_origin_rejected: Option<RejectionHook<R>>,
    on_method_rejected: Option<RejectionHook<R>>,
    on_header_rejected: Option<RejectionHook<R>>,
}

impl<R> Default for CorsPolicyBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CorsPolicyBuilder<R> {
    pub fn new() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: AllowedMethods::default(),
            headers: AllowedHeaders::default(),
            credentials: false,
            exposed_headers: ExposedHeaders::default(),
            max_age: 0,
            block_disallowed_requests: false,
            on_origin_rejected: None,
            on_method_rejected: None,
            on_header_rejected: None,
        }
    }

    /// Starts from deserialized options. Fails only when an origin pattern cannot be compiled.
    pub fn from_options(options: CorsOptions) -> Result<Self, ConfigError> {
        let CorsOptions {
            allow_origins,
            allow_methods,
            allow_headers,
            allow_credentials,
            expose_headers,
            max_age,
            block_disallowed_requests,
        } = options;

        Ok(Self::new()
            .allow_origins(AllowedOrigins::list(allow_origins)?)
            .allow_methods(AllowedMethods::list(allow_methods))
            .allow_headers(AllowedHeaders::list(allow_headers))
            .allow_credentials(allow_credentials)
            .expose_headers(ExposedHeaders::list(expose_headers))
            .max_age(max_age)
            .block_disallowed_requests(block_disallowed_requests))
    }

    pub fn allow_origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = origins;
        self
    }

    pub fn allow_methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allow_headers(mut self, headers: AllowedHeaders) -> Self {
        self.headers = headers;
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn expose_headers(mut self, headers: ExposedHeaders) -> Self {
        self.exposed_headers = headers;
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn block_disallowed_requests(mut self, enabled: bool) -> Self {
        self.block_disallowed_requests = enabled;
        self
    }

    pub fn on_origin_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> R + Send + Sync + 'static,
    {
        self.on_origin_rejected = Some(Arc::new(hook));
        self
    }

    pub fn on_method_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> R + Send + Sync + 'static,
    {
        self.on_method_rejected = Some(Arc::new(hook));
        self
    }

    pub fn on_header_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> R + Send + Sync + 'static,
    {
        self.on_header_rejected = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<CorsPolicy<R>, ConfigError> {
        let max_age = u64::try_from(self.max_age).map_err(|_| ConfigError::NegativeMaxAge {
            value: self.max_age,
        })?;
        self.methods.validate()?;
        self.headers.validate()?;
        self.exposed_headers.validate()?;

        if self.credentials && self.origins.is_any() {
            warn!(
                "allow_credentials is combined with allow-all origins; browsers reject \
                 credentialed responses carrying Access-Control-Allow-Origin: *"
            );
        }

        Ok(CorsPolicy {
            origins: self.origins,
            methods: self.methods,
            headers: self.headers,
            credentials: self.credentials,
            exposed_headers: self.exposed_headers,
            max_age,
            block_disallowed_requests: self.block_disallowed_requests,
            on_origin_rejected: self.on_origin_rejected,
            on_method_rejected: self.on_method_rejected,
            on_header_rejected: self.on_header_rejected,
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
