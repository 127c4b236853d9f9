use super::asserts::DOWNSTREAM_MARKER;
use super::headers::Response;
use cors_gate::constants::{header, method};
use cors_gate::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsPolicy, CorsPolicyBuilder,
    CorsRequest, ExposedHeaders,
};

pub struct CorsBuilder {
    inner: CorsPolicyBuilder<Response>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self {
            inner: CorsPolicy::builder(),
        }
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = AllowedOrigins::list(origins).expect("valid origin configuration");
        self.inner = self.inner.allow_origins(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner = self.inner.allow_methods(AllowedMethods::list(methods));
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner = self.inner.allow_headers(AllowedHeaders::list(headers));
        self
    }

    pub fn allow_all(self) -> Self {
        self.origins(["*"]).methods(["*"]).headers(["*"])
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.inner = self.inner.allow_credentials(enabled);
        self
    }

    pub fn expose<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner = self.inner.expose_headers(ExposedHeaders::list(headers));
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.inner = self.inner.max_age(seconds);
        self
    }

    pub fn block_disallowed(mut self, enabled: bool) -> Self {
        self.inner = self.inner.block_disallowed_requests(enabled);
        self
    }

    pub fn on_origin_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> Response + Send + Sync + 'static,
    {
        self.inner = self.inner.on_origin_rejected(hook);
        self
    }

    pub fn on_method_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> Response + Send + Sync + 'static,
    {
        self.inner = self.inner.on_method_rejected(hook);
        self
    }

    pub fn on_header_rejected<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn CorsRequest) -> Response + Send + Sync + 'static,
    {
        self.inner = self.inner.on_header_rejected(hook);
        self
    }

    pub fn build(self) -> Cors<Response> {
        Cors::new(self.inner.build().expect("valid CORS configuration"))
    }
}

pub fn downstream() -> Response {
    http::Response::builder()
        .status(200)
        .header(DOWNSTREAM_MARKER, "true")
        .body("downstream".to_string())
        .expect("valid downstream response")
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
    vary: Option<String>,
    response_vary: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
            vary: None,
            response_vary: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn vary(mut self, vary: impl Into<String>) -> Self {
        self.vary = Some(vary.into());
        self
    }

    /// `Vary` already present on the downstream response.
    pub fn response_vary(mut self, vary: impl Into<String>) -> Self {
        self.response_vary = Some(vary.into());
        self
    }

    pub fn build(&self) -> http::Request<()> {
        let mut request = http::Request::builder().method(self.method.as_str());
        if let Some(origin) = &self.origin {
            request = request.header(header::ORIGIN, origin.as_str());
        }
        if let Some(vary) = &self.vary {
            request = request.header(header::VARY, vary.as_str());
        }
        request.body(()).expect("valid simple request")
    }

    pub fn send(self, cors: &Cors<Response>) -> Response {
        let request = self.build();
        let response_vary = self.response_vary;
        cors.handle(&request, |_| {
            let mut response = downstream();
            if let Some(vary) = response_vary {
                response.headers_mut().insert(
                    header::VARY,
                    vary.parse().expect("valid Vary header value"),
                );
            }
            response
        })
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    method: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(&self) -> http::Request<()> {
        let mut request = http::Request::builder()
            .method(self.method.as_deref().unwrap_or(method::OPTIONS));
        if let Some(origin) = &self.origin {
            request = request.header(header::ORIGIN, origin.as_str());
        }
        if let Some(request_method) = &self.request_method {
            request = request.header(header::ACCESS_CONTROL_REQUEST_METHOD, request_method.as_str());
        }
        if let Some(request_headers) = &self.request_headers {
            request = request.header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                request_headers.as_str(),
            );
        }
        request.body(()).expect("valid preflight request")
    }

    pub fn send(self, cors: &Cors<Response>) -> Response {
        let request = self.build();
        cors.handle(&request, |_| downstream())
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
