use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use cors_gate::{RequestContext, ResponseBuilder, constants::header};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    if !cors.is_cors_request(&request) {
        return next.run(request).await;
    }

    if cors.is_preflight_request(&request) {
        return cors.handle_preflight(&request);
    }

    if cors.is_blocked(&request) {
        return ResponseBuilder::new(cors.policy()).build_blocked_response();
    }

    // `next` consumes the request, so keep what decoration needs.
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let response = next.run(request).await;
    let context = owned_ctx.as_request_context();

    cors.decorate(&context, response)
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    vary: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            vary: header_value(headers, header::VARY),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            vary: self.vary.as_deref(),
            ..RequestContext::default()
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
