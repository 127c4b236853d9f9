use std::sync::Arc;

use axum::response::Response;
use cors_gate::{ConfigError, Cors, CorsOptions};

pub type SharedCors = Arc<Cors<Response>>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    let options = CorsOptions {
        allow_origins: vec![
            "http://api.example.com".into(),
            "https://*.example.com".into(),
        ],
        allow_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allow_headers: vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ],
        allow_credentials: true,
        expose_headers: vec!["X-Example-Trace".into()],
        max_age: 600,
        block_disallowed_requests: false,
    };

    let cors = Arc::new(Cors::from_options(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
