use serde::Deserialize;

/// Plain-data CORS configuration, deserializable from any serde format.
///
/// List fields accept `"*"` to allow everything. Conversion into a [`CorsPolicy`]
/// normalizes and validates every entry.
///
/// [`CorsPolicy`]: crate::CorsPolicy
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    #[serde(alias = "allowOrigins")]
    pub allow_origins: Vec<String>,
    #[serde(alias = "allowMethods")]
    pub allow_methods: Vec<String>,
    #[serde(alias = "allowHeaders")]
    pub allow_headers: Vec<String>,
    #[serde(alias = "allowCredentials")]
    pub allow_credentials: bool,
    #[serde(alias = "exposeHeaders")]
    pub expose_headers: Vec<String>,
    /// Seconds a preflight result may be cached. Must not be negative; `0` omits the header.
    #[serde(alias = "maxAge")]
    pub max_age: i64,
    /// Answer actual requests from disallowed origins with `403` instead of passing them through.
    #[serde(alias = "blockDisallowedRequests")]
    pub block_disallowed_requests: bool,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
