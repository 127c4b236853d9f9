mod allowed_headers;
mod allowed_methods;
mod classifier;
pub mod constants;
mod context;
mod cors;
mod error;
mod exposed_headers;
mod headers;
mod options;
mod origin;
mod policy;
mod preflight;
mod response;
mod response_builder;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use classifier::{is_cors_request, is_preflight_request};
pub use context::{CorsRequest, RequestContext};
pub use cors::Cors;
pub use error::ConfigError;
pub use exposed_headers::ExposedHeaders;
pub use headers::merge_vary;
pub use options::CorsOptions;
pub use origin::{AllowedOrigins, OriginMatcher, OriginPattern};
pub use policy::{CorsPolicy, CorsPolicyBuilder, RejectionHook};
pub use preflight::{Decision, validate_preflight};
pub use response::CorsResponse;
pub use response_builder::ResponseBuilder;
pub use util::{normalize_lower, normalize_upper, split_header_list};
