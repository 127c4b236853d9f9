use cors_gate::constants::header;
use std::collections::HashSet;

pub type Response = http::Response<String>;

pub fn header_value<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn has_header(response: &Response, name: &str) -> bool {
    response.headers().contains_key(name)
}

pub fn vary_values(response: &Response) -> HashSet<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}
