use crate::error::ConfigError;

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn normalize_upper(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_uppercase()
    } else {
        value.to_uppercase()
    }
}

/// Splits a comma-separated header list into trimmed, lowercased, non-empty tokens.
///
/// Spacing around the commas is irrelevant: `"a,b, c"` and `"a, b, c"` yield the same tokens.
pub fn split_header_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(normalize_lower)
}

pub(crate) fn invalid_entry(field: &'static str, value: &str) -> ConfigError {
    if value.is_empty() {
        ConfigError::EmptyEntry { field }
    } else {
        ConfigError::InvalidToken {
            field,
            value: value.to_string(),
        }
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
