use crate::constants::WILDCARD;
use crate::error::ConfigError;
use crate::util::{invalid_entry, is_http_token, normalize_lower, split_header_list};
use indexmap::IndexSet;

/// Request headers a preflight may announce, stored lowercase in declared order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    /// Any header is allowed; preflights echo the normalized request list back.
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(IndexSet::new())
    }
}

impl AllowedHeaders {
    /// Builds a lowercase, de-duplicated list. A `*` entry selects [`AllowedHeaders::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut headers = IndexSet::new();
        for value in values {
            let value = value.as_ref().trim();
            if value == WILDCARD {
                return Self::Any;
            }
            headers.insert(normalize_lower(value));
        }
        Self::List(headers)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// `header` must already be lowercased.
    pub fn allows_header(&self, header: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => allowed.contains(header),
        }
    }

    /// Returns the first token of an `Access-Control-Request-Headers` value that is not allowed.
    pub fn first_disallowed(&self, request_headers: &str) -> Option<String> {
        if self.is_any() {
            return None;
        }
        split_header_list(request_headers).find(|header| !self.allows_header(header))
    }

    /// Comma-and-space joined list in declared order, `None` for `Any` or an empty list.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(headers) if headers.is_empty() => None,
            Self::List(headers) => Some(
                headers
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Self::List(headers) = self
            && let Some(invalid) = headers.iter().find(|header| !is_http_token(header))
        {
            return Err(invalid_entry("allow_headers", invalid));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
