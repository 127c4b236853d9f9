use crate::error::ConfigError;
use crate::util::{invalid_entry, is_http_token, normalize_lower};
use indexmap::IndexSet;

/// Response headers exposed to the calling page via `Access-Control-Expose-Headers`.
///
/// Entries are lowercased and de-duplicated; insertion order is the serialized order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: IndexSet<String>,
}

impl ExposedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            values: values
                .into_iter()
                .map(|value| normalize_lower(value.as_ref().trim()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            return None;
        }
        Some(
            self.values
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self.values.iter().find(|value| !is_http_token(value)) {
            Some(invalid) => Err(invalid_entry("expose_headers", invalid)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
