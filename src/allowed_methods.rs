use crate::constants::WILDCARD;
use crate::error::ConfigError;
use crate::util::{invalid_entry, is_http_token, normalize_upper};
use indexmap::IndexSet;

/// Methods a preflight may request, stored uppercase in declared order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method is allowed; preflights echo the requested method back.
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedMethods {
    /// Builds an uppercase, de-duplicated list. A `*` entry selects [`AllowedMethods::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = IndexSet::new();
        for value in values {
            let value = value.as_ref().trim();
            if value == WILDCARD {
                return Self::Any;
            }
            methods.insert(normalize_upper(value));
        }
        Self::List(methods)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// `method` must already be uppercased.
    pub fn allows_method(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(methods) => methods.contains(method),
        }
    }

    /// Comma-and-space joined list in declared order, `None` for `Any` or an empty list.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(methods) if methods.is_empty() => None,
            Self::List(methods) => Some(
                methods
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Self::List(methods) = self
            && let Some(invalid) = methods.iter().find(|method| !is_http_token(method))
        {
            return Err(invalid_entry("allow_methods", invalid));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
