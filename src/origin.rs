use crate::constants::WILDCARD;
use crate::error::ConfigError;
use regex_automata::meta::Regex;
use std::fmt;

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origins a policy grants access to.
#[derive(Clone, Debug)]
pub enum AllowedOrigins {
    /// Every origin is allowed and answered with `Access-Control-Allow-Origin: *`.
    Any,
    /// Only origins matching one of the listed matchers are allowed.
    List(Vec<OriginMatcher>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds the allow-list from configuration entries.
    ///
    /// A `*` entry anywhere in the list selects [`AllowedOrigins::Any`]. Entries containing
    /// `*` elsewhere compile to glob patterns; everything else is compared verbatim.
    pub fn list<I, S>(values: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value == WILDCARD {
                return Ok(Self::Any);
            }
            matchers.push(OriginMatcher::parse(value)?);
        }
        Ok(Self::List(matchers))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns whether the request origin is allowed.
    ///
    /// An absent origin is allowed under [`AllowedOrigins::Any`] and rejected by any list.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::List(matchers) => match origin {
                Some(origin) if origin.len() <= MAX_ORIGIN_LENGTH => {
                    matchers.iter().any(|matcher| matcher.matches(origin))
                }
                _ => false,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(OriginPattern),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(glob: &str) -> Result<Self, ConfigError> {
        OriginPattern::compile(glob).map(Self::Pattern)
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::EmptyEntry {
                field: "allow_origins",
            });
        }
        if value.contains('*') {
            Self::pattern(value)
        } else {
            Ok(Self::exact(value))
        }
    }

    /// Case-sensitive, anchored comparison against the raw `Origin` value.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => value == candidate,
            Self::Pattern(pattern) => pattern.matches(candidate),
        }
    }
}

/// A compiled origin glob such as `https://*.example.com`.
///
/// Every `*` stands for one or more characters, so `http://*.foo.com` matches
/// `http://bar.foo.com` but never `http://foo.com`.
#[derive(Clone)]
pub struct OriginPattern {
    glob: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn compile(glob: &str) -> Result<Self, ConfigError> {
        if glob.len() > MAX_PATTERN_LENGTH {
            return Err(ConfigError::PatternTooLong {
                length: glob.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let body = glob
            .split('*')
            .map(regex_syntax::escape)
            .collect::<Vec<_>>()
            .join("(?s:.+)");
        let regex = Regex::new(&format!("^{body}$")).map_err(|err| {
            ConfigError::InvalidOriginPattern {
                pattern: glob.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginPattern").field(&self.glob).finish()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
