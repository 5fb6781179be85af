use serde::Serialize;
use std::fmt;

/// A style value that has been checked for injection into a stylesheet.
///
/// Computed offsets and user-provided colors are plain strings until the
/// renderer converts them with [`TrustedStyle::sanitize`]. A value that
/// could terminate the declaration it is placed in is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedStyle(String);

impl TrustedStyle {
    pub fn sanitize(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.chars().any(is_forbidden) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c, ';' | '{' | '}' | '<' | '>' | '\\' | '"') || c.is_control()
}

impl fmt::Display for TrustedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resource URL that is safe to reference from a stylesheet or an
/// image source.
///
/// Relative paths and `http`, `https` and `data:image/` URLs are accepted.
/// Script schemes, whitespace, quotes and parentheses are refused, so the
/// value can be written unquoted inside `url(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedUrl(String);

impl TrustedUrl {
    pub fn sanitize(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.chars().any(is_forbidden_in_url) {
            return None;
        }
        if let Some((scheme, _)) = value.split_once(':') {
            let scheme = scheme.to_ascii_lowercase();
            let allowed = match scheme.as_str() {
                "http" | "https" => true,
                "data" => value
                    .get(..11)
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:image/")),
                // A colon after a path separator is not a scheme.
                _ => scheme.contains(['/', '?', '#']),
            };
            if !allowed {
                return None;
            }
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_forbidden_in_url(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | ')' | '<' | '>' | '\\' | '{' | '}')
        || c.is_whitespace()
        || c.is_control()
}

impl fmt::Display for TrustedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
