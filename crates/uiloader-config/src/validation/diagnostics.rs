//! Diagnostics recorded for rejected option values.

use serde::Serialize;
use std::fmt;

/// One rejected field: which field, what was supplied, and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub field: String,
    /// `None` when the value was explicitly absent.
    pub rejected: Option<String>,
    pub fallback: String,
}

impl Diagnostic {
    pub fn new(field: &str, rejected: Option<&str>, fallback: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rejected: rejected.map(str::to_string),
            fallback: fallback.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[uiloader] - {} (", self.field)?;
        match &self.rejected {
            Some(value) => write!(f, "\"{value}\"")?,
            None => f.write_str("undefined")?,
        }
        write!(
            f,
            ") is invalid. Default value \"{}\" is used.",
            self.fallback
        )
    }
}

/// Ordered collection of diagnostics from one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.0.contains(diagnostic)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Diagnostics recorded for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.0.iter().filter(move |d| d.field == field)
    }

    /// Write every diagnostic to the log.
    pub fn emit(&self) {
        for diagnostic in &self.0 {
            tracing::error!(field = %diagnostic.field, "{diagnostic}");
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
