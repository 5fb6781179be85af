//! Per-field validators shared by the resolution pass.

use uiloader_common::Token;

use super::diagnostics::{Diagnostic, Diagnostics};
use crate::schema::RawValue;

/// Return `value` if it is one of `T`'s legal tokens, otherwise record a
/// diagnostic and return `fallback`.
///
/// Absent values, empty strings and differently-cased tokens are all
/// rejected.
pub fn validate_token<T: Token>(
    diagnostics: &mut Diagnostics,
    field: &str,
    value: Option<&str>,
    fallback: T,
) -> T {
    match value.and_then(T::from_token) {
        Some(token) => token,
        None => {
            diagnostics.push(Diagnostic::new(field, value, fallback.as_str()));
            fallback
        }
    }
}

/// Read a number from a raw option, accepting numeric strings.
///
/// Anything that is not a finite number yields `fallback`.
pub fn coerce_number(value: Option<&RawValue>, fallback: f64) -> f64 {
    parse_number(value).unwrap_or(fallback)
}

/// Like [`coerce_number`], but records a diagnostic when a supplied value
/// had to be replaced.
pub fn validate_number(
    diagnostics: &mut Diagnostics,
    field: &str,
    value: Option<&RawValue>,
    fallback: f64,
) -> f64 {
    let Some(raw) = value else {
        return fallback;
    };
    match parse_number(Some(raw)) {
        Some(n) => n,
        None => {
            let rejected = raw.to_string();
            diagnostics.push(Diagnostic::new(field, Some(&rejected), fallback.to_string()));
            fallback
        }
    }
}

/// Return a supplied string option, or `fallback` when it is unsupplied.
///
/// A value that is not a string is recorded as a diagnostic and replaced.
pub fn validate_text(
    diagnostics: &mut Diagnostics,
    field: &str,
    value: Option<&RawValue>,
    fallback: &str,
) -> String {
    match value {
        None => fallback.to_string(),
        Some(RawValue::Text(s)) => s.clone(),
        Some(raw) => {
            let rejected = raw.to_string();
            diagnostics.push(Diagnostic::new(field, Some(&rejected), fallback));
            fallback.to_string()
        }
    }
}

fn parse_number(value: Option<&RawValue>) -> Option<f64> {
    let n = match value? {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        RawValue::Flag(_) | RawValue::Other(_) => return None,
    };
    n.is_finite().then_some(n)
}
