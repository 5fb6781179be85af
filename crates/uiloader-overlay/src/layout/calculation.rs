//! Layout calculation: band defaults, then the first matching stacking rule.

use super::rules::{Rule, RULES};
use super::types::{LayoutCase, LayoutInputs, LayoutOutputs, TopOffset};

/// Compute the top offsets of logo, spinner and text.
///
/// Pure: the same inputs always give the same outputs.
pub fn compute_layout(inputs: &LayoutInputs) -> LayoutOutputs {
    let mut outputs = band_defaults(inputs);
    if let Some(rule) = matching_rule(inputs) {
        (rule.apply)(inputs, &mut outputs);
    }
    outputs
}

/// Report which stacking rule [`compute_layout`] applies to `inputs`.
pub fn classify(inputs: &LayoutInputs) -> LayoutCase {
    matching_rule(inputs).map_or(LayoutCase::Unstacked, |rule| rule.case)
}

/// Rule cases in the order they are tried.
pub fn evaluation_order() -> impl Iterator<Item = LayoutCase> {
    RULES.iter().map(|rule| rule.case)
}

/// Offsets before any stacking, from each element's band alone.
pub fn band_defaults(inputs: &LayoutInputs) -> LayoutOutputs {
    LayoutOutputs {
        logo_top: TopOffset::for_band(inputs.logo_position.band()),
        spinner_top: TopOffset::for_band(inputs.fgs_position.band()),
        text_top: TopOffset::for_band(inputs.text_position.band()),
    }
}

fn matching_rule(inputs: &LayoutInputs) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(inputs))
}
