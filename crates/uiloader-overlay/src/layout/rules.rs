//! Ordered stacking rules.
//!
//! Rules are tried top to bottom and the first one whose condition holds
//! adjusts the band defaults. Rules for a centered spinner come first, then
//! the rules for a spinner placed elsewhere. The two "nothing to stack"
//! rules keep the defaults untouched.

use uiloader_common::Position;

use super::types::{CalcExpr, LayoutCase, LayoutInputs, LayoutOutputs, TopOffset, TEXT_SIZE};

pub(super) struct Rule {
    pub case: LayoutCase,
    pub matches: fn(&LayoutInputs) -> bool,
    pub apply: fn(&LayoutInputs, &mut LayoutOutputs),
}

pub(super) static RULES: [Rule; 6] = [
    Rule {
        case: LayoutCase::AllCentered,
        matches: all_centered,
        apply: stack_logo_spinner_text,
    },
    Rule {
        case: LayoutCase::LogoAndSpinner,
        matches: logo_and_spinner_centered,
        apply: stack_logo_spinner,
    },
    Rule {
        case: LayoutCase::SpinnerAndText,
        matches: spinner_and_text_centered,
        apply: stack_spinner_text,
    },
    Rule {
        case: LayoutCase::SpinnerAlone,
        matches: LayoutInputs::spinner_centered,
        apply: keep_defaults,
    },
    Rule {
        case: LayoutCase::LogoAndText,
        matches: logo_and_text_centered,
        apply: stack_logo_text,
    },
    Rule {
        case: LayoutCase::Unstacked,
        matches: always,
        apply: keep_defaults,
    },
];

fn all_centered(i: &LayoutInputs) -> bool {
    i.spinner_centered() && i.logo_centered() && i.text_centered()
}

fn logo_and_spinner_centered(i: &LayoutInputs) -> bool {
    i.spinner_centered() && i.logo_centered()
}

fn spinner_and_text_centered(i: &LayoutInputs) -> bool {
    i.spinner_centered() && i.text_centered()
}

fn logo_and_text_centered(i: &LayoutInputs) -> bool {
    !i.spinner_centered() && i.logo_centered() && i.text_centered()
}

fn always(_: &LayoutInputs) -> bool {
    true
}

fn keep_defaults(_: &LayoutInputs, _: &mut LayoutOutputs) {}

fn stack_logo_spinner_text(i: &LayoutInputs, out: &mut LayoutOutputs) {
    out.logo_top = TopOffset::Calc(
        CalcExpr::from_center()
            .minus(i.fgs_size / 2.0)
            .minus(TEXT_SIZE / 2.0)
            .minus(i.gap),
    );
    out.spinner_top = TopOffset::Calc(
        CalcExpr::from_center()
            .plus(i.logo_size / 2.0)
            .minus(TEXT_SIZE / 2.0),
    );
    out.text_top = TopOffset::Calc(
        CalcExpr::from_center()
            .plus(i.logo_size / 2.0)
            .plus(i.gap)
            .plus(i.fgs_size / 2.0),
    );
}

fn stack_logo_spinner(i: &LayoutInputs, out: &mut LayoutOutputs) {
    out.logo_top = TopOffset::Calc(
        CalcExpr::from_center()
            .minus(i.fgs_size / 2.0)
            .minus(i.gap / 2.0),
    );
    out.spinner_top = TopOffset::Calc(
        CalcExpr::from_center()
            .plus(i.logo_size / 2.0)
            .plus(i.gap / 2.0),
    );
    // Hidden centered text is left to the stylesheet.
    if !i.has_text && i.text_position == Position::CenterCenter {
        out.text_top = TopOffset::Initial;
    }
}

fn stack_spinner_text(i: &LayoutInputs, out: &mut LayoutOutputs) {
    out.spinner_top = TopOffset::Calc(
        CalcExpr::from_center()
            .minus(TEXT_SIZE / 2.0)
            .minus(i.gap / 2.0),
    );
    out.text_top = TopOffset::Calc(
        CalcExpr::from_center()
            .plus(i.fgs_size / 2.0)
            .plus(i.gap / 2.0),
    );
}

fn stack_logo_text(i: &LayoutInputs, out: &mut LayoutOutputs) {
    out.logo_top = TopOffset::Calc(
        CalcExpr::from_center()
            .minus(TEXT_SIZE / 2.0)
            .minus(i.gap / 2.0),
    );
    out.text_top = TopOffset::Calc(
        CalcExpr::from_center()
            .plus(i.logo_size / 2.0)
            .plus(i.gap / 2.0),
    );
}
