mod calculation;
mod rules;
mod types;

pub use calculation::{band_defaults, classify, compute_layout, evaluation_order};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use uiloader_common::{Position, Token};

    fn inputs(fgs: Position, logo: Position, text: Position) -> LayoutInputs {
        LayoutInputs {
            fgs_position: fgs,
            logo_position: logo,
            text_position: text,
            fgs_size: 60.0,
            logo_size: 60.0,
            gap: 10.0,
            has_logo_url: true,
            has_text: true,
        }
    }

    fn tops(outputs: &LayoutOutputs) -> [String; 3] {
        [
            outputs.logo_top.to_string(),
            outputs.spinner_top.to_string(),
            outputs.text_top.to_string(),
        ]
    }

    const CC: Position = Position::CenterCenter;

    #[test]
    fn bottom_positions_keep_initial() {
        let i = inputs(Position::BottomLeft, Position::BottomLeft, Position::BottomLeft);
        let outputs = compute_layout(&i);
        assert_eq!(outputs.logo_top, TopOffset::Initial);
        assert_eq!(outputs.spinner_top, TopOffset::Initial);
        assert_eq!(outputs.text_top, TopOffset::Initial);
        assert_eq!(tops(&outputs), ["initial", "initial", "initial"]);
        assert_eq!(classify(&i), LayoutCase::Unstacked);
    }

    #[test]
    fn band_defaults_follow_vertical_band() {
        let i = inputs(Position::TopRight, Position::CenterLeft, Position::BottomCenter);
        assert_eq!(tops(&band_defaults(&i)), ["50%", "30px", "initial"]);
    }

    #[test]
    fn all_centered_stacks_logo_spinner_text() {
        let i = inputs(CC, CC, CC);
        let outputs = compute_layout(&i);
        assert_eq!(classify(&i), LayoutCase::AllCentered);
        assert_eq!(
            tops(&outputs),
            [
                "calc(50% - 30px - 12px - 10px)",
                "calc(50% + 30px - 12px)",
                "calc(50% + 30px + 10px + 30px)",
            ]
        );
    }

    #[test]
    fn logo_and_spinner_without_text() {
        let i = LayoutInputs {
            has_text: false,
            ..inputs(CC, CC, CC)
        };
        let outputs = compute_layout(&i);
        assert_eq!(classify(&i), LayoutCase::LogoAndSpinner);
        assert_eq!(outputs.logo_top.to_string(), "calc(50% - 30px - 5px)");
        assert_eq!(outputs.spinner_top.to_string(), "calc(50% + 30px + 5px)");
        // No text to place, so it is left to the stylesheet.
        assert_eq!(outputs.text_top, TopOffset::Initial);
        assert_eq!(outputs.text_top.to_string(), "initial");
    }

    #[test]
    fn logo_and_spinner_with_text_elsewhere() {
        let i = inputs(CC, CC, Position::BottomLeft);
        let outputs = compute_layout(&i);
        assert_eq!(classify(&i), LayoutCase::LogoAndSpinner);
        assert_eq!(outputs.text_top, TopOffset::Initial);

        let i = inputs(CC, CC, Position::TopCenter);
        assert_eq!(compute_layout(&i).text_top, TopOffset::Edge);
    }

    #[test]
    fn hidden_text_off_center_keeps_band_default() {
        for (text, expected) in [
            (Position::TopLeft, TopOffset::Edge),
            (Position::CenterRight, TopOffset::Centered),
            (Position::BottomCenter, TopOffset::Initial),
        ] {
            let i = LayoutInputs {
                has_text: false,
                ..inputs(CC, CC, text)
            };
            assert_eq!(classify(&i), LayoutCase::LogoAndSpinner);
            let outputs = compute_layout(&i);
            assert_eq!(outputs.text_top, band_defaults(&i).text_top, "{text}");
            assert_eq!(outputs.text_top, expected, "{text}");
        }
    }

    #[test]
    fn spinner_and_text_without_logo() {
        let i = LayoutInputs {
            has_logo_url: false,
            fgs_size: 40.0,
            gap: 24.0,
            ..inputs(CC, CC, CC)
        };
        let outputs = compute_layout(&i);
        assert_eq!(classify(&i), LayoutCase::SpinnerAndText);
        assert_eq!(outputs.spinner_top.to_string(), "calc(50% - 12px - 12px)");
        assert_eq!(outputs.text_top.to_string(), "calc(50% + 20px + 12px)");
        assert_eq!(outputs.logo_top, TopOffset::Centered);
    }

    #[test]
    fn spinner_alone_keeps_defaults() {
        let i = LayoutInputs {
            has_logo_url: false,
            has_text: false,
            ..inputs(CC, CC, CC)
        };
        assert_eq!(classify(&i), LayoutCase::SpinnerAlone);
        assert_eq!(tops(&compute_layout(&i)), ["50%", "50%", "50%"]);

        let i = inputs(CC, Position::TopLeft, Position::BottomRight);
        assert_eq!(classify(&i), LayoutCase::SpinnerAlone);
        assert_eq!(tops(&compute_layout(&i)), ["30px", "50%", "initial"]);
    }

    #[test]
    fn logo_and_text_with_spinner_elsewhere() {
        let i = LayoutInputs {
            fgs_position: Position::TopLeft,
            ..inputs(CC, CC, CC)
        };
        let outputs = compute_layout(&i);
        assert_eq!(classify(&i), LayoutCase::LogoAndText);
        assert_eq!(outputs.spinner_top, TopOffset::Edge);
        assert_eq!(outputs.spinner_top.to_string(), "30px");
        assert_eq!(outputs.logo_top.to_string(), "calc(50% - 12px - 5px)");
        assert_eq!(outputs.text_top.to_string(), "calc(50% + 30px + 5px)");
    }

    #[test]
    fn off_center_spinner_with_only_logo_centered_is_unstacked() {
        let i = LayoutInputs {
            has_text: false,
            ..inputs(Position::CenterLeft, CC, CC)
        };
        assert_eq!(classify(&i), LayoutCase::Unstacked);
        assert_eq!(tops(&compute_layout(&i)), ["50%", "50%", "50%"]);
    }

    #[test]
    fn only_center_center_counts_as_stacked() {
        // Same band, different horizontal anchor: no stacking.
        let i = inputs(CC, Position::CenterLeft, Position::CenterRight);
        assert_eq!(classify(&i), LayoutCase::SpinnerAlone);
    }

    #[test]
    fn fractional_sizes_render_shortest_form() {
        let i = LayoutInputs {
            fgs_size: 45.0,
            gap: 5.0,
            has_text: false,
            ..inputs(CC, CC, CC)
        };
        let outputs = compute_layout(&i);
        assert_eq!(outputs.logo_top.to_string(), "calc(50% - 22.5px - 2.5px)");
    }

    #[test]
    fn zero_gap_keeps_every_term() {
        let i = LayoutInputs {
            gap: 0.0,
            ..inputs(CC, CC, CC)
        };
        let outputs = compute_layout(&i);
        assert_eq!(outputs.logo_top.to_string(), "calc(50% - 30px - 12px - 0px)");
        assert_eq!(outputs.text_top.to_string(), "calc(50% + 30px + 0px + 30px)");
    }

    #[test]
    fn layout_is_pure() {
        for fgs in Position::ALL {
            for logo in Position::ALL {
                for text in Position::ALL {
                    let i = inputs(*fgs, *logo, *text);
                    assert_eq!(compute_layout(&i), compute_layout(&i));
                }
            }
        }
    }

    #[test]
    fn stacked_elements_do_not_overlap() {
        let i = inputs(CC, CC, CC);
        let outputs = compute_layout(&i);
        let offset = |top: &TopOffset| match top {
            TopOffset::Calc(expr) => expr.offset_px(),
            other => panic!("expected calc, got {other}"),
        };
        assert!(offset(&outputs.logo_top) < offset(&outputs.spinner_top));
        assert!(offset(&outputs.spinner_top) < offset(&outputs.text_top));
    }

    #[test]
    fn rules_are_tried_in_documented_order() {
        let order: Vec<LayoutCase> = evaluation_order().collect();
        assert_eq!(
            order,
            [
                LayoutCase::AllCentered,
                LayoutCase::LogoAndSpinner,
                LayoutCase::SpinnerAndText,
                LayoutCase::SpinnerAlone,
                LayoutCase::LogoAndText,
                LayoutCase::Unstacked,
            ]
        );
    }

    #[test]
    fn offsets_serialize_as_strings() {
        let outputs = compute_layout(&inputs(Position::TopLeft, CC, Position::BottomLeft));
        let json = serde_json::to_string(&outputs).unwrap();
        assert_eq!(
            json,
            r#"{"logoTop":"50%","spinnerTop":"30px","textTop":"initial"}"#
        );
    }

    #[test]
    fn computed_offsets_are_trusted_styles() {
        let outputs = compute_layout(&inputs(CC, CC, CC));
        let trusted = outputs.logo_top.to_trusted().unwrap();
        assert_eq!(trusted.as_str(), "calc(50% - 30px - 12px - 10px)");
        assert!(TopOffset::Initial.to_trusted().is_some());
    }
}
