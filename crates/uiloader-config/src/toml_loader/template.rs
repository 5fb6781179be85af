//! Default TOML options template with inline documentation comments.

/// Generate the default TOML options content with comments.
pub fn default_config_toml() -> String {
    r##"# uiloader options
# Only override what you want to change -- missing fields use defaults.
# Invalid values are reported and replaced by the default.
#
# Positions: top-left, top-center, top-right, center-left, center-center,
#            center-right, bottom-left, bottom-center, bottom-right
# Spinner types: ball-scale-multiple, ball-spin, ball-spin-clockwise,
#   ball-spin-clockwise-fade-rotating, ball-spin-fade-rotating, chasing-dots,
#   circle, cube-grid, double-bounce, fading-circle, folding-cube, pulse,
#   rectangle-bounce, rectangle-bounce-party, rectangle-bounce-pulse-out,
#   rectangle-bounce-pulse-out-rapid, rotating-plane, square-jelly-box,
#   square-loader, three-bounce, three-strings, wandering-cubes

# Foreground spinner
# fgsColor = "#00ACC1"
# fgsPosition = "center-center"
# fgsSize = 60
# fgsType = "rectangle-bounce"

# Background spinner
# bgsColor = "#00ACC1"
# bgsOpacity = 0.5           # 0.0-1.0
# bgsPosition = "bottom-right"
# bgsSize = 60
# bgsType = "rectangle-bounce"

# Logo (leave logoUrl empty for no logo)
# logoUrl = ""
# logoPosition = "center-center"
# logoSize = 120

# Text label (leave empty for no text)
# text = ""
# textColor = "#FFFFFF"
# textPosition = "center-center"

# Space between stacked spinner, logo and text
# gap = 24

# Overlay and progress bar
# overlayColor = "rgba(40, 40, 40, 0.8)"
# pbColor = "#00ACC1"
# pbDirection = "ltr"        # ltr, rtl, ttb, btt
# pbThickness = 5
"##
    .to_string()
}
