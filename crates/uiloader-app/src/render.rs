//! Output rendering for the resolved view.

use tracing::warn;
use uiloader_common::{LoaderError, TrustedStyle};
use uiloader_overlay::{LoaderView, TopOffset};

use crate::cli::OutputFormat;

pub fn render(view: &LoaderView, format: OutputFormat) -> Result<String, LoaderError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(view)
            .map_err(|e| LoaderError::Other(format!("failed to serialize view: {e}"))),
        OutputFormat::Css => Ok(render_css(view)),
    }
}

/// One selector block. Declarations whose value fails sanitizing are dropped.
struct Block {
    selector: &'static str,
    body: String,
}

impl Block {
    fn new(selector: &'static str) -> Self {
        Self {
            selector,
            body: String::new(),
        }
    }

    fn declare(mut self, property: &str, value: &str) -> Self {
        match TrustedStyle::sanitize(value) {
            Some(trusted) => {
                self.body.push_str(&format!("  {property}: {trusted};\n"));
            }
            None => warn!(selector = self.selector, property, "dropping unsafe style value {value:?}"),
        }
        self
    }

    fn top(self, offset: &TopOffset) -> Self {
        self.declare("top", &offset.to_string())
    }

    fn square(self, size: f64) -> Self {
        let px = format!("{size}px");
        self.declare("width", &px).declare("height", &px)
    }

    fn finish(self, out: &mut String) {
        out.push_str(&format!("{} {{\n{}}}\n", self.selector, self.body));
    }
}

fn render_css(view: &LoaderView) -> String {
    let config = &view.config;
    let layout = &view.layout;
    let mut out = String::new();

    Block::new(".uiloader-overlay")
        .declare("background-color", &config.overlay_color)
        .finish(&mut out);

    Block::new(".uiloader-foreground")
        .top(&layout.spinner_top)
        .square(config.fgs_size)
        .declare("color", &config.fgs_color)
        .finish(&mut out);

    if config.has_logo() {
        let mut logo = Block::new(".uiloader-logo")
            .top(&layout.logo_top)
            .square(config.logo_size);
        if let Some(src) = &view.logo_src {
            logo = logo.declare("background-image", &format!("url({src})"));
        }
        logo.finish(&mut out);
    }

    if config.has_text() {
        Block::new(".uiloader-text")
            .top(&layout.text_top)
            .declare("color", &config.text_color)
            .finish(&mut out);
    }

    Block::new(".uiloader-background")
        .square(config.bgs_size)
        .declare("opacity", &config.bgs_opacity.to_string())
        .declare("color", &config.bgs_color)
        .finish(&mut out);

    Block::new(".uiloader-progress")
        .declare("background-color", &config.pb_color)
        .declare("--uiloader-thickness", &format!("{}px", config.pb_thickness))
        .finish(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiloader_config::LoaderConfig;

    fn view(config: LoaderConfig) -> LoaderView {
        LoaderView::build(config).unwrap()
    }

    #[test]
    fn json_contains_layout() {
        let json = render(&view(LoaderConfig::default()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layoutCase"], "spinner-alone");
        assert_eq!(value["layout"]["spinnerTop"], "50%");
    }

    #[test]
    fn css_for_defaults() {
        let css = render(&view(LoaderConfig::default()), OutputFormat::Css).unwrap();
        assert!(css.contains(".uiloader-foreground {\n  top: 50%;\n  width: 60px;\n  height: 60px;\n"));
        assert!(css.contains("background-color: rgba(40, 40, 40, 0.8);"));
        assert!(css.contains("opacity: 0.5;"));
        assert!(!css.contains(".uiloader-logo"));
        assert!(!css.contains(".uiloader-text"));
    }

    #[test]
    fn css_stacks_logo_and_text() {
        let config = LoaderConfig {
            logo_url: "logo.png".into(),
            text: "Loading".into(),
            ..LoaderConfig::default()
        };
        let css = render(&view(config), OutputFormat::Css).unwrap();
        assert!(css.contains(".uiloader-logo {\n  top: calc(50% - 30px - 12px - 24px);"));
        assert!(css.contains(".uiloader-text {\n  top: calc(50% + 60px + 24px + 30px);"));
    }

    #[test]
    fn css_references_trusted_logo_only() {
        let config = LoaderConfig {
            logo_url: "assets/logo.png".into(),
            ..LoaderConfig::default()
        };
        let css = render(&view(config), OutputFormat::Css).unwrap();
        assert!(css.contains("background-image: url(assets/logo.png);"));

        let config = LoaderConfig {
            logo_url: "javascript:alert(1)".into(),
            ..LoaderConfig::default()
        };
        let css = render(&view(config), OutputFormat::Css).unwrap();
        assert!(css.contains(".uiloader-logo {"));
        assert!(!css.contains("background-image"));
        assert!(!css.contains("javascript"));
    }

    #[test]
    fn css_drops_injected_values() {
        let config = LoaderConfig {
            overlay_color: "red; } body { display: none".into(),
            ..LoaderConfig::default()
        };
        let css = render(&view(config), OutputFormat::Css).unwrap();
        assert!(css.contains(".uiloader-overlay {\n}\n"));
        assert!(!css.contains("display"));
    }
}
