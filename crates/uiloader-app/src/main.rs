mod cli;
mod render;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use uiloader_common::{ConfigError, LoaderError};
use uiloader_config::toml_loader::{
    create_default_config, default_config_path, load_default, load_from_path,
};
use uiloader_config::{resolve, LoaderConfig, LoaderOptions, Resolution};
use uiloader_overlay::LoaderView;

use cli::Args;

const DEFAULT_LOG_DIRECTIVE: &str = "uiloader=info";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level
        .and_then(|level| level.parse().ok())
        .or_else(|| DEFAULT_LOG_DIRECTIVE.parse().ok());
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve `options` against `defaults`. In strict mode any rejected value
/// is an error; otherwise each one is logged and replaced.
fn resolve_options(
    options: &LoaderOptions,
    defaults: &LoaderConfig,
    strict: bool,
) -> Result<LoaderConfig, ConfigError> {
    finish(resolve(options, defaults), strict)
}

fn finish(resolution: Resolution, strict: bool) -> Result<LoaderConfig, ConfigError> {
    if strict {
        return resolution.into_strict();
    }
    resolution.diagnostics.emit();
    Ok(resolution.config)
}

fn init_config(path: &Path) -> Result<String, LoaderError> {
    create_default_config(path)?;
    Ok(format!("wrote {}", path.display()))
}

fn run(args: &Args) -> Result<String, LoaderError> {
    if args.init {
        return init_config(&default_config_path()?);
    }

    let defaults = match &args.defaults {
        Some(path) => {
            tracing::info!("Using default record: {}", path.display());
            finish(LoaderConfig::with_overrides(&load_from_path(path)?), args.strict)?
        }
        None => LoaderConfig::default(),
    };

    let options = match &args.config {
        Some(path) => {
            tracing::info!("Using options file: {}", path.display());
            load_from_path(path)?
        }
        None => load_default()?,
    };

    let config = resolve_options(&options, &defaults, args.strict)?;
    let view = LoaderView::build(config)?;
    tracing::debug!(layout = ?view.layout_case, "view built");
    render::render(&view, args.format)
}

fn exit_code(error: &LoaderError) -> u8 {
    match error {
        LoaderError::Config(ConfigError::ValidationError(_)) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("uiloader: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}
