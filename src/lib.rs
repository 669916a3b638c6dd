//! archview - interactive terminal diagram of an AWS multi-tier architecture
//!
//! The binary parses the command line and hands over to [`run`]. Everything
//! else lives in the workspace crates:
//! - `archview-core` - component catalog, diagram tree, errors, logging
//! - `archview-app` - state, messages, update and click dispatch
//! - `archview-tui` - ratatui view and event loop

use std::path::Path;

use archview_app::config::{load_settings, load_settings_from, IconMode, Settings};
use archview_core::prelude::*;
use archview_core::{logging, validate_catalog, Diagram};

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub icons: Option<IconMode>,
    pub no_mouse: bool,
    pub no_highlights: bool,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(icons) = self.icons {
            settings.ui.icons = icons;
        }
        if self.no_mouse {
            settings.ui.mouse = false;
        }
        if self.no_highlights {
            settings.ui.show_highlights = false;
        }
    }
}

/// Load settings from `config` (or the default location) and apply overrides.
///
/// An explicitly requested file that does not exist is an error; the
/// default location silently falls back to defaults.
pub fn resolve_settings(config: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) if !path.exists() => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    overrides.apply(&mut settings);
    Ok(settings)
}

/// Startup checks on the static data.
pub fn preflight() -> Result<()> {
    validate_catalog()?;
    Diagram::aws_multi_tier().validate()
}

/// Main application entry point
pub async fn run(config: Option<&Path>, overrides: Overrides) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    logging::init(&logging::LogConfig::from_env())?;
    info!(version = env!("CARGO_PKG_VERSION"), "archview starting");

    preflight().context("Startup validation failed")?;

    let settings = resolve_settings(config, &overrides)?;
    info!(
        icons = %settings.ui.icons,
        mouse = settings.ui.mouse,
        highlights = settings.ui.show_highlights,
        "Settings resolved"
    );

    let result = archview_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("archview exiting");
    result
}
