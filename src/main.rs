//! archview - AWS multi-tier architecture diagram in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use archview::Overrides;
use archview_app::config::IconMode;
use archview_core::prelude::*;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Icons {
    /// Plain Unicode symbols
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl From<Icons> for IconMode {
    fn from(icons: Icons) -> Self {
        match icons {
            Icons::Unicode => IconMode::Unicode,
            Icons::NerdFonts => IconMode::NerdFonts,
        }
    }
}

/// archview - explore an AWS multi-tier reference architecture
#[derive(Parser, Debug)]
#[command(name = "archview")]
#[command(about = "Interactive AWS architecture diagram for the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/archview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Icon set, overrides the config file
    #[arg(long, value_enum)]
    icons: Option<Icons>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Hide the architecture highlight cards
    #[arg(long)]
    no_highlights: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = Overrides {
        icons: args.icons.map(IconMode::from),
        no_mouse: args.no_mouse,
        no_highlights: args.no_highlights,
    };

    archview::run(args.config.as_deref(), overrides).await
}
