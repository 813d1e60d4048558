#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::FolioConfig;

/// Global configuration, set once before launch
static CONFIG: OnceLock<FolioConfig> = OnceLock::new();

/// Get the loaded configuration (defaults if launch never set one)
pub fn get_config() -> &'static FolioConfig {
    CONFIG.get_or_init(FolioConfig::default)
}

/// Folio - animated personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - an animated personal portfolio page")]
struct Args {
    /// Configuration file (TOML). Falls back to <config dir>/folio/folio.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

/// `<config dir>/folio/folio.toml`, if the platform has a config dir
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("folio.toml"))
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<FolioConfig> {
    let path = match explicit {
        Some(path) => path,
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::info!("No config file, using defaults");
                return Ok(FolioConfig::default());
            }
        },
    };
    tracing::info!("Loading config from {:?}", path);
    FolioConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    folio_core::logging::init(&args.log)?;

    let config = load_config(args.config)?;
    let title = format!("{} - Portfolio", config.content.owner);
    let _ = CONFIG.set(config);

    tracing::info!("Starting '{}'", title);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
    Ok(())
}
