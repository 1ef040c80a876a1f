//! Shelat Core
//!
//! Central coordination layer for the Shelat Orthodontics site.
//! Rust owns the page view state; the webview only displays markup.

mod assets;
mod config;
mod error;
mod route;
mod site;

pub use assets::{Asset, AssetResolver};
pub use config::{Config, WindowConfig};
pub use error::CoreError;
pub use route::Route;
pub use site::{Site, SiteResponse};

// Re-export content and switcher types used by the shell
pub use shelat_content::{ContentError, SiteContent};
pub use shelat_tabs::{SwitcherError, SwitcherSnapshot, TabItem, TabSwitcher, Visibility};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
