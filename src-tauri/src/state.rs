//! Application state management
use shelat_core::{Config, Result, Site};

/// Application state shared with commands and the protocol handler
///
/// `Site` keeps its page views behind its own lock, so the state needs no
/// outer one.
pub struct AppState {
    site: Site,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            site: Site::new(config)?,
        })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn with_site<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Site) -> Result<T>,
    {
        f(&self.site)
    }

    /// Drop the page view shown by a closed webview
    pub fn release_view(&self, view: &str) {
        self.site.close(view);
    }
}
