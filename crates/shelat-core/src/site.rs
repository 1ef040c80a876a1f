//! Site state container
//!
//! Each open page view (one per webview) holds its route and, for pages
//! with the Invisalign section, its own tab switcher. Opening a page
//! mounts a fresh switcher; closing or navigating away drops it.

use parking_lot::RwLock;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::sync::Arc;

use shelat_content::SiteContent;
use shelat_tabs::{SwitcherSnapshot, TabItem, TabSwitcher};

use crate::assets::AssetResolver;
use crate::config::Config;
use crate::error::CoreError;
use crate::route::Route;
use crate::Result;

#[derive(Debug)]
struct PageView {
    route: Route,
    switcher: Option<TabSwitcher>,
}

/// Body and headers for one request from a webview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl SiteResponse {
    fn html(status: u16, html: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: html.into_bytes(),
        }
    }
}

pub struct Site {
    config: Config,
    content: Arc<SiteContent>,
    assets: AssetResolver,
    /// Open page views keyed by view (webview) label
    views: Arc<RwLock<HashMap<String, PageView>>>,
}

impl Site {
    /// Build the site from configuration, loading content overrides if any
    pub fn new(config: Config) -> Result<Self> {
        let content = match &config.content_path {
            Some(path) => SiteContent::load(path)?,
            None => SiteContent::default(),
        };
        Self::with_content(config, content)
    }

    pub fn with_content(config: Config, content: SiteContent) -> Result<Self> {
        content.validate()?;
        let assets = AssetResolver::new(config.assets_dir.clone());

        tracing::info!(
            assets_dir = %assets.root().display(),
            tab_count = content.aberdeen.invisalign.tabs.len(),
            "Site initialized"
        );

        Ok(Self {
            config,
            content: Arc::new(content),
            assets,
            views: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    // === Page views ===

    /// Mount `route` in `view`, replacing whatever it showed before
    pub fn open(&self, view: &str, route: Route) -> Result<String> {
        let switcher = if route.has_switcher() {
            Some(TabSwitcher::new(
                self.content.aberdeen.invisalign.tabs.clone(),
            )?)
        } else {
            None
        };

        let page = PageView { route, switcher };
        let html = self.render_view(&page);

        let previous = self.views.write().insert(view.to_string(), page);
        if let Some(previous) = previous {
            tracing::debug!(view, from = %previous.route, "Unmounted page");
        }
        tracing::info!(view, route = %route, "Mounted page");

        Ok(html)
    }

    /// Unmount whatever `view` shows; the switcher state is dropped
    pub fn close(&self, view: &str) -> bool {
        let removed = self.views.write().remove(view);
        if let Some(page) = &removed {
            tracing::info!(view, route = %page.route, "Closed page view");
        }
        removed.is_some()
    }

    pub fn current_route(&self, view: &str) -> Option<Route> {
        self.views.read().get(view).map(|page| page.route)
    }

    /// Re-render the current state of `view`
    pub fn render(&self, view: &str) -> Result<String> {
        let views = self.views.read();
        let page = views
            .get(view)
            .ok_or_else(|| CoreError::ViewNotOpen(view.to_string()))?;
        Ok(self.render_view(page))
    }

    fn render_view(&self, page: &PageView) -> String {
        match (&page.route, &page.switcher) {
            (Route::Aberdeen, Some(switcher)) => shelat_render::aberdeen_page(&self.content, switcher),
            _ => shelat_render::home_page(&self.content),
        }
    }

    /// Answer a request from `view`: a static asset, a page, or an error page
    ///
    /// `raw_path` is the path as it appears in the request URI, still
    /// percent-encoded.
    pub fn handle_request(&self, view: &str, raw_path: &str) -> SiteResponse {
        let path = match percent_decode_str(raw_path).decode_utf8() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(view, path = raw_path, error = %e, "Undecodable request path");
                return SiteResponse::html(400, self.error_page(400));
            }
        };
        let path: &str = &path;

        if AssetResolver::is_asset_path(path) {
            return match self.assets.resolve(path) {
                Ok(asset) => SiteResponse {
                    status: 200,
                    content_type: asset.mime,
                    body: asset.bytes,
                },
                Err(CoreError::ForbiddenAsset(_)) => {
                    tracing::warn!(view, path, "Refused asset request");
                    SiteResponse::html(403, self.not_found(path))
                }
                Err(e) => {
                    tracing::warn!(view, path, error = %e, "Asset unavailable");
                    SiteResponse::html(404, self.not_found(path))
                }
            };
        }

        let result = path
            .parse::<Route>()
            .and_then(|route| self.open(view, route));
        match result {
            Ok(html) => SiteResponse::html(200, html),
            Err(CoreError::NotFound(_)) => {
                tracing::info!(view, path, "No page for path");
                SiteResponse::html(404, self.not_found(path))
            }
            Err(e) => {
                tracing::error!(view, path, error = %e, "Failed to render page");
                SiteResponse::html(500, self.error_page(500))
            }
        }
    }

    fn not_found(&self, path: &str) -> String {
        shelat_render::not_found_page(&self.content, path)
    }

    fn error_page(&self, status: u16) -> String {
        shelat_render::error_page(&self.content, status)
    }

    // === Invisalign switcher ===

    fn with_switcher<F, T>(&self, view: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut TabSwitcher) -> Result<T>,
    {
        let mut views = self.views.write();
        let page = views
            .get_mut(view)
            .ok_or_else(|| CoreError::ViewNotOpen(view.to_string()))?;
        match page.switcher.as_mut() {
            Some(switcher) => f(switcher),
            None => Err(CoreError::NoSwitcher(page.route.to_string())),
        }
    }

    pub fn select_invisalign_tab(&self, view: &str, index: i64) -> Result<SwitcherSnapshot> {
        self.with_switcher(view, |switcher| {
            let tab = switcher.select_tab(index)?;
            tracing::info!(view, tab_id = %tab.id, "Selected Invisalign tab");
            Ok(switcher.snapshot())
        })
    }

    pub fn select_invisalign_tab_by_id(&self, view: &str, id: &str) -> Result<SwitcherSnapshot> {
        self.with_switcher(view, |switcher| {
            switcher.select_tab_by_id(id)?;
            tracing::info!(view, tab_id = %id, "Selected Invisalign tab");
            Ok(switcher.snapshot())
        })
    }

    pub fn invisalign_snapshot(&self, view: &str) -> Result<SwitcherSnapshot> {
        self.with_switcher(view, |switcher| Ok(switcher.snapshot()))
    }

    pub fn active_invisalign_tab(&self, view: &str) -> Result<TabItem> {
        self.with_switcher(view, |switcher| Ok(switcher.active_tab().clone()))
    }

    /// Invisalign section markup for the current state of `view`
    pub fn invisalign_fragment(&self, view: &str) -> Result<String> {
        self.with_switcher(view, |switcher| {
            Ok(shelat_render::invisalign_fragment(&self.content, switcher))
        })
    }
}

impl Clone for Site {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            content: Arc::clone(&self.content),
            assets: self.assets.clone(),
            views: Arc::clone(&self.views),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};
    use shelat_tabs::SwitcherError;
    use std::path::PathBuf;

    fn site() -> Site {
        Site::with_content(Config::new(PathBuf::from("/nonexistent")), SiteContent::default())
            .unwrap()
    }

    fn active_label(html: &str) -> String {
        let doc = Html::parse_document(html);
        let sel = Selector::parse("button.invisalign__tab.is-active").unwrap();
        let labels: Vec<String> = doc
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect();
        assert_eq!(labels.len(), 1);
        labels[0].clone()
    }

    #[test]
    fn test_open_aberdeen_starts_on_first_tab() {
        let site = site();
        let html = site.open("main", Route::Aberdeen).unwrap();
        assert_eq!(active_label(&html), "Invisalign® for adults");
        assert_eq!(site.current_route("main"), Some(Route::Aberdeen));
        assert_eq!(site.active_invisalign_tab("main").unwrap().id, "adults");
    }

    #[test]
    fn test_select_and_rerender() {
        let site = site();
        site.open("main", Route::Aberdeen).unwrap();

        let snapshot = site.select_invisalign_tab("main", 2).unwrap();
        assert_eq!(snapshot.active_id, "kids");
        assert_eq!(active_label(&site.render("main").unwrap()), "Invisalign® for KIDS");

        let fragment = site.invisalign_fragment("main").unwrap();
        assert!(fragment.contains("data-component=\"invisalign\""));
    }

    #[test]
    fn test_rejected_selection_keeps_state() {
        let site = site();
        site.open("main", Route::Aberdeen).unwrap();
        site.select_invisalign_tab("main", 1).unwrap();

        let err = site.select_invisalign_tab("main", 3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Switcher(SwitcherError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(site.select_invisalign_tab("main", -1).is_err());
        assert_eq!(site.invisalign_snapshot("main").unwrap().active_index, 1);
    }

    #[test]
    fn test_views_are_independent() {
        let site = site();
        site.open("a", Route::Aberdeen).unwrap();
        site.open("b", Route::Aberdeen).unwrap();
        site.select_invisalign_tab_by_id("a", "teens").unwrap();

        assert_eq!(site.active_invisalign_tab("a").unwrap().id, "teens");
        assert_eq!(site.active_invisalign_tab("b").unwrap().id, "adults");
    }

    #[test]
    fn test_remount_resets_selection() {
        let site = site();
        site.open("main", Route::Aberdeen).unwrap();
        site.select_invisalign_tab("main", 2).unwrap();

        site.open("main", Route::Home).unwrap();
        assert!(matches!(
            site.select_invisalign_tab("main", 0),
            Err(CoreError::NoSwitcher(_))
        ));

        site.open("main", Route::Aberdeen).unwrap();
        assert_eq!(site.invisalign_snapshot("main").unwrap().active_index, 0);
    }

    #[test]
    fn test_close_drops_view() {
        let site = site();
        site.open("main", Route::Aberdeen).unwrap();
        assert!(site.close("main"));
        assert!(!site.close("main"));
        assert!(matches!(
            site.invisalign_snapshot("main"),
            Err(CoreError::ViewNotOpen(_))
        ));
        assert!(site.render("main").is_err());
    }

    #[test]
    fn test_handle_request() {
        let site = site();

        let home = site.handle_request("main", "/");
        assert_eq!(home.status, 200);
        assert_eq!(home.content_type, "text/html; charset=utf-8");
        assert_eq!(site.current_route("main"), Some(Route::Home));

        let aberdeen = site.handle_request("main", "/aberdeen/");
        assert_eq!(aberdeen.status, 200);
        assert_eq!(site.current_route("main"), Some(Route::Aberdeen));

        assert_eq!(site.handle_request("main", "/contact").status, 404);
        // A failed navigation leaves the mounted page alone
        assert_eq!(site.current_route("main"), Some(Route::Aberdeen));

        assert_eq!(site.handle_request("main", "/images/hero-image.png").status, 404);
        assert_eq!(site.handle_request("main", "/images/../secret.png").status, 403);
    }

    #[test]
    fn test_handle_request_decodes_path() {
        let root = std::env::temp_dir().join(format!("shelat-site-{}", std::process::id()));
        std::fs::create_dir_all(root.join("images")).unwrap();
        std::fs::write(root.join("images").join("smile café.png"), b"png").unwrap();

        let mut config = Config::new(PathBuf::from("/nonexistent"));
        config.assets_dir = root.clone();
        let site = Site::with_content(config, SiteContent::default()).unwrap();

        let asset = site.handle_request("main", "/images/smile%20caf%C3%A9.png");
        assert_eq!(asset.status, 200);
        assert_eq!(asset.content_type, "image/png");
        assert_eq!(asset.body, b"png");

        assert_eq!(site.handle_request("main", "/aberdeen%2F").status, 200);
        assert_eq!(site.current_route("main"), Some(Route::Aberdeen));

        // Encoded dot segments are still refused once decoded
        assert_eq!(site.handle_request("main", "/images/%2E%2E/secret.png").status, 403);

        let invalid = site.handle_request("main", "/images/%FF.png");
        assert_eq!(invalid.status, 400);
        let html = String::from_utf8(invalid.body).unwrap();
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("Page not found"));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_content_override_validated() {
        let mut content = SiteContent::default();
        content.aberdeen.invisalign.tabs.clear();
        let result = Site::with_content(Config::new(PathBuf::from("/nonexistent")), content);
        assert!(matches!(result, Err(CoreError::Content(_))));
    }
}
