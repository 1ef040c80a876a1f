//! Page view commands
use tauri::{State, Webview};

use super::tabs::CommandResult;
use crate::state::AppState;

/// Path of the page mounted in the calling webview, if any
#[tauri::command]
pub fn current_route(webview: Webview, state: State<AppState>) -> CommandResult<Option<String>> {
    state
        .with_site(|site| {
            Ok(site
                .current_route(webview.label())
                .map(|route| route.as_path().to_string()))
        })
        .into()
}

/// Invisalign section markup for the current selection
#[tauri::command]
pub fn render_invisalign_section(
    webview: Webview,
    state: State<AppState>,
) -> CommandResult<String> {
    state
        .with_site(|site| site.invisalign_fragment(webview.label()))
        .into()
}
