//! Invisalign tab commands
use serde::Serialize;
use shelat_core::{SwitcherSnapshot, TabItem};
use tauri::{State, Webview};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<shelat_core::Result<T>> for CommandResult<T> {
    fn from(result: shelat_core::Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

#[tauri::command]
pub fn get_invisalign_tabs(
    webview: Webview,
    state: State<AppState>,
) -> CommandResult<SwitcherSnapshot> {
    state
        .with_site(|site| site.invisalign_snapshot(webview.label()))
        .into()
}

#[tauri::command]
pub fn select_invisalign_tab(
    webview: Webview,
    state: State<AppState>,
    index: i64,
) -> CommandResult<SwitcherSnapshot> {
    state
        .with_site(|site| site.select_invisalign_tab(webview.label(), index))
        .into()
}

#[tauri::command]
pub fn select_invisalign_tab_by_id(
    webview: Webview,
    state: State<AppState>,
    tab_id: String,
) -> CommandResult<SwitcherSnapshot> {
    state
        .with_site(|site| site.select_invisalign_tab_by_id(webview.label(), &tab_id))
        .into()
}

#[tauri::command]
pub fn get_active_invisalign_tab(
    webview: Webview,
    state: State<AppState>,
) -> CommandResult<TabItem> {
    state
        .with_site(|site| site.active_invisalign_tab(webview.label()))
        .into()
}
