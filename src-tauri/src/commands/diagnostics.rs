use tauri::Webview;

use super::tabs::CommandResult;

#[tauri::command]
pub fn frontend_ready(webview: Webview) -> CommandResult<()> {
    tracing::info!(view = %webview.label(), "Frontend ready");
    CommandResult::ok(())
}
