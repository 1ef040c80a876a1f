//! Shelat Orthodontics - Tauri Application
//!
//! - Pages and images are served by the `shelat://` protocol
//! - The page script talks to Rust only through IPC commands
//! - Rust owns all page view state

mod commands;
mod protocol;
mod state;

use shelat_core::Config;
use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};

const MAIN_WINDOW: &str = "main";

/// Links that leave the site open in the system browser
fn is_external(url: &url::Url) -> bool {
    matches!(url.scheme(), "http" | "https")
        && !url
            .host_str()
            .is_some_and(|host| host.ends_with(".localhost"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = match Config::load_or_default(Config::default_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration, using defaults: {e}");
            Config::default()
        }
    };

    // Initialize logging
    shelat_core::init_logging(&config.log_filter);

    let window_config = config.window.clone();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .register_uri_scheme_protocol(protocol::SCHEME, protocol::handle)
        .setup(move |app| {
            // Initialize site state
            let state = AppState::new(config)?;
            app.manage(state);

            WebviewWindowBuilder::new(
                app,
                MAIN_WINDOW,
                WebviewUrl::CustomProtocol(protocol::app_url("/")?),
            )
            .title(&window_config.title)
            .inner_size(window_config.width, window_config.height)
            .min_inner_size(800.0, 600.0)
            .center()
            .on_navigation(move |url| {
                if !is_external(url) {
                    return true;
                }
                if let Err(e) = tauri_plugin_opener::open_url(url.as_str(), None::<&str>) {
                    tracing::warn!(url = %url, error = %e, "Failed to open external link");
                }
                false
            })
            .build()?;

            tracing::info!("Shelat Orthodontics started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                if let Some(state) = window.try_state::<AppState>() {
                    state.release_view(window.label());
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Page commands
            commands::pages::current_route,
            commands::pages::render_invisalign_section,
            // Tab commands
            commands::tabs::get_invisalign_tabs,
            commands::tabs::select_invisalign_tab,
            commands::tabs::select_invisalign_tab_by_id,
            commands::tabs::get_active_invisalign_tab,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Shelat Orthodontics");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        let external = url::Url::parse("https://www.google.com/maps").unwrap();
        let app = url::Url::parse("http://shelat.localhost/aberdeen").unwrap();
        let custom = url::Url::parse("shelat://localhost/").unwrap();

        assert!(is_external(&external));
        assert!(!is_external(&app));
        assert!(!is_external(&custom));
    }
}
