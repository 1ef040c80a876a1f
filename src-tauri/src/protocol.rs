//! `shelat://` URI scheme
//!
//! Every page and image the webview loads comes through here, so the
//! page view registry always knows what each webview is showing.

use tauri::http::{header::CONTENT_TYPE, Request, Response, StatusCode};
use tauri::{Manager, Runtime, UriSchemeContext};

use crate::state::AppState;

pub const SCHEME: &str = "shelat";

/// Entry URL for a route path, in the form the platform webview expects
pub fn app_url(path: &str) -> Result<url::Url, url::ParseError> {
    #[cfg(any(windows, target_os = "android"))]
    let base = format!("http://{SCHEME}.localhost");
    #[cfg(not(any(windows, target_os = "android")))]
    let base = format!("{SCHEME}://localhost");

    url::Url::parse(&base)?.join(path)
}

pub fn handle<R: Runtime>(ctx: UriSchemeContext<'_, R>, request: Request<Vec<u8>>) -> Response<Vec<u8>> {
    let view = ctx.webview_label();
    // Still percent-encoded; the site decodes it
    let path = request.uri().path();
    let state = ctx.app_handle().state::<AppState>();

    let resp = state.site().handle_request(view, path);

    Response::builder()
        .status(resp.status)
        .header(CONTENT_TYPE, resp.content_type)
        .body(resp.body)
        .unwrap_or_else(|e| {
            tracing::error!(view, path, error = %e, "Failed to build protocol response");
            let mut fallback = Response::new(Vec::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_url() {
        let url = app_url("/aberdeen").unwrap();
        assert_eq!(url.path(), "/aberdeen");
        #[cfg(not(any(windows, target_os = "android")))]
        assert_eq!(url.as_str(), "shelat://localhost/aberdeen");
    }
}
