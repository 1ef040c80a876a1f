//! Shelat Page Rendering
//!
//! Turns site content (and, for the Aberdeen page, the current switcher
//! state) into complete HTML documents. Rendering is a pure function of
//! its inputs.

mod components;
mod html;
mod layout;
mod pages;
mod script;
mod style;

pub use components::media_dom_id;
pub use html::{escape_html, HtmlWriter};
pub use layout::{document, font_stylesheet_url};
pub use pages::{aberdeen_page, error_page, home_page, invisalign_fragment, not_found_page};
pub use style::STYLESHEET;
