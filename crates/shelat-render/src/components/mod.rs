//! Page sections
//!
//! Each section writes itself into an `HtmlWriter`. Only the Invisalign
//! section reads runtime state; the heroes are fixed by their content.

mod aberdeen_hero;
mod bright_hero;
mod hero;
mod invisalign;

pub use aberdeen_hero::aberdeen_hero;
pub use bright_hero::bright_hero;
pub use hero::hero;
pub use invisalign::{invisalign_section, media_dom_id};

use crate::html::HtmlWriter;
use shelat_content::CallToAction;

/// Rounded call-to-action link; `variant` picks the colour scheme
pub(crate) fn cta_button(w: &mut HtmlWriter, cta: &CallToAction, variant: &str) {
    let class = format!("button button--{variant}");
    w.element("a", &[("href", Some(cta.href.as_str())), ("class", Some(class.as_str()))], &cta.label);
}

/// Text with `\n` turned into `<br>`
pub(crate) fn multiline_text(w: &mut HtmlWriter, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            w.void("br", &[]);
        }
        w.text(line);
    }
}
