use shelat_content::AberdeenHeroContent;

use super::{cta_button, multiline_text};
use crate::html::HtmlWriter;

pub fn aberdeen_hero(w: &mut HtmlWriter, content: &AberdeenHeroContent) {
    w.open("section", &[("class", Some("aberdeen-hero"))]).void(
        "img",
        &[
            ("src", Some(content.bg_image.as_str())),
            ("alt", Some("Aberdeen Orthodontics practice")),
            ("class", Some("fill cover")),
            ("fetchpriority", Some("high")),
        ],
    );

    // Navy tint, then a top-down fade for text contrast
    w.element("div", &[("class", Some("aberdeen-hero__overlay"))], "")
        .element("div", &[("class", Some("aberdeen-hero__fade"))], "");

    w.open("div", &[("class", Some("aberdeen-hero__content"))])
        .open("div", &[("class", Some("aberdeen-hero__copy"))])
        .open("h1", &[("class", Some("aberdeen-hero__title"))]);
    multiline_text(w, &content.title);
    w.close().element(
        "p",
        &[("class", Some("aberdeen-hero__subtitle"))],
        &content.subtitle,
    );
    cta_button(w, &content.cta, "orange");

    w.close().close().close();
}
