use shelat_content::{BrightHeroContent, GoogleReview};

use super::cta_button;
use crate::html::HtmlWriter;

/// Decorative shapes behind the portrait: (image, modifier class)
const BLOBS: &[(&str, &str)] = &[
    ("/images/blob-yellow.svg", "bright-hero__blob--yellow"),
    ("/images/blob-pink-blur.svg", "bright-hero__blob--pink-blur"),
    ("/images/blob-pink.svg", "bright-hero__blob--pink"),
    ("/images/blob-yellow-left.svg", "bright-hero__blob--yellow-left"),
];

fn google_review_badge(w: &mut HtmlWriter, review: &GoogleReview) {
    w.open("div", &[("class", Some("review-badge"))])
        .open("div", &[("class", Some("review-badge__brand"))])
        .void(
            "img",
            &[
                ("src", Some("/images/google-icon.svg")),
                ("alt", Some("Google")),
                ("width", Some("20")),
                ("height", Some("20")),
            ],
        )
        .element("span", &[("class", Some("review-badge__caption"))], "Google Rating")
        .close();

    w.open("div", &[("class", Some("review-badge__score"))])
        .open("div", &[("class", Some("review-badge__rating"))])
        .element("span", &[("class", Some("review-badge__value"))], &review.rating)
        .void(
            "img",
            &[
                ("src", Some("/images/stars-5.svg")),
                ("alt", Some("5 stars")),
                ("width", Some("91")),
                ("height", Some("14")),
            ],
        )
        .close()
        .open("span", &[("class", Some("review-badge__count"))])
        .text(&format!("{} Google", review.review_count))
        .void("br", &[])
        .text("Reviews")
        .close();

    w.close().close();
}

pub fn bright_hero(w: &mut HtmlWriter, content: &BrightHeroContent) {
    w.open("section", &[("class", Some("bright-hero"))])
        .open("div", &[("class", Some("bright-hero__canvas"))]);

    for (src, modifier) in BLOBS {
        let class = format!("bright-hero__blob {modifier}");
        w.open("div", &[("class", Some(class.as_str())), ("aria-hidden", Some("true"))])
            .void("img", &[("src", Some(*src)), ("alt", Some(""))])
            .close();
    }

    w.open("div", &[("class", Some("bright-hero__portrait"))])
        .void(
            "img",
            &[
                ("src", Some(content.hero_image.as_str())),
                ("alt", Some(content.hero_image_alt.as_str())),
                ("class", Some("fill contain")),
                ("fetchpriority", Some("high")),
            ],
        )
        .close();

    w.open("div", &[("class", Some("bright-hero__content"))])
        .open("div", &[("class", Some("bright-hero__copy"))])
        .element("h1", &[("class", Some("bright-hero__title"))], &content.title)
        .element("p", &[("class", Some("bright-hero__subtitle"))], &content.subtitle);
    cta_button(w, &content.cta, "yellow");

    w.open("div", &[("class", Some("bright-hero__reviews"))]);
    google_review_badge(w, &content.google_review);
    w.close();

    w.close().close().close().close();
}
