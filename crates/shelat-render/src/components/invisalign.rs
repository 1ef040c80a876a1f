//! Tabbed Invisalign showcase
//!
//! Markup contract shared with the page script:
//! - every tab button carries `data-tab-index` and `data-tab-id`
//! - the active button has `is-active` and `aria-selected="true"`
//! - hidden media carry `is-hidden`, `aria-hidden="true"` and `inert`,
//!   so a transparent image never swallows clicks

use shelat_content::InvisalignContent;
use shelat_tabs::TabSwitcher;

use super::cta_button;
use crate::html::{classes, HtmlWriter};

pub fn media_dom_id(tab_id: &str) -> String {
    format!("invisalign-media-{tab_id}")
}

fn state_class(active: bool) -> &'static str {
    if active {
        "is-active"
    } else {
        "is-hidden"
    }
}

fn media_stack(w: &mut HtmlWriter, switcher: &TabSwitcher) {
    w.open("div", &[("class", Some("invisalign__media-stack"))]);

    for media in switcher.media() {
        let active = media.visibility.is_active();
        let id = media_dom_id(&media.tab.id);
        let class = classes(&["invisalign__media", state_class(active)]);
        let index = media.index.to_string();

        let mut attrs = vec![
            ("id", Some(id.as_str())),
            ("class", Some(class.as_str())),
            ("data-tab-id", Some(media.tab.id.as_str())),
            ("data-tab-index", Some(index.as_str())),
            ("role", Some("tabpanel")),
        ];
        if !media.visibility.is_interactive() {
            attrs.push(("aria-hidden", Some("true")));
            attrs.push(("inert", None));
        }

        w.open("div", &attrs)
            .void(
                "img",
                &[
                    ("src", Some(media.tab.image.as_str())),
                    ("alt", Some(media.tab.image_alt.as_str())),
                    ("class", Some("fill cover cover--left")),
                    ("sizes", Some("(max-width: 1023px) 100vw, 48vw")),
                ],
            )
            .close();
    }

    w.close();
}

fn tab_row(w: &mut HtmlWriter, switcher: &TabSwitcher) {
    w.open(
        "div",
        &[("class", Some("invisalign__tabs")), ("role", Some("tablist"))],
    );

    for label in switcher.labels() {
        let active = label.visibility.is_active();
        let class = classes(&["invisalign__tab", if active { "is-active" } else { "" }]);
        let index = label.index.to_string();
        let controls = media_dom_id(&label.tab.id);

        w.element(
            "button",
            &[
                ("type", Some("button")),
                ("role", Some("tab")),
                ("class", Some(class.as_str())),
                ("data-tab-index", Some(index.as_str())),
                ("data-tab-id", Some(label.tab.id.as_str())),
                ("aria-selected", Some(if active { "true" } else { "false" })),
                ("aria-controls", Some(controls.as_str())),
            ],
            label.tab.display_label(),
        );
    }

    w.close();
}

fn title(w: &mut HtmlWriter, content: &InvisalignContent) {
    w.open("h2", &[("class", Some("invisalign__title"))]);
    let lines: Vec<&str> = content.title_lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let weight = if i == 0 { "weight-bold" } else { "weight-medium" };
        w.element("span", &[("class", Some(weight))], line);
        if i + 1 < lines.len() {
            w.void("br", &[]);
        }
    }
    w.close();
}

/// Render the section for the switcher's current state
pub fn invisalign_section(w: &mut HtmlWriter, content: &InvisalignContent, switcher: &TabSwitcher) {
    w.open(
        "section",
        &[
            ("class", Some("invisalign")),
            ("data-component", Some("invisalign")),
        ],
    )
    .open("div", &[("class", Some("invisalign__card"))])
    .open("div", &[("class", Some("invisalign__layout"))])
    .open("div", &[("class", Some("invisalign__media-column"))]);
    media_stack(w, switcher);
    w.close();

    w.open("div", &[("class", Some("invisalign__body"))]);
    tab_row(w, switcher);
    title(w, content);
    w.element(
        "p",
        &[("class", Some("invisalign__description"))],
        &content.description,
    );
    cta_button(w, &content.cta, "white");
    w.close();

    w.close().close().close();
}
