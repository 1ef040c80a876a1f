//! Document shell shared by every page

use shelat_content::{FontFace, SiteContent};

use crate::html::HtmlWriter;
use crate::script::SWITCHER_SCRIPT;
use crate::style::STYLESHEET;

const FONT_HOST: &str = "https://fonts.googleapis.com";
const FONT_STATIC_HOST: &str = "https://fonts.gstatic.com";

/// css2 stylesheet URL loading every font face in one request
pub fn font_stylesheet_url(fonts: &[FontFace]) -> Option<String> {
    if fonts.is_empty() {
        return None;
    }
    let families: Vec<String> = fonts.iter().map(FontFace::css2_family).collect();
    Some(format!(
        "{FONT_HOST}/css2?{}&display=swap",
        families.join("&")
    ))
}

/// `:root` block binding each font's CSS variable to its family
pub fn font_variables(fonts: &[FontFace]) -> String {
    let mut css = String::from(":root {");
    for font in fonts {
        css.push_str(&format!(
            " {}: '{}', sans-serif;",
            font.variable,
            font.family.replace('\'', "")
        ));
    }
    css.push_str(" }");
    css
}

/// Wrap page sections in a full HTML document
///
/// `with_script` adds the tab switcher script; pages without the
/// Invisalign section leave it out.
pub fn document(content: &SiteContent, page_class: &str, body: &str, with_script: bool) -> String {
    let meta = &content.metadata;
    let mut w = HtmlWriter::new();
    w.raw("<!DOCTYPE html>");
    w.open("html", &[("lang", Some(meta.lang.as_str()))]).open("head", &[]);

    w.void("meta", &[("charset", Some("utf-8"))])
        .void(
            "meta",
            &[
                ("name", Some("viewport")),
                ("content", Some("width=device-width, initial-scale=1")),
            ],
        )
        .element("title", &[], &meta.title)
        .void(
            "meta",
            &[
                ("name", Some("description")),
                ("content", Some(meta.description.as_str())),
            ],
        );

    if let Some(href) = font_stylesheet_url(&content.fonts) {
        w.void("link", &[("rel", Some("preconnect")), ("href", Some(FONT_HOST))])
            .void(
                "link",
                &[
                    ("rel", Some("preconnect")),
                    ("href", Some(FONT_STATIC_HOST)),
                    ("crossorigin", None),
                ],
            )
            .void(
                "link",
                &[("rel", Some("stylesheet")), ("href", Some(href.as_str()))],
            );
    }

    w.open("style", &[])
        .raw(&font_variables(&content.fonts))
        .raw(STYLESHEET)
        .close();
    w.close();

    w.open("body", &[("class", Some("antialiased"))])
        .open("main", &[("class", Some(page_class))])
        .raw(body)
        .close();

    if with_script {
        w.open("script", &[]).raw(SWITCHER_SCRIPT).close();
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_font_stylesheet_url() {
        let content = SiteContent::default();
        let url = font_stylesheet_url(&content.fonts).unwrap();
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Montserrat:wght@300;400;500;600;700\
             &family=Outfit:wght@300;400;500;600;700&display=swap"
        );
        assert!(font_stylesheet_url(&[]).is_none());
    }

    #[test]
    fn test_font_variables() {
        let css = font_variables(&SiteContent::default().fonts);
        assert!(css.contains("--font-montserrat: 'Montserrat', sans-serif;"));
        assert!(css.contains("--font-outfit: 'Outfit', sans-serif;"));
    }

    #[test]
    fn test_document_head() {
        let content = SiteContent::default();
        let html = document(&content, "page", "<p>body</p>", false);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));

        let doc = Html::parse_document(&html);
        let title = Selector::parse("title").unwrap();
        assert_eq!(
            doc.select(&title).next().unwrap().text().collect::<String>(),
            "Dr Devesh Shelat — Orthodontic Treatments"
        );
        let desc = Selector::parse("meta[name='description']").unwrap();
        assert!(doc
            .select(&desc)
            .next()
            .unwrap()
            .value()
            .attr("content")
            .unwrap()
            .starts_with("Custom-tailored"));
        assert!(doc.select(&Selector::parse("body.antialiased main.page p").unwrap()).next().is_some());
        assert!(doc.select(&Selector::parse("script").unwrap()).next().is_none());
    }
}
