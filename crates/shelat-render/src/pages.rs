//! Page compositions

use shelat_content::SiteContent;
use shelat_tabs::TabSwitcher;

use crate::components::{aberdeen_hero, bright_hero, hero, invisalign_section};
use crate::html::HtmlWriter;
use crate::layout::document;

/// Bright hero followed by the navy treatments hero
pub fn home_page(content: &SiteContent) -> String {
    let mut w = HtmlWriter::new();
    bright_hero(&mut w, &content.home.bright_hero);
    hero(&mut w, &content.home.hero);
    document(content, "page page--home", &w.finish(), false)
}

/// Aberdeen photo hero followed by the Invisalign showcase
///
/// `switcher` must have been built from `content.aberdeen.invisalign.tabs`.
pub fn aberdeen_page(content: &SiteContent, switcher: &TabSwitcher) -> String {
    let page = &content.aberdeen;
    let mut w = HtmlWriter::new();
    aberdeen_hero(&mut w, &page.hero);
    invisalign_section(&mut w, &page.invisalign, switcher);
    document(content, "page page--aberdeen", &w.finish(), true)
}

/// Just the Invisalign section, for partial refreshes
pub fn invisalign_fragment(content: &SiteContent, switcher: &TabSwitcher) -> String {
    let mut w = HtmlWriter::new();
    invisalign_section(&mut w, &content.aberdeen.invisalign, switcher);
    w.finish()
}

pub fn not_found_page(content: &SiteContent, path: &str) -> String {
    let mut w = HtmlWriter::new();
    w.open("section", &[("class", Some("not-found"))])
        .element("h1", &[], "Page not found")
        .element("p", &[], &format!("Nothing lives at {path}."))
        .element("a", &[("href", Some("/"))], "Back to the home page")
        .close();
    document(content, "page page--not-found", &w.finish(), false)
}

/// Shown when a page exists but could not be served
pub fn error_page(content: &SiteContent, status: u16) -> String {
    let mut w = HtmlWriter::new();
    w.open("section", &[("class", Some("not-found"))])
        .element("h1", &[], "Something went wrong")
        .element(
            "p",
            &[],
            &format!("The page could not be displayed (error {status}). Please try again."),
        )
        .element("a", &[("href", Some("/"))], "Back to the home page")
        .close();
    document(content, "page page--error", &w.finish(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn count(doc: &Html, selector: &str) -> usize {
        doc.select(&Selector::parse(selector).unwrap()).count()
    }

    fn first_text(doc: &Html, selector: &str) -> String {
        doc.select(&Selector::parse(selector).unwrap())
            .next()
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_home_page_sections_in_order() {
        let html = home_page(&SiteContent::default());
        let doc = Html::parse_document(&html);

        let sections: Vec<String> = doc
            .select(&Selector::parse("main > section").unwrap())
            .filter_map(|el| el.value().attr("class").map(str::to_string))
            .collect();
        assert_eq!(sections, vec!["bright-hero", "hero"]);

        assert_eq!(first_text(&doc, ".hero__title"), "Orthodontic treatments");
        assert_eq!(count(&doc, ".bright-hero__blob[aria-hidden='true']"), 4);
        assert_eq!(first_text(&doc, ".review-badge__value"), "4.9");
        assert_eq!(count(&doc, "script"), 0);
    }

    #[test]
    fn test_aberdeen_page() {
        let content = SiteContent::default();
        let switcher = TabSwitcher::new(content.aberdeen.invisalign.tabs.clone()).unwrap();
        let doc = Html::parse_document(&aberdeen_page(&content, &switcher));

        assert_eq!(count(&doc, "main > section.aberdeen-hero"), 1);
        assert_eq!(count(&doc, "main > section.invisalign"), 1);
        assert_eq!(count(&doc, ".aberdeen-hero__title br"), 1);
        assert_eq!(
            first_text(&doc, ".aberdeen-hero__subtitle"),
            "Expert Orthodontics with Fewer Visits!"
        );
        assert_eq!(count(&doc, "script"), 1);
    }

    #[test]
    fn test_fragment_tracks_selection() {
        let content = SiteContent::default();
        let mut switcher = TabSwitcher::new(content.aberdeen.invisalign.tabs.clone()).unwrap();
        switcher.select_tab(1).unwrap();
        let doc = Html::parse_fragment(&invisalign_fragment(&content, &switcher));
        assert_eq!(first_text(&doc, ".invisalign__tab.is-active"), "Invisalign® for TEENS");
        assert_eq!(count(&doc, ".invisalign__media.is-active"), 1);
        assert_eq!(count(&doc, ".invisalign__media.is-hidden"), 2);
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found_page(&SiteContent::default(), "/<script>");
        assert!(html.contains("/&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_is_not_a_404() {
        let doc = Html::parse_document(&error_page(&SiteContent::default(), 500));
        assert_eq!(first_text(&doc, "h1"), "Something went wrong");
        assert!(first_text(&doc, "p").contains("500"));
        assert_eq!(count(&doc, "body main.page--error"), 1);
    }
}
