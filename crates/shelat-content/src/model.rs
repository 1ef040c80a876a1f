//! Page content types
//!
//! Every struct here is plain data handed to a renderer. Nothing is
//! computed from it beyond escaping and layout.

use serde::{Deserialize, Serialize};
use shelat_tabs::TabItem;

/// A call-to-action button
///
/// `href` is an opaque destination and is emitted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub lang: String,
}

/// A web font exposed to the stylesheet through a CSS variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFace {
    /// Family name as published by the font host
    pub family: String,
    /// CSS custom property, e.g. `--font-outfit`
    pub variable: String,
    pub weights: Vec<u16>,
    pub subsets: Vec<String>,
}

impl FontFace {
    /// `family=Name:wght@300;400` fragment of a css2 query
    pub fn css2_family(&self) -> String {
        let family = self.family.replace(' ', "+");
        if self.weights.is_empty() {
            return format!("family={family}");
        }
        let weights: Vec<String> = self.weights.iter().map(|w| w.to_string()).collect();
        format!("family={family}:wght@{}", weights.join(";"))
    }
}

/// Google review badge shown under the home page CTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleReview {
    pub rating: String,
    pub review_count: String,
}

/// Home page banner with a portrait, decorative blobs and a review badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrightHeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta: CallToAction,
    pub hero_image: String,
    pub hero_image_alt: String,
    pub google_review: GoogleReview,
}

/// Navy text-and-image banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
}

/// Full-bleed photo banner of the Aberdeen landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AberdeenHeroContent {
    /// May contain `\n` line breaks
    pub title: String,
    pub subtitle: String,
    pub cta: CallToAction,
    pub bg_image: String,
}

/// Tabbed Invisalign showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvisalignContent {
    pub tabs: Vec<TabItem>,
    /// First line is emphasised; lines are separated by `\n`
    pub title: String,
    pub description: String,
    pub cta: CallToAction,
}

impl InvisalignContent {
    pub fn title_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.title.split('\n')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub bright_hero: BrightHeroContent,
    pub hero: HeroContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AberdeenPage {
    pub hero: AberdeenHeroContent,
    pub invisalign: InvisalignContent,
}
