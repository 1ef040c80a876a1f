//! Whole-site content bundle

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use shelat_tabs::TabSwitcher;

use crate::aberdeen::aberdeen_page;
use crate::error::ContentError;
use crate::home::home_page;
use crate::model::{AberdeenPage, CallToAction, FontFace, HomePage, SiteMetadata};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub metadata: SiteMetadata,
    pub fonts: Vec<FontFace>,
    pub home: HomePage,
    pub aberdeen: AberdeenPage,
}

impl SiteContent {
    /// Parse a JSON document; missing top-level sections keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded site content");
        Ok(content)
    }

    /// Reject content the pages cannot render sensibly
    pub fn validate(&self) -> Result<()> {
        // Builds and discards a switcher: same checks as page mount
        TabSwitcher::new(self.aberdeen.invisalign.tabs.clone())?;

        let ctas = [
            ("home.brightHero.cta", &self.home.bright_hero.cta),
            ("aberdeen.hero.cta", &self.aberdeen.hero.cta),
            ("aberdeen.invisalign.cta", &self.aberdeen.invisalign.cta),
        ];
        for (name, cta) in ctas {
            check_cta(name, cta)?;
        }

        let mut variables = HashSet::new();
        for font in &self.fonts {
            if !font.variable.starts_with("--") {
                return Err(ContentError::Invalid(format!(
                    "font variable '{}' must start with --",
                    font.variable
                )));
            }
            if !variables.insert(font.variable.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "font variable '{}' declared twice",
                    font.variable
                )));
            }
        }

        Ok(())
    }
}

fn check_cta(name: &str, cta: &CallToAction) -> Result<()> {
    if cta.href.trim().is_empty() {
        return Err(ContentError::Invalid(format!("{name} has no destination")));
    }
    if cta.label.trim().is_empty() {
        return Err(ContentError::Invalid(format!("{name} has no label")));
    }
    Ok(())
}

fn default_fonts() -> Vec<FontFace> {
    let weights = vec![300, 400, 500, 600, 700];
    vec![
        FontFace {
            family: "Montserrat".to_string(),
            variable: "--font-montserrat".to_string(),
            weights: weights.clone(),
            subsets: vec!["latin".to_string()],
        },
        FontFace {
            family: "Outfit".to_string(),
            variable: "--font-outfit".to_string(),
            weights,
            subsets: vec!["latin".to_string()],
        },
    ]
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            metadata: SiteMetadata::default(),
            fonts: default_fonts(),
            home: HomePage::default(),
            aberdeen: AberdeenPage::default(),
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Dr Devesh Shelat — Orthodontic Treatments".to_string(),
            description: "Custom-tailored orthodontic treatments with the latest technology and \
                professionally trained team."
                .to_string(),
            lang: "en".to_string(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        home_page()
    }
}

impl Default for AberdeenPage {
    fn default() -> Self {
        aberdeen_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let content = SiteContent::default();
        content.validate().unwrap();
        assert_eq!(content.aberdeen.invisalign.tabs.len(), 3);
        assert_eq!(content.aberdeen.invisalign.tabs[0].id, "adults");
        assert_eq!(content.aberdeen.hero.cta.href, "/contact");
        assert_eq!(content.fonts.len(), 2);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let content =
            SiteContent::from_json(r#"{"metadata":{"title":"T","description":"D","lang":"en-GB"}}"#)
                .unwrap();
        assert_eq!(content.metadata.lang, "en-GB");
        assert_eq!(content.home, HomePage::default());
    }

    #[test]
    fn test_empty_tabs_rejected() {
        let mut content = SiteContent::default();
        content.aberdeen.invisalign.tabs.clear();
        let json = serde_json::to_string(&content).unwrap();
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::Tabs(_))
        ));
    }

    #[test]
    fn test_tab_id_with_space_or_quote_rejected() {
        for id in ["for adults", "say \"hi\""] {
            let mut content = SiteContent::default();
            content.aberdeen.invisalign.tabs[0].id = id.to_string();
            assert!(matches!(content.validate(), Err(ContentError::Tabs(_))));
        }
    }

    #[test]
    fn test_empty_cta_destination_rejected() {
        let mut content = SiteContent::default();
        content.aberdeen.hero.cta.href = " ".to_string();
        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_bad_font_variable_rejected() {
        let mut content = SiteContent::default();
        content.fonts[1].variable = content.fonts[0].variable.clone();
        assert!(content.validate().is_err());
        content.fonts[1].variable = "font-outfit".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SiteContent::load("/nonexistent/shelat-content.json");
        assert!(matches!(result, Err(ContentError::Io(_))));
    }
}
