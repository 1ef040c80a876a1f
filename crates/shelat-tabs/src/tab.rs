//! Tab data structure
//!
//! A tab carries:
//! - A stable identifier (unique within its switcher)
//! - The label shown in the tab row
//! - The media shown while it is selected, with its alt text

use serde::{Deserialize, Serialize};

use crate::error::SwitcherError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    /// Unique identifier
    pub id: String,
    /// Text shown on the tab button
    pub label: String,
    /// Path of the image displayed while the tab is active
    pub image: String,
    /// Accessible description of the image
    pub image_alt: String,
}

impl TabItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        image: impl Into<String>,
        image_alt: impl Into<String>,
    ) -> Result<Self> {
        let tab = Self {
            id: id.into(),
            label: label.into(),
            image: image.into(),
            image_alt: image_alt.into(),
        };
        tab.validate()?;
        Ok(tab)
    }

    /// Check the fields a switcher relies on
    ///
    /// Ids end up in DOM ids, `aria-controls` and attribute selectors, so
    /// they are limited to ASCII letters, digits, `-` and `_`.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SwitcherError::InvalidConfiguration(
                "tab id cannot be empty".to_string(),
            ));
        }
        if !self.id.chars().all(is_id_char) {
            return Err(SwitcherError::InvalidConfiguration(format!(
                "tab id '{}' may only contain letters, digits, '-' and '_'",
                self.id
            )));
        }
        if self.image.trim().is_empty() {
            return Err(SwitcherError::InvalidConfiguration(format!(
                "tab '{}' has no image",
                self.id
            )));
        }
        Ok(())
    }

    /// Label with a fallback to the identifier
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = TabItem::new(
            "adults",
            "Invisalign® for adults",
            "/images/teal-card-bg-masked.png",
            "Adult Invisalign patient smiling",
        )
        .unwrap();
        assert_eq!(tab.id, "adults");
        assert_eq!(tab.display_label(), "Invisalign® for adults");
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = TabItem::new("", "Label", "/images/a.png", "alt");
        assert!(matches!(
            result,
            Err(SwitcherError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_id_with_markup_characters_rejected() {
        for id in ["for adults", "say \"hi\"", "kids'", "a.b", "<kids>", " ", "teens\n"] {
            let result = TabItem::new(id, "Label", "/images/a.png", "alt");
            assert!(
                matches!(result, Err(SwitcherError::InvalidConfiguration(_))),
                "{id:?} should be rejected"
            );
        }
        assert!(TabItem::new("for-adults_2", "Label", "/images/a.png", "alt").is_ok());
    }

    #[test]
    fn test_missing_image_rejected() {
        assert!(TabItem::new("kids", "Kids", "  ", "alt").is_err());
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let tab = TabItem::new("teens", "", "/images/a.png", "alt").unwrap();
        assert_eq!(tab.display_label(), "teens");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let tab: TabItem = serde_json::from_str(
            r#"{"id":"kids","label":"Invisalign® for KIDS","image":"/images/k.png","imageAlt":"Child"}"#,
        )
        .unwrap();
        assert_eq!(tab.image_alt, "Child");
    }
}
