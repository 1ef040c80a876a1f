//! Tab Switcher
//!
//! Owns the tab sequence and the active index. Everything a renderer
//! needs (label row, media stack) is derived from those two fields.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SwitcherError;
use crate::state::{SwitcherState, Visibility};
use crate::tab::TabItem;
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabSwitcher {
    /// Fixed, non-empty tab sequence
    tabs: Vec<TabItem>,
    /// Currently selected tab
    state: SwitcherState,
}

/// One entry of the label row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLabelView<'a> {
    pub index: usize,
    pub tab: &'a TabItem,
    pub visibility: Visibility,
}

/// One entry of the media stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaView<'a> {
    pub index: usize,
    pub tab: &'a TabItem,
    pub visibility: Visibility,
}

/// Owned copy of the derived views, for handing across an IPC boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitcherSnapshot {
    pub active_index: usize,
    pub active_id: String,
    pub tabs: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub id: String,
    pub label: String,
    pub visibility: Visibility,
}

impl TabSwitcher {
    /// Build a switcher over `tabs`, starting on the first one
    pub fn new(tabs: Vec<TabItem>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(SwitcherError::InvalidConfiguration(
                "a switcher needs at least one tab".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for tab in &tabs {
            tab.validate()?;
            if !seen.insert(tab.id.as_str()) {
                return Err(SwitcherError::InvalidConfiguration(format!(
                    "duplicate tab id '{}'",
                    tab.id
                )));
            }
        }

        tracing::debug!(tab_count = tabs.len(), "Initialized tab switcher");

        Ok(Self {
            tabs,
            state: SwitcherState::INITIAL,
        })
    }

    /// Select the tab at `index`
    ///
    /// Indices come from the rendered label row, so a bad one is a wiring
    /// bug. It is rejected and the current selection is kept.
    pub fn select_tab(&mut self, index: i64) -> Result<&TabItem> {
        let next = match self.state.transition(index, self.tabs.len()) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(index, tab_count = self.tabs.len(), "Rejected tab selection");
                return Err(e);
            }
        };

        if next != self.state {
            tracing::debug!(from = %self.state, to = %next, "Tab switcher transition");
            self.state = next;
        }

        Ok(self.active_tab())
    }

    /// Select the tab whose identifier is `id`
    pub fn select_tab_by_id(&mut self, id: &str) -> Result<&TabItem> {
        let index = self
            .position(id)
            .ok_or_else(|| SwitcherError::NotFound(id.to_string()))?;
        self.select_tab(index as i64)
    }

    pub fn active_tab(&self) -> &TabItem {
        &self.tabs[self.state.index()]
    }

    pub fn active_index(&self) -> usize {
        self.state.index()
    }

    pub fn state(&self) -> SwitcherState {
        self.state
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Label row, in tab order
    pub fn labels(&self) -> impl Iterator<Item = TabLabelView<'_>> + '_ {
        self.tabs.iter().enumerate().map(|(index, tab)| TabLabelView {
            index,
            tab,
            visibility: Visibility::for_index(index, self.state),
        })
    }

    /// Media stack, in tab order
    pub fn media(&self) -> impl Iterator<Item = MediaView<'_>> + '_ {
        self.tabs.iter().enumerate().map(|(index, tab)| MediaView {
            index,
            tab,
            visibility: Visibility::for_index(index, self.state),
        })
    }

    pub fn snapshot(&self) -> SwitcherSnapshot {
        SwitcherSnapshot {
            active_index: self.active_index(),
            active_id: self.active_tab().id.clone(),
            tabs: self
                .labels()
                .map(|view| SnapshotEntry {
                    id: view.tab.id.clone(),
                    label: view.tab.label.clone(),
                    visibility: view.visibility,
                })
                .collect(),
        }
    }
}
