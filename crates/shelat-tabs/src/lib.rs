//! Shelat Tabbed Media Switcher
//!
//! A fixed, ordered set of labeled options with exactly one selected.
//! The selection drives both the label row and the visible media item.

mod error;
mod state;
mod switcher;
mod tab;

pub use error::SwitcherError;
pub use state::{SwitcherState, Visibility};
pub use switcher::{MediaView, SnapshotEntry, SwitcherSnapshot, TabLabelView, TabSwitcher};
pub use tab::TabItem;

pub type Result<T> = std::result::Result<T, SwitcherError>;
