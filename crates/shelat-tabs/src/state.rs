//! Switcher State Machine
//!
//! ```text
//! states:      0 .. N-1  (N = number of tabs, N >= 1)
//! initial:     0
//! transition:  select(i)  any -> i, guarded only by 0 <= i < N
//! ```
//!
//! There is no terminal state; the state is dropped with its switcher.

use serde::{Deserialize, Serialize};

use crate::error::SwitcherError;
use crate::Result;

/// Index of the active tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitcherState(usize);

impl SwitcherState {
    /// The state every switcher starts in
    pub const INITIAL: SwitcherState = SwitcherState(0);

    pub fn index(&self) -> usize {
        self.0
    }

    /// Check if a transition to `target` is valid for `len` tabs
    pub fn can_transition_to(&self, target: i64, len: usize) -> bool {
        usize::try_from(target).map_or(false, |i| i < len)
    }

    /// Resolve the target state, rejecting anything outside `0..len`
    pub fn transition(&self, target: i64, len: usize) -> Result<SwitcherState> {
        if !self.can_transition_to(target, len) {
            return Err(SwitcherError::IndexOutOfRange { index: target, len });
        }
        Ok(SwitcherState(target as usize))
    }
}

impl std::fmt::Display for SwitcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a tab's label and media are presented for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Selected: label highlighted, media shown
    Active,
    /// Not selected: label dimmed, media transparent and inert
    Hidden,
}

impl Visibility {
    pub fn for_index(index: usize, state: SwitcherState) -> Self {
        if index == state.index() {
            Visibility::Active
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Visibility::Active)
    }

    /// Hidden media must not intercept pointer or assistive interaction
    pub fn is_interactive(&self) -> bool {
        self.is_active()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Active => "active",
            Visibility::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Visibility::Active),
            "hidden" => Ok(Visibility::Hidden),
            _ => Err(format!("Unknown visibility: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        let state = SwitcherState::INITIAL;
        assert!(state.can_transition_to(0, 3));
        assert!(state.can_transition_to(2, 3));
        assert_eq!(state.transition(2, 3).unwrap().index(), 2);
        // Same state is a valid no-op
        let state = state.transition(1, 3).unwrap();
        assert_eq!(state.transition(1, 3).unwrap(), state);
    }

    #[test]
    fn test_invalid_transitions() {
        let state = SwitcherState::INITIAL;
        assert!(!state.can_transition_to(-1, 3));
        assert!(!state.can_transition_to(3, 3));
        assert!(!state.can_transition_to(i64::MAX, 3));
        assert_eq!(
            state.transition(3, 3),
            Err(SwitcherError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_visibility_for_index() {
        let state = SwitcherState::INITIAL.transition(1, 3).unwrap();
        assert_eq!(Visibility::for_index(1, state), Visibility::Active);
        assert_eq!(Visibility::for_index(0, state), Visibility::Hidden);
        assert!(!Visibility::Hidden.is_interactive());
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!("ACTIVE".parse::<Visibility>().unwrap(), Visibility::Active);
        assert!("faded".parse::<Visibility>().is_err());
    }
}
