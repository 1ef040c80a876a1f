//! Tauri IPC Commands
//!
//! These commands bridge the page script to the Rust core.
//! Rust owns the switcher state; the page only applies what it returns.

pub mod diagnostics;
pub mod pages;
pub mod tabs;
