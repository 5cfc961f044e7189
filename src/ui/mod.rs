//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] recording everything for assertions
//!
//! # Example
//!
//! ```
//! use setupcheck::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("Checking uv package manager...");
//! ui.status(StatusKind::Success, "uv is installed: uv 0.5.4");
//! assert!(ui.has_status(StatusKind::Success, "uv 0.5.4"));
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, SetupTheme};

/// Width of the `=` rules around banners.
pub const RULE_WIDTH: usize = 60;

/// Trait for report output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an indented status line with its icon.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display a further-indented detail line under the previous status.
    fn detail(&mut self, msg: &str);

    /// Display an unindented status banner (used by the summary).
    fn banner(&mut self, kind: StatusKind, msg: &str);

    /// Display an indented `key: value` pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Show a title between two rules.
    fn show_header(&mut self, title: &str);

    /// Start a new section, separated from the previous one by a blank line.
    fn show_section(&mut self, title: &str);

    /// Display a fatal error that stops the run.
    fn error(&mut self, msg: &str);
}
