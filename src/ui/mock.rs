//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both per kind and as a plain-text transcript.

use super::{StatusKind, UserInterface, RULE_WIDTH};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    transcript: Vec<String>,
    messages: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    banners: Vec<(StatusKind, String)>,
    pairs: Vec<(String, String)>,
    headers: Vec<String>,
    sections: Vec<String>,
}

impl MockUI {
    /// Create a new, empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured banners.
    pub fn banners(&self) -> &[(StatusKind, String)] {
        &self.banners
    }

    /// Get all captured key-value pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Everything as it would appear on an uncolored terminal.
    pub fn transcript(&self) -> String {
        self.transcript.join("\n")
    }

    /// Check if a status line of `kind` containing `msg` was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Status lines of one kind.
    pub fn statuses_of(&self, kind: StatusKind) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
        self.transcript.push(format!("  {}", kind.format_plain(msg)));
    }

    fn detail(&mut self, msg: &str) {
        self.transcript.push(format!("    {}", msg));
    }

    fn banner(&mut self, kind: StatusKind, msg: &str) {
        self.banners.push((kind, msg.to_string()));
        self.transcript.push(kind.format_plain(msg));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
        self.transcript.push(format!("  {}: {}", key, value));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        let rule = "=".repeat(RULE_WIDTH);
        self.transcript.push(String::new());
        self.transcript.push(rule.clone());
        self.transcript.push(format!("  {}", title));
        self.transcript.push(rule);
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.transcript.push(String::new());
        self.transcript.push(title.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.transcript.push(StatusKind::Failed.format_plain(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_by_kind() {
        let mut ui = MockUI::new();
        ui.status(StatusKind::Warning, "pyproject.toml not found");
        ui.status(StatusKind::Success, "Found folder: data");

        assert!(ui.has_status(StatusKind::Warning, "pyproject.toml"));
        assert!(!ui.has_status(StatusKind::Success, "pyproject.toml"));
        assert_eq!(ui.statuses_of(StatusKind::Success), ["Found folder: data"]);
    }

    #[test]
    fn transcript_matches_terminal_layout() {
        let mut ui = MockUI::new();
        ui.show_section("Checking Python version...");
        ui.status(StatusKind::Success, "Python 3.12.1 detected");
        ui.detail("Interpreter: /usr/bin/python3");

        assert_eq!(
            ui.transcript(),
            "\nChecking Python version...\n  ✓ Python 3.12.1 detected\n    Interpreter: /usr/bin/python3"
        );
    }

    #[test]
    fn header_is_framed_by_rules() {
        let mut ui = MockUI::new();
        ui.show_header("Summary");

        let transcript = ui.transcript();
        assert!(transcript.contains(&"=".repeat(RULE_WIDTH)));
        assert!(transcript.contains("  Summary"));
        assert_eq!(ui.headers(), ["Summary"]);
    }
}
