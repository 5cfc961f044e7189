//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use super::{SetupTheme, StatusKind, UserInterface, RULE_WIDTH};

/// Stdout implementation of [`UserInterface`].
///
/// Everything, errors included, goes to stdout: the report is one
/// continuous document and logging owns stderr.
pub struct TerminalUI {
    term: Term,
    theme: SetupTheme,
}

impl TerminalUI {
    /// Create a terminal UI, colored if `colors` is set.
    pub fn new(colors: bool) -> Self {
        let theme = if colors {
            SetupTheme::new()
        } else {
            SetupTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "  {}", kind.format(&self.theme, msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        writeln!(self.term, "    {}", self.theme.dim.apply_to(msg)).ok();
    }

    fn banner(&mut self, kind: StatusKind, msg: &str) {
        let style = match kind {
            StatusKind::Success => &self.theme.success,
            StatusKind::Failed => &self.theme.error,
            _ => &self.theme.highlight,
        };
        writeln!(self.term, "{}", style.apply_to(kind.format_plain(msg))).ok();
    }

    fn key_value(&mut self, key: &str, value: &str) {
        writeln!(self.term, "  {}", self.theme.format_key_value(key, value)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title, RULE_WIDTH)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.section.apply_to(title)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(
            self.term,
            "{}",
            self.theme.error.apply_to(StatusKind::Failed.format_plain(msg))
        )
        .ok();
    }
}
