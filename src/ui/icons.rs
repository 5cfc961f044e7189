//! Icons that prefix every check line and summary banner.

use super::theme::SetupTheme;

/// Severity of one reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Informational note (e.g. a missing optional package).
    Info,
    /// A sub-test is about to run.
    Running,
    /// Check was not attempted.
    Skipped,
}

impl StatusKind {
    /// Glyph shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Running => "◆",
            Self::Skipped => "○",
        }
    }

    /// The glyph colored for this severity.
    pub fn styled(self, theme: &SetupTheme) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Failed => &theme.error,
            Self::Warning => &theme.warning,
            Self::Info => &theme.info,
            Self::Running | Self::Skipped => &theme.dim,
        };
        style.apply_to(self.icon()).to_string()
    }

    /// `"<colored icon> msg"`.
    pub fn format(self, theme: &SetupTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// `"<icon> msg"`, as recorded in transcripts and banners.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 6] = [
        StatusKind::Success,
        StatusKind::Failed,
        StatusKind::Warning,
        StatusKind::Info,
        StatusKind::Running,
        StatusKind::Skipped,
    ];

    #[test]
    fn report_glyphs() {
        let glyphs: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        assert_eq!(glyphs, ["✓", "✗", "⚠", "ℹ", "◆", "○"]);
    }

    #[test]
    fn plain_theme_leaves_glyph_untouched() {
        let theme = SetupTheme::plain();
        for kind in ALL {
            assert_eq!(kind.styled(&theme), kind.icon());
        }
    }

    #[test]
    fn format_plain_joins_icon_and_message() {
        assert_eq!(StatusKind::Failed.format_plain("numpy (REQUIRED)"), "✗ numpy (REQUIRED)");
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = SetupTheme::plain();
        let result = StatusKind::Success.format(&theme, "Found folder: data");
        assert_eq!(result, "✓ Found folder: data");
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }
}
