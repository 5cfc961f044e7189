//! Visual theme and styling.

use console::Style;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success icons and banners (green).
    pub success: Style,
    /// Style for warning icons (orange).
    pub warning: Style,
    /// Style for failure icons and banners (red bold).
    pub error: Style,
    /// Style for informational icons (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for the banner title (bold).
    pub highlight: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for the `=` rules around the banner (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            section: Style::new().bold(),
            border: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            section: Style::new(),
            border: Style::new(),
            key: Style::new(),
        }
    }

    /// Format the banner: a title between two rules.
    pub fn format_header(&self, title: &str, width: usize) -> String {
        let rule = "=".repeat(width);
        format!(
            "{}\n  {}\n{}",
            self.border.apply_to(&rule),
            self.highlight.apply_to(title),
            self.border.apply_to(&rule)
        )
    }

    /// Format a `label: value` pair.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_rules_and_title() {
        let theme = SetupTheme::plain();
        let header = theme.format_header("Summary", 10);
        assert_eq!(header, "==========\n  Summary\n==========");
    }

    #[test]
    fn key_value_joins_with_colon() {
        let theme = SetupTheme::plain();
        assert_eq!(
            theme.format_key_value("Architecture", "x86_64"),
            "Architecture: x86_64"
        );
    }

    #[test]
    fn explicit_no_color_disables_colors() {
        assert!(!should_use_colors(true));
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = SetupTheme::default();
        let _ = theme.format_header("test", 4);
    }
}
