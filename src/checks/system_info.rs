//! Platform facts shown at the end of the report.

use crate::python::InterpreterInfo;
use crate::ui::UserInterface;

const UNAVAILABLE: &str = "unavailable";

/// Ordered label/value pairs describing the machine and interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    entries: Vec<(String, String)>,
}

impl SystemInfo {
    /// Collect from the interpreter, or from the build target without one.
    pub fn collect(info: Option<&InterpreterInfo>) -> Self {
        let entries = match info {
            Some(info) => vec![
                entry(
                    "Operating System",
                    format!("{} {}", info.system, info.release).trim(),
                ),
                entry("Platform", &info.platform),
                entry("Python Version", &info.version_string),
                entry("Python Implementation", &info.implementation),
                entry("Architecture", &info.machine),
            ],
            None => vec![
                entry("Operating System", std::env::consts::OS),
                entry(
                    "Platform",
                    &format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
                ),
                entry("Python Version", UNAVAILABLE),
                entry("Python Implementation", UNAVAILABLE),
                entry("Architecture", std::env::consts::ARCH),
            ],
        };
        Self { entries }
    }

    /// All pairs in display order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Value for `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Show the pairs.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        for (label, value) in &self.entries {
            ui.key_value(label, value);
        }
    }
}

fn entry(label: &str, value: &str) -> (String, String) {
    (label.to_string(), value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::{probe_info, MockPython};
    use crate::ui::MockUI;

    #[test]
    fn collects_from_interpreter() {
        let info = probe_info(&MockPython::healthy()).unwrap();
        let system = SystemInfo::collect(Some(&info));

        assert_eq!(system.get("Operating System"), Some("Linux 6.8.0"));
        assert_eq!(system.get("Python Version"), Some("3.12.1"));
        assert_eq!(system.get("Python Implementation"), Some("CPython"));
        assert_eq!(system.get("Architecture"), Some("x86_64"));
    }

    #[test]
    fn falls_back_without_interpreter() {
        let system = SystemInfo::collect(None);

        assert_eq!(system.get("Operating System"), Some(std::env::consts::OS));
        assert_eq!(system.get("Python Version"), Some(UNAVAILABLE));
        assert_eq!(system.entries().len(), 5);
    }

    #[test]
    fn renders_in_order() {
        let system = SystemInfo::collect(None);
        let mut ui = MockUI::new();

        system.render(&mut ui);

        let labels: Vec<&str> = ui.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Operating System",
                "Platform",
                "Python Version",
                "Python Implementation",
                "Architecture"
            ]
        );
    }
}
