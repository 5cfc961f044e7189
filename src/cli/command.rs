//! The seam between argument parsing and a verification run.

use crate::error::Result;
use crate::runner::Verdict;
use crate::ui::UserInterface;

/// Something the binary can run against a UI.
pub trait Command {
    /// Run to completion, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// The run ended in a passing verdict.
    pub success: bool,
    /// Code handed to `std::process::exit`.
    pub exit_code: u8,
}

impl CommandResult {
    /// Exit 0.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Exit with `exit_code`.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit with whatever the verification run decided.
    pub fn from_verdict(verdict: &Verdict) -> Self {
        if verdict.passed() {
            Self::success()
        } else {
            Self::failure(verdict.exit_code())
        }
    }
}
