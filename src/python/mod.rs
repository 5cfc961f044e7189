//! Talking to the Python interpreter under test.
//!
//! # Modules
//!
//! - [`interpreter`] - Discovery, the [`PythonRunner`] seam, and self-description
//! - [`scripts`] - The fixed snippets each probe runs
//! - [`version`] - Comparable version triples
//! - [`mock`] - Scripted interpreter for tests

pub mod interpreter;
pub mod mock;
pub mod scripts;
pub mod version;

pub use interpreter::{
    discover, discover_with_env, probe_info, venv_python, Interpreter, InterpreterInfo,
    PythonRunner,
};
pub use mock::MockPython;
pub use version::Version;
