//! Command handlers for the PolicyQA CLI.
//!
//! This module organizes all CLI commands into separate submodules.

use std::io::IsTerminal;

use policyqa_core::config::AppConfig;

pub mod ask;
pub mod console;
pub mod serve;
pub mod templates;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use console::ConsoleCommand;

/// Whether rendered answers on stdout get ANSI styling.
pub fn use_color(config: &AppConfig) -> bool {
    !config.no_color && std::io::stdout().is_terminal()
}
