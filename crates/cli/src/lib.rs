//! `invtrack-cli` — the interactive front end of the inventory tracker.
//!
//! Reads menu selections and item details from a [`prompt::Prompt`], turns them
//! into typed inventory operations and renders the outcome as text. Parsing and
//! validation of raw input happen here, never inside the inventory.

pub mod config;
pub mod menu;
pub mod prompt;
pub mod session;
pub mod sink;
pub mod view;

pub use config::{Config, ConfigError};
pub use menu::MenuChoice;
pub use prompt::{Input, Prompt, ScriptedPrompt, TerminalPrompt};
pub use session::Session;
pub use sink::{ExportError, ExportSink, FileExportSink, MemorySink};
