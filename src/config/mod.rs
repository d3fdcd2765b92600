//! Configuration module for LinguaSpeak.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the source and
//! output stages, `AppPaths` for cross-platform config directories, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, OutputConfig, SourceConfig};
