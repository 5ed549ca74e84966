//! Configuration storage for Windows.
//!
//! Persists settings to a JSON file in %APPDATA%\Tabstash\config.json

mod config;

pub use config::*;
