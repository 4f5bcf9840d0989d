//! Configuration module for OnSplit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OnSplitPaths;
pub use settings::Settings;
