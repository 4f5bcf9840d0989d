//! Wizard activity logging
//!
//! Append-only JSONL log of draft lifecycle events, used by the activity
//! feed and for debugging abandoned sessions.

pub mod entry;
pub mod logger;

pub use entry::{ActivityEntry, WizardEvent};
pub use logger::ActivityLogger;
