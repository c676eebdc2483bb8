//! Dialog components for the TUI

pub mod confirm;
pub mod entry;
pub mod limit;
