//! Reusable TUI widgets

pub mod input;
pub mod notice;

pub use input::TextInput;
