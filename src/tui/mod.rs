//! Terminal User Interface module
//!
//! This module provides a full-featured TUI for Budget Book using ratatui.
//! The TUI includes the main menu, history, statistics, limit, and analysis
//! views, plus dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
