//! TUI Views module
//!
//! Contains the main menu, history, statistics, limits, and analysis views,
//! as well as the status bar.

pub mod analysis;
pub mod history;
pub mod limits;
pub mod menu;
pub mod stats;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render main view based on active view
    match app.active_view {
        ActiveView::Menu => {
            menu::render(frame, app, layout.main);
        }
        ActiveView::History => {
            history::render(frame, app, layout.main);
        }
        ActiveView::Stats => {
            stats::render(frame, app, layout.main);
        }
        ActiveView::Limits => {
            limits::render(frame, app, layout.main);
        }
        ActiveView::Analysis => {
            analysis::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match &app.active_dialog {
        ActiveDialog::Entry => {
            dialogs::entry::render(frame, app);
        }
        ActiveDialog::Limit => {
            dialogs::limit::render(frame, app);
        }
        ActiveDialog::Confirm(action) => {
            let message = action.message();
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Notice { kind, message } => {
            widgets::notice::render(frame, *kind, message);
        }
        ActiveDialog::None => {}
    }
}
