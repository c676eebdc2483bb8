//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use std::path::Path;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::export::export_workbook;
use crate::models::TransactionKind;
use crate::services::{BudgetService, TransactionService};

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction, MenuItem};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys (work everywhere)
    if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
        app.quit();
        return Ok(());
    }

    // View-specific keys
    match app.active_view {
        ActiveView::Menu => handle_menu_key(app, key),
        ActiveView::History => handle_history_view_key(app, key),
        ActiveView::Limits => handle_limits_view_key(app, key),
        ActiveView::Stats | ActiveView::Analysis => handle_report_view_key(app, key),
    }
}

/// Handle keys in the main menu
fn handle_menu_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(MenuItem::all().len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Activate selected entry
        KeyCode::Enter => {
            activate_menu_item(app);
        }

        // Jump straight to an entry by number
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            if index < MenuItem::all().len() {
                app.menu_index = index;
                activate_menu_item(app);
            }
        }

        _ => {}
    }

    Ok(())
}

/// Run the action behind the selected menu entry
fn activate_menu_item(app: &mut App) {
    match MenuItem::all()[app.menu_index] {
        MenuItem::RecordIncome => app.open_entry_dialog(TransactionKind::Income),
        MenuItem::RecordExpense => app.open_entry_dialog(TransactionKind::Expense),
        MenuItem::History => app.switch_view(ActiveView::History),
        MenuItem::Stats => app.switch_view(ActiveView::Stats),
        MenuItem::Limits => app.switch_view(ActiveView::Limits),
        MenuItem::Analysis => app.switch_view(ActiveView::Analysis),
        MenuItem::Export => export_data(app),
        MenuItem::Quit => app.quit(),
    }
}

/// Export the workbook to the working directory
fn export_data(app: &mut App) {
    match export_workbook(app.storage, Path::new(".")) {
        Ok(paths) => {
            let lines: Vec<String> = paths
                .iter()
                .map(|path| format!("Data exported to {}", path.display()))
                .collect();
            app.notify_success(lines.join("\n"));
        }
        Err(e) => {
            app.notify_error(format!("Export failed: {}", e));
        }
    }
}

/// Handle keys in the transaction history view
fn handle_history_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let service = TransactionService::new(app.storage);
    let count = service.history().map(|t| t.len()).unwrap_or(0);

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Toggle deletion mark on the selected row
        KeyCode::Char(' ') => {
            if count > 0 {
                app.toggle_mark();
            }
        }

        // Delete marked rows (or the selected row when none are marked)
        KeyCode::Char('d') => {
            if count == 0 {
                return Ok(());
            }
            let mut indices = if app.marked_rows.is_empty() {
                vec![app.history_index]
            } else {
                app.marked_rows.clone()
            };
            indices.sort_unstable();
            app.confirm(ConfirmAction::DeleteTransactions(indices));
        }

        KeyCode::Esc => {
            app.switch_view(ActiveView::Menu);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the budget limits view
fn handle_limits_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let count = app.storage.categories().len();

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down(count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Set a limit for the selected category
        KeyCode::Enter | KeyCode::Char('e') => {
            app.open_limit_dialog(app.limits_index);
        }

        // Reset the selected category's limit
        KeyCode::Char('r') => {
            if let Some(category) = app.storage.categories().get(app.limits_index) {
                app.confirm(ConfirmAction::ResetLimit(category.clone()));
            }
        }

        KeyCode::Esc => {
            app.switch_view(ActiveView::Menu);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the read-only report views
fn handle_report_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Esc {
        app.switch_view(ActiveView::Menu);
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Entry => {
            super::dialogs::entry::handle_key(app, key);
        }
        ActiveDialog::Limit => {
            super::dialogs::limit::handle_key(app, key);
        }
        ActiveDialog::Confirm(action) => {
            let action = action.clone();
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    execute_confirmed_action(app, action)?;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::Notice { .. } => {
            // Dismiss on any key
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Execute an action after user confirmation
fn execute_confirmed_action(app: &mut App, action: ConfirmAction) -> Result<()> {
    match action {
        ConfirmAction::DeleteTransactions(indices) => {
            let service = TransactionService::new(app.storage);
            match service.delete_at(&indices) {
                Ok(_) => {
                    app.marked_rows.clear();
                    let remaining = service.history().map(|t| t.len()).unwrap_or(0);
                    if app.history_index >= remaining {
                        app.history_index = remaining.saturating_sub(1);
                    }
                    app.notify_success("Transaction(s) deleted successfully.");
                }
                Err(e) => {
                    app.notify_error(format!("Failed to delete: {}", e));
                }
            }
        }
        ConfirmAction::ResetLimit(category) => {
            let service = BudgetService::new(app.storage);
            match service.reset_limit(&category) {
                Ok(()) => {
                    app.notify_success(format!("Budget for {} has been reset.", category));
                }
                Err(e) => {
                    app.notify_error(format!("Failed to reset: {}", e));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::{Amount, Transaction};
    use crate::storage::Storage;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn add_expense(storage: &Storage, amount: u64, date: &str) {
        storage
            .ledger
            .append(Transaction::new(
                Amount::new(amount),
                "Food",
                date,
                TransactionKind::Expense,
            ))
            .unwrap();
    }

    #[test]
    fn test_q_quits_outside_dialogs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let mut app = App::new(&storage);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_menu_enter_opens_entry_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let mut app = App::new(&storage);

        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Entry);
    }

    #[test]
    fn test_menu_number_jump_switches_view() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let mut app = App::new(&storage);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('3')))).unwrap();
        assert_eq!(app.active_view, ActiveView::History);
    }

    #[test]
    fn test_delete_key_asks_for_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add_expense(&storage, 10, "2025-01-01");
        add_expense(&storage, 20, "2025-01-02");

        let mut app = App::new(&storage);
        app.switch_view(ActiveView::History);
        app.history_index = 1;

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::DeleteTransactions(vec![1]))
        );
    }

    #[test]
    fn test_confirmed_delete_removes_marked_rows() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add_expense(&storage, 10, "2025-01-01");
        add_expense(&storage, 20, "2025-01-02");
        add_expense(&storage, 30, "2025-01-03");

        let mut app = App::new(&storage);
        app.switch_view(ActiveView::History);
        app.toggle_mark();
        app.history_index = 2;
        app.toggle_mark();

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('y')))).unwrap();

        let remaining = TransactionService::new(&storage).history().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].amount, Amount::new(20));
        assert!(app.marked_rows.is_empty());
        assert_eq!(app.history_index, 0);
        assert!(matches!(
            &app.active_dialog,
            ActiveDialog::Notice { message, .. } if message == "Transaction(s) deleted successfully."
        ));
    }

    #[test]
    fn test_confirm_declined_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        add_expense(&storage, 10, "2025-01-01");

        let mut app = App::new(&storage);
        app.switch_view(ActiveView::History);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('n')))).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(
            TransactionService::new(&storage).history().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_reset_limit_via_confirm() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        BudgetService::new(&storage)
            .set_limit("Food", Amount::new(100))
            .unwrap();

        let mut app = App::new(&storage);
        app.switch_view(ActiveView::Limits);
        let food_index = storage
            .categories()
            .iter()
            .position(|c| c == "Food")
            .unwrap();
        app.limits_index = food_index;

        handle_event(&mut app, Event::Key(key(KeyCode::Char('r')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();

        assert!(BudgetService::new(&storage)
            .limit_for("Food")
            .unwrap()
            .is_zero());
        assert!(matches!(
            &app.active_dialog,
            ActiveDialog::Notice { message, .. } if message == "Budget for Food has been reset."
        ));
    }

    #[test]
    fn test_esc_returns_to_menu() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let mut app = App::new(&storage);
        app.switch_view(ActiveView::Stats);

        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();
        assert_eq!(app.active_view, ActiveView::Menu);
    }

    #[test]
    fn test_notice_dismissed_by_any_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let mut app = App::new(&storage);
        app.notify_success("done");

        handle_event(&mut app, Event::Key(key(KeyCode::Char('x')))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }
}
