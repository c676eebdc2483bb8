//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::models::TransactionKind;
use crate::storage::Storage;

use super::dialogs::entry::EntryFormState;
use super::dialogs::limit::LimitFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Menu,
    History,
    Stats,
    Limits,
    Analysis,
}

/// Actions reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    RecordIncome,
    RecordExpense,
    History,
    Stats,
    Limits,
    Analysis,
    Export,
    Quit,
}

impl MenuItem {
    pub fn all() -> &'static [Self] {
        &[
            Self::RecordIncome,
            Self::RecordExpense,
            Self::History,
            Self::Stats,
            Self::Limits,
            Self::Analysis,
            Self::Export,
            Self::Quit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RecordIncome => "Record Income",
            Self::RecordExpense => "Record Expense",
            Self::History => "Transaction History",
            Self::Stats => "Statistics",
            Self::Limits => "Budget Limits",
            Self::Analysis => "Monthly Analysis",
            Self::Export => "Export Data",
            Self::Quit => "Quit",
        }
    }
}

/// Kind of notice to show the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A destructive action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete the ledger entries at these positions
    DeleteTransactions(Vec<usize>),
    /// Reset the limit for this category
    ResetLimit(String),
}

impl ConfirmAction {
    /// The question shown in the confirm dialog
    pub fn message(&self) -> String {
        match self {
            Self::DeleteTransactions(indices) => {
                if indices.len() == 1 {
                    "Delete the selected transaction?".to_string()
                } else {
                    format!("Delete {} selected transactions?", indices.len())
                }
            }
            Self::ResetLimit(category) => {
                format!("Are you sure you want to reset budget for {}?", category)
            }
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Income/expense entry form
    Entry,
    /// Set-limit form
    Limit,
    /// Yes/no gate in front of a destructive action
    Confirm(ConfirmAction),
    /// Modal message, dismissed with any key
    Notice { kind: NoticeKind, message: String },
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected menu entry
    pub menu_index: usize,

    /// Selected row in the history table
    pub history_index: usize,

    /// Rows marked for deletion in the history table
    pub marked_rows: Vec<usize>,

    /// Selected row in the limits table
    pub limits_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Income/expense entry form state
    pub entry_form: EntryFormState,

    /// Set-limit form state
    pub limit_form: LimitFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            menu_index: 0,
            history_index: 0,
            marked_rows: Vec::new(),
            limits_index: 0,
            status_message: None,
            entry_form: EntryFormState::default(),
            limit_form: LimitFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.status_message = None;

        match view {
            ActiveView::History => {
                self.history_index = 0;
                self.marked_rows.clear();
            }
            ActiveView::Limits => {
                self.limits_index = 0;
            }
            _ => {}
        }
    }

    /// Open the entry form for recording a transaction
    pub fn open_entry_dialog(&mut self, kind: TransactionKind) {
        self.entry_form
            .init(kind, self.storage.categories().to_vec());
        self.active_dialog = ActiveDialog::Entry;
    }

    /// Open the set-limit form, preselecting a category
    pub fn open_limit_dialog(&mut self, category_index: usize) {
        self.limit_form
            .init(self.storage.categories().to_vec(), category_index);
        self.active_dialog = ActiveDialog::Limit;
    }

    /// Ask for confirmation before a destructive action
    pub fn confirm(&mut self, action: ConfirmAction) {
        self.active_dialog = ActiveDialog::Confirm(action);
    }

    /// Show a success notice
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        };
    }

    /// Show an error notice
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        };
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Menu => {
                if self.menu_index > 0 {
                    self.menu_index -= 1;
                }
            }
            ActiveView::History => {
                if self.history_index > 0 {
                    self.history_index -= 1;
                }
            }
            ActiveView::Limits => {
                if self.limits_index > 0 {
                    self.limits_index -= 1;
                }
            }
            _ => {}
        }
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self, max: usize) {
        match self.active_view {
            ActiveView::Menu => {
                if self.menu_index < max.saturating_sub(1) {
                    self.menu_index += 1;
                }
            }
            ActiveView::History => {
                if self.history_index < max.saturating_sub(1) {
                    self.history_index += 1;
                }
            }
            ActiveView::Limits => {
                if self.limits_index < max.saturating_sub(1) {
                    self.limits_index += 1;
                }
            }
            _ => {}
        }
    }

    /// Toggle the deletion mark on the selected history row
    pub fn toggle_mark(&mut self) {
        let row = self.history_index;
        if self.marked_rows.contains(&row) {
            self.marked_rows.retain(|&r| r != row);
        } else {
            self.marked_rows.push(row);
        }
    }
}
