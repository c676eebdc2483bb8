//! Transaction entry dialog
//!
//! One form for both income and expense recording: amount, category
//! selector, and date. Expenses run through the limit check on save and the
//! rejection is shown inside the form with the input kept for correction.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Amount, TransactionKind};
use crate::services::TransactionService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Amount,
    Category,
    Date,
}

impl EntryField {
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// State for the transaction entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Whether this entry is an income or an expense
    pub kind: TransactionKind,
    /// Which field is focused
    pub focused_field: EntryField,
    /// Amount input (whole units, digits only)
    pub amount_input: TextInput,
    /// Categories offered by the selector
    pub categories: Vec<String>,
    /// Selected category position
    pub category_index: usize,
    /// Date input, prefilled with today
    pub date_input: TextInput,
    /// Error message shown inside the form
    pub error_message: Option<String>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Expense,
            focused_field: EntryField::Amount,
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 250"),
            categories: Vec::new(),
            category_index: 0,
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            error_message: None,
        }
    }
}

impl EntryFormState {
    /// Prepare the form for a fresh entry of the given kind
    pub fn init(&mut self, kind: TransactionKind, categories: Vec<String>) {
        let today = Local::now().date_naive();
        *self = Self::default();
        self.kind = kind;
        self.categories = categories;
        self.date_input = TextInput::new()
            .label("Date")
            .content(today.format("%Y-%m-%d").to_string());
        self.update_focus();
    }

    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == EntryField::Amount;
        self.date_input.focused = self.focused_field == EntryField::Date;
    }

    /// The focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Amount => Some(&mut self.amount_input),
            EntryField::Date => Some(&mut self.date_input),
            EntryField::Category => None,
        }
    }

    /// Insert a character into the focused field
    ///
    /// The amount field accepts digits only.
    pub fn insert_char(&mut self, c: char) {
        if self.focused_field == EntryField::Amount && !c.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.insert(c);
            self.error_message = None;
        }
    }

    /// Delete the character before the cursor in the focused field
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
            self.error_message = None;
        }
    }

    /// Advance the category selector
    pub fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index = (self.category_index + 1) % self.categories.len();
        }
    }

    /// Step the category selector back
    pub fn prev_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index =
                (self.category_index + self.categories.len() - 1) % self.categories.len();
        }
    }

    /// Parse the amount input
    pub fn parse_amount(&self) -> Result<Amount, String> {
        Amount::parse(self.amount_input.value())
            .map_err(|_| "Please enter amount as a number.".to_string())
    }

    /// The selected category name
    pub fn selected_category(&self) -> Result<&str, String> {
        self.categories
            .get(self.category_index)
            .map(|s| s.as_str())
            .ok_or_else(|| "Please select a category.".to_string())
    }

    /// Validate the date input
    pub fn validate_date(&self) -> Result<&str, String> {
        let value = self.date_input.value();
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())?;
        Ok(value)
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the entry dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.entry_form;

    let area = centered_rect_fixed(56, 13, frame.area());
    frame.render_widget(Clear, area);

    let title = match form.kind {
        TransactionKind::Income => " Record Income ",
        TransactionKind::Expense => " Record Expense ",
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category selector
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Date input
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(form.amount_input.clone(), chunks[0]);
    frame.render_widget(
        Paragraph::new(category_selector_line(form)),
        chunks[2],
    );
    frame.render_widget(form.date_input.clone(), chunks[4]);

    if let Some(ref error) = form.error_message {
        let error_text = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error_text, chunks[6]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields  "),
        Span::styled("[<-/->]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[7]);
}

fn category_selector_line(form: &EntryFormState) -> Line<'static> {
    let focused = form.focused_field == EntryField::Category;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let name = form
        .categories
        .get(form.category_index)
        .map(|s| s.as_str())
        .unwrap_or("(none)");
    let value = if focused {
        format!("< {} >", name)
    } else {
        format!("  {}", name)
    };

    Line::from(vec![
        Span::styled("Category", label_style),
        Span::raw(": "),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Handle key events for the entry dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.entry_form.reset();
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            app.entry_form.next_field();
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.entry_form.prev_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_entry(app) {
                app.entry_form.set_error(e);
            }
            true
        }

        KeyCode::Left => {
            if app.entry_form.focused_field == EntryField::Category {
                app.entry_form.prev_category();
            } else if let Some(input) = app.entry_form.focused_input() {
                input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if app.entry_form.focused_field == EntryField::Category {
                app.entry_form.next_category();
            } else if let Some(input) = app.entry_form.focused_input() {
                input.move_right();
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.entry_form.focused_input() {
                input.clear();
            }
            true
        }

        KeyCode::Char(c) => {
            app.entry_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.entry_form.backspace();
            true
        }

        _ => false,
    }
}

fn save_entry(app: &mut App) -> Result<(), String> {
    let amount = app.entry_form.parse_amount()?;
    let category = app.entry_form.selected_category()?.to_string();
    let date = app.entry_form.validate_date()?.to_string();
    let kind = app.entry_form.kind;

    let service = TransactionService::new(app.storage);
    match kind {
        TransactionKind::Income => service.record_income(amount, &category, &date),
        TransactionKind::Expense => service.record_expense(amount, &category, &date),
    }
    .map_err(|e| e.to_string())?;

    app.entry_form.reset();
    app.close_dialog();
    app.notify_success(match kind {
        TransactionKind::Income => "✓ Income recorded successfully.",
        TransactionKind::Expense => "✓ Expense recorded successfully.",
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EntryFormState {
        let mut form = EntryFormState::default();
        form.init(
            TransactionKind::Expense,
            vec!["Food".to_string(), "Other".to_string()],
        );
        form
    }

    #[test]
    fn test_amount_field_filters_non_digits() {
        let mut form = form();
        for c in "12a.b3".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.amount_input.value(), "123");
    }

    #[test]
    fn test_category_selector_wraps() {
        let mut form = form();
        assert_eq!(form.selected_category().unwrap(), "Food");
        form.next_category();
        assert_eq!(form.selected_category().unwrap(), "Other");
        form.next_category();
        assert_eq!(form.selected_category().unwrap(), "Food");
        form.prev_category();
        assert_eq!(form.selected_category().unwrap(), "Other");
    }

    #[test]
    fn test_empty_amount_yields_numeric_error() {
        let form = form();
        assert_eq!(
            form.parse_amount().unwrap_err(),
            "Please enter amount as a number."
        );
    }

    #[test]
    fn test_no_categories_yields_selection_error() {
        let mut form = EntryFormState::default();
        form.init(TransactionKind::Income, Vec::new());
        assert_eq!(
            form.selected_category().unwrap_err(),
            "Please select a category."
        );
    }

    #[test]
    fn test_date_is_prefilled_and_validated() {
        let mut form = form();
        assert!(form.validate_date().is_ok());

        form.date_input = TextInput::new().content("01/15/2025");
        assert_eq!(
            form.validate_date().unwrap_err(),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }
}
