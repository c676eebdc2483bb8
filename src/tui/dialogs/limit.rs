//! Set-limit dialog
//!
//! Form for assigning a monthly budget limit to a category. Setting 0
//! removes the limit.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Amount;
use crate::services::BudgetService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the limit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitField {
    #[default]
    Category,
    Amount,
}

impl LimitField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

/// State for the set-limit form
#[derive(Debug, Clone)]
pub struct LimitFormState {
    /// Which field is focused
    pub focused_field: LimitField,
    /// Categories offered by the selector
    pub categories: Vec<String>,
    /// Selected category position
    pub category_index: usize,
    /// Limit input (whole units, digits only)
    pub amount_input: TextInput,
    /// Error message shown inside the form
    pub error_message: Option<String>,
}

impl Default for LimitFormState {
    fn default() -> Self {
        Self {
            focused_field: LimitField::Category,
            categories: Vec::new(),
            category_index: 0,
            amount_input: TextInput::new().label("Monthly limit").placeholder("0 = no limit"),
            error_message: None,
        }
    }
}

impl LimitFormState {
    /// Prepare the form, preselecting a category
    pub fn init(&mut self, categories: Vec<String>, category_index: usize) {
        *self = Self::default();
        self.category_index = category_index.min(categories.len().saturating_sub(1));
        self.categories = categories;
        self.focused_field = LimitField::Amount;
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
        self.amount_input.focused = self.focused_field == LimitField::Amount;
    }

    /// Insert a character; the amount field accepts digits only
    pub fn insert_char(&mut self, c: char) {
        if self.focused_field == LimitField::Amount && c.is_ascii_digit() {
            self.amount_input.insert(c);
            self.error_message = None;
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.focused_field == LimitField::Amount {
            self.amount_input.backspace();
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

    /// Parse the limit input
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

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the set-limit dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.limit_form;

    let area = centered_rect_fixed(52, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget Limit ")
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
            Constraint::Length(1), // Category selector
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = form.focused_field == LimitField::Category;
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
    let selector = Line::from(vec![
        Span::styled("Category", label_style),
        Span::raw(": "),
        Span::styled(value, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(selector), chunks[0]);

    frame.render_widget(form.amount_input.clone(), chunks[2]);

    if let Some(ref error) = form.error_message {
        let error_text = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error_text, chunks[4]);
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
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the set-limit dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.limit_form.reset();
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.limit_form.next_field();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = save_limit(app) {
                app.limit_form.set_error(e);
            }
            true
        }

        KeyCode::Left => {
            if app.limit_form.focused_field == LimitField::Category {
                app.limit_form.prev_category();
            } else {
                app.limit_form.amount_input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if app.limit_form.focused_field == LimitField::Category {
                app.limit_form.next_category();
            } else {
                app.limit_form.amount_input.move_right();
            }
            true
        }

        KeyCode::Char(c) => {
            app.limit_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.limit_form.backspace();
            true
        }

        _ => false,
    }
}

fn save_limit(app: &mut App) -> Result<(), String> {
    let category = app.limit_form.selected_category()?.to_string();
    let amount = app.limit_form.parse_amount()?;

    let service = BudgetService::new(app.storage);
    service
        .set_limit(&category, amount)
        .map_err(|e| e.to_string())?;

    app.limit_form.reset();
    app.close_dialog();
    app.notify_success(format!("Budget limit set for {}: {}", category, amount));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_preselects_category() {
        let mut form = LimitFormState::default();
        form.init(vec!["Salary".to_string(), "Food".to_string()], 1);
        assert_eq!(form.selected_category().unwrap(), "Food");
        assert_eq!(form.focused_field, LimitField::Amount);
    }

    #[test]
    fn test_init_clamps_out_of_range_index() {
        let mut form = LimitFormState::default();
        form.init(vec!["Salary".to_string(), "Food".to_string()], 9);
        assert_eq!(form.selected_category().unwrap(), "Food");
    }

    #[test]
    fn test_amount_rejects_non_digits() {
        let mut form = LimitFormState::default();
        form.init(vec!["Food".to_string()], 0);
        for c in "2x5!0".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.amount_input.value(), "250");
    }
}
