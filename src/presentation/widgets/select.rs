//! Dropdown-style selector for foreign-key fields.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::RecordId;

/// One choice of a [`SelectInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Record the option stands for.
    pub id: RecordId,
    /// Text shown for the option.
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    #[must_use]
    pub fn new(id: RecordId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Selector cycling through options with Left/Right. `None` means the
/// placeholder is selected, whose value is empty.
#[derive(Debug, Clone)]
pub struct SelectInput {
    label: String,
    placeholder: String,
    options: Vec<SelectOption>,
    selected: Option<usize>,
    focused: bool,
}

impl SelectInput {
    /// Creates a selector with only its placeholder.
    #[must_use]
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options: Vec::new(),
            selected: None,
            focused: false,
        }
    }

    /// Marks the selector as focused.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Replaces all options and resets to the placeholder.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = None;
    }

    /// Returns the options after the placeholder.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Selects the option whose id renders as `value`. Falls back to the
    /// placeholder when no option matches.
    pub fn set_value(&mut self, value: &str) -> bool {
        self.selected = self
            .options
            .iter()
            .position(|o| o.id.to_string() == value);
        self.selected.is_some()
    }

    /// Returns the selected id as text, empty for the placeholder.
    #[must_use]
    pub fn value(&self) -> String {
        self.selected_option()
            .map(|o| o.id.to_string())
            .unwrap_or_default()
    }

    /// Returns the selected option, `None` for the placeholder.
    #[must_use]
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Selects the placeholder.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Moves to the next option, wrapping through the placeholder.
    pub fn next(&mut self) {
        self.selected = match self.selected {
            None if !self.options.is_empty() => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            _ => None,
        };
    }

    /// Moves to the previous option, wrapping through the placeholder.
    pub fn previous(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

impl Widget for &SelectInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (text, style) = match self.selected_option() {
            Some(option) => (option.label.as_str(), Style::default().fg(Color::White)),
            None => (self.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(format!("◂ {text} ▸")).style(style).render(inner, buf);
    }
}
