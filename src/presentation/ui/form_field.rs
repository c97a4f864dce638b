//! Form field variants used by record panels.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::presentation::widgets::{SelectInput, TextInput};

/// A form field: free text or a record selector.
#[derive(Debug, Clone)]
pub enum FormField {
    /// Free-text input.
    Text(TextInput),
    /// Record selector.
    Select(SelectInput),
}

impl FormField {
    /// Text field with a label and placeholder.
    #[must_use]
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self::Text(TextInput::new(format!(" {label} ")).placeholder(placeholder))
    }

    /// Selector with a label and placeholder option.
    #[must_use]
    pub fn select(label: &str, placeholder: &str) -> Self {
        Self::Select(SelectInput::new(format!(" {label} "), placeholder))
    }

    /// Returns the value the form would submit.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Text(input) => input.value().to_string(),
            Self::Select(select) => select.value(),
        }
    }

    /// Sets the field value. Selectors match it against option ids.
    pub fn set_value(&mut self, value: &str) {
        match self {
            Self::Text(input) => input.set_value(value),
            Self::Select(select) => {
                select.set_value(value);
            }
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        match self {
            Self::Text(input) => input.clear(),
            Self::Select(select) => select.clear(),
        }
    }

    /// Marks the field as focused.
    pub fn set_focused(&mut self, focused: bool) {
        match self {
            Self::Text(input) => input.set_focused(focused),
            Self::Select(select) => select.set_focused(focused),
        }
    }
}

impl Widget for &FormField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            FormField::Text(input) => input.render(area, buf),
            FormField::Select(select) => select.render(area, buf),
        }
    }
}
