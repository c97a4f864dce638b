//! Footer status bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Footer with key hints on the left and the service URL on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    hints: Vec<(String, String)>,
    right: String,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hints: Vec::new(),
            right: String::new(),
        }
    }

    /// Adds a key hint such as `("F1-F3", "Tabs")`.
    #[must_use]
    pub fn hint(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.hints.push((key.into(), label.into()));
        self
    }

    /// Sets right-aligned content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::Gray);

        let mut spans = Vec::new();
        for (key, label) in &self.hints {
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(format!(" {label}  "), label_style));
        }

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize)
            .saturating_sub(used)
            .saturating_sub(self.right.width());
        if padding > 0 && !self.right.is_empty() {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                self.right.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
