//! Modal yes/no confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered dialog asking a yes/no question.
pub struct ConfirmDialog<'a> {
    prompt: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    /// Creates a dialog asking `prompt`.
    #[must_use]
    pub const fn new(prompt: &'a str) -> Self {
        Self { prompt }
    }

    /// Maps a key to an answer: `Some(true)` for yes, `Some(false)` for no,
    /// `None` for keys the dialog ignores.
    #[must_use]
    pub const fn answer(key: &KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, dialog_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(60),
            Constraint::Fill(1),
        ])
        .areas(center);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");

        let lines = vec![
            Line::from(self.prompt),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[y] Yes",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    "[n] No",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(dialog_area, buf);
    }
}
