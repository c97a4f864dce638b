//! Table of records or the list's placeholder text.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cell text, one per header.
    pub cells: Vec<String>,
    /// Whether the row gets the highlight style.
    pub highlighted: bool,
}

/// Renders either the rows as a table or, when there are no rows to show,
/// the placeholder text.
pub struct RecordTable<'a> {
    title: &'a str,
    headers: &'a [&'a str],
    rows: Vec<TableRow>,
    placeholder: Option<String>,
    highlight: Style,
    focused: bool,
}

impl<'a> RecordTable<'a> {
    /// Creates a table of `rows` under `headers`.
    #[must_use]
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: Vec<TableRow>) -> Self {
        Self {
            title,
            headers,
            rows,
            placeholder: None,
            highlight: Style::default().bg(Color::Rgb(0xe8, 0xe8, 0xe8)).fg(Color::Black),
            focused: false,
        }
    }

    /// Text shown instead of the table, if any.
    #[must_use]
    pub fn placeholder(mut self, text: Option<String>) -> Self {
        self.placeholder = text;
        self
    }

    /// Style of rows flagged as highlighted.
    #[must_use]
    pub const fn highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }

    /// Marks the table as focused.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for RecordTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.title));

        if let Some(text) = self.placeholder {
            Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(self.headers.iter().map(|h| Cell::from(*h)))
            .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

        let rows = self.rows.into_iter().map(|row| {
            let style = if row.highlighted {
                self.highlight
            } else {
                Style::default()
            };
            Row::new(row.cells.into_iter().map(Cell::from)).style(style)
        });

        let widths = vec![Constraint::Fill(1); self.headers.len()];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}
