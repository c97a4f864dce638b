use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::domain::entities::EntityKind;

/// Tab strip with one tab per record kind; the active tab is marked.
pub struct TabBar {
    active: EntityKind,
}

impl TabBar {
    /// Creates a tab bar with `active` selected.
    #[must_use]
    pub const fn new(active: EntityKind) -> Self {
        Self { active }
    }

    fn title(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Employee => "Employees",
            EntityKind::Project => "Projects",
            EntityKind::Allocation => "Allocations",
        }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = EntityKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| Line::from(format!("F{} {}", i + 1, Self::title(*kind))))
            .collect();
        let selected = EntityKind::ALL
            .iter()
            .position(|k| *k == self.active)
            .unwrap_or_default();

        Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Resource Allocation "),
            )
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
