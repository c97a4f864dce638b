//! One tab's form, notice line and record table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, TableState, Widget},
};
use std::time::Duration;

use super::form_field::FormField;
use crate::application::dto::{
    ListView, SubmitRequest, SubmitResponse, delete_failure_notice, delete_success_notice,
    submit_failure_notice,
};
use crate::application::use_cases::{DeleteOutcome, PendingDelete};
use crate::application::{EditSession, NoticeBoard};
use crate::domain::entities::{EntityKind, RecordDraft, RecordId};
use crate::domain::errors::ApiError;
use crate::domain::NoticeLevel;
use crate::presentation::widgets::{RecordTable, SelectInput, TableRow};

/// A record kind as shown in a panel.
pub trait PanelRecord: Clone + Send + 'static {
    /// Kind of record.
    const KIND: EntityKind;
    /// Table column headers.
    const HEADERS: &'static [&'static str];

    /// Returns the record id.
    fn id(&self) -> RecordId;

    /// Returns the table cells, one per header.
    fn cells(&self) -> Vec<String>;

    /// Whether the row gets the match highlight.
    fn highlighted(&self) -> bool {
        false
    }

    /// Name shown in the delete confirmation, if the kind names one.
    fn delete_name(&self) -> Option<&str>;

    /// Values filling the form when editing this record, one per field.
    fn form_values(&self) -> Vec<String>;

    /// Empty form fields for this kind.
    fn form_fields() -> Vec<FormField>;

    /// Coerces field values into a write body.
    fn draft(values: &[String]) -> RecordDraft;
}

/// Request a panel hands back to the app after a key press.
#[derive(Debug, Clone)]
pub enum PanelAction {
    /// Nothing for the app to do.
    None,
    /// Send the form.
    Submit(SubmitRequest),
    /// Ask before deleting this record.
    ConfirmDelete(PendingDelete),
    /// Reload the tab.
    Refresh,
    /// Leave the application.
    Quit,
}

/// Part of a panel that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Form field at this index.
    Field(usize),
    /// Submit control.
    Submit,
    /// Record table.
    Table,
}

/// State of one record tab.
pub struct RecordPanel<R: PanelRecord> {
    list: ListView<R>,
    table_state: TableState,
    fields: Vec<FormField>,
    focus: PanelFocus,
    session: EditSession,
    notices: NoticeBoard,
    highlight: Style,
}

impl<R: PanelRecord> RecordPanel<R> {
    /// Creates an empty panel whose notices last `notice_duration`.
    #[must_use]
    pub fn new(notice_duration: Duration) -> Self {
        let mut panel = Self {
            list: ListView::Loading,
            table_state: TableState::default(),
            fields: R::form_fields(),
            focus: PanelFocus::Field(0),
            session: EditSession::new(R::KIND),
            notices: NoticeBoard::new(notice_duration),
            highlight: Style::default()
                .bg(Color::Rgb(0xe8, 0xe8, 0xe8))
                .fg(Color::Black),
        };
        panel.apply_focus();
        panel
    }

    /// Sets the style of highlighted rows.
    #[must_use]
    pub fn with_highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }

    /// Returns the list contents.
    #[must_use]
    pub const fn list(&self) -> &ListView<R> {
        &self.list
    }

    /// Returns the edit state.
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    /// Returns the focused part.
    #[must_use]
    pub const fn focus(&self) -> PanelFocus {
        self.focus
    }

    /// Returns the notice board.
    #[must_use]
    pub const fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Returns the current form values, one per field.
    #[must_use]
    pub fn field_values(&self) -> Vec<String> {
        self.fields.iter().map(FormField::value).collect()
    }

    /// Returns the selector at `index`, if that field is one.
    pub fn select_mut(&mut self, index: usize) -> Option<&mut SelectInput> {
        match self.fields.get_mut(index) {
            Some(FormField::Select(select)) => Some(select),
            _ => None,
        }
    }

    /// Shows the loading text until the next list arrives.
    pub fn set_loading(&mut self) {
        self.list = ListView::Loading;
    }

    /// Replaces the list with a completed fetch.
    pub fn set_list(&mut self, list: ListView<R>) {
        let len = list.rows().len();
        self.list = list;
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    /// Expires the panel's notice.
    pub fn tick(&mut self) {
        self.notices.tick();
    }

    /// Fills the form from a record and marks it as the edit target.
    pub fn enter_edit_mode(&mut self, record: &R) {
        for (field, value) in self.fields.iter_mut().zip(record.form_values()) {
            field.set_value(&value);
        }
        self.session.enter(record.id());
        self.focus = PanelFocus::Field(0);
        self.apply_focus();
    }

    /// Builds the submission for the current form contents.
    #[must_use]
    pub fn submit_request(&self) -> SubmitRequest {
        SubmitRequest::new(R::draft(&self.field_values()), self.session.target())
    }

    /// Applies a submit result. Returns whether the list should be reloaded.
    pub fn on_submitted(&mut self, result: &Result<SubmitResponse, ApiError>) -> bool {
        match result {
            Ok(response) => {
                self.notices.show(response.notice());
                self.fields.iter_mut().for_each(FormField::clear);
                self.session.finish();
                true
            }
            Err(e) => {
                self.notices.show(submit_failure_notice(e));
                false
            }
        }
    }

    /// Applies a delete result. Returns whether the list should be reloaded.
    pub fn on_deleted(&mut self, result: &Result<DeleteOutcome, ApiError>) -> bool {
        match result {
            Ok(DeleteOutcome::Deleted) => {
                self.notices.show(delete_success_notice(R::KIND));
                true
            }
            Ok(DeleteOutcome::Declined) => false,
            Err(e) => {
                self.notices.show(delete_failure_notice(R::KIND, e));
                false
            }
        }
    }

    fn selected_record(&self) -> Option<&R> {
        self.table_state
            .selected()
            .and_then(|i| self.list.rows().get(i))
    }

    fn apply_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(self.focus == PanelFocus::Field(i));
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Field(i) if i + 1 < self.fields.len() => PanelFocus::Field(i + 1),
            PanelFocus::Field(_) => PanelFocus::Submit,
            PanelFocus::Submit => PanelFocus::Table,
            PanelFocus::Table => PanelFocus::Field(0),
        };
        self.apply_focus();
    }

    fn focus_previous(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Field(0) => PanelFocus::Table,
            PanelFocus::Field(i) => PanelFocus::Field(i - 1),
            PanelFocus::Submit => PanelFocus::Field(self.fields.len().saturating_sub(1)),
            PanelFocus::Table => PanelFocus::Submit,
        };
        self.apply_focus();
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.list.rows().len();
        if len == 0 {
            return;
        }
        let next = match (self.table_state.selected(), down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        };
        self.table_state.select(Some(next));
    }

    /// Handles a key for this panel.
    pub fn handle_key(&mut self, key: KeyEvent) -> PanelAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return PanelAction::Submit(self.submit_request());
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return PanelAction::None;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return PanelAction::None;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Field(index) => self.handle_field_key(index, key),
            PanelFocus::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => PanelAction::Submit(self.submit_request()),
                KeyCode::Up => {
                    self.focus_previous();
                    PanelAction::None
                }
                KeyCode::Down => {
                    self.focus_next();
                    PanelAction::None
                }
                KeyCode::Esc => {
                    self.focus = PanelFocus::Table;
                    self.apply_focus();
                    PanelAction::None
                }
                _ => PanelAction::None,
            },
            PanelFocus::Table => self.handle_table_key(key),
        }
    }

    fn handle_field_key(&mut self, index: usize, key: KeyEvent) -> PanelAction {
        match key.code {
            KeyCode::Enter => return PanelAction::Submit(self.submit_request()),
            KeyCode::Esc => {
                self.focus = PanelFocus::Table;
                self.apply_focus();
                return PanelAction::None;
            }
            KeyCode::Down => {
                self.focus_next();
                return PanelAction::None;
            }
            KeyCode::Up => {
                self.focus_previous();
                return PanelAction::None;
            }
            _ => {}
        }

        match self.fields.get_mut(index) {
            Some(FormField::Text(input)) => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.input_char(c);
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            },
            Some(FormField::Select(select)) => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => select.next(),
                KeyCode::Left => select.previous(),
                _ => {}
            },
            None => {}
        }
        PanelAction::None
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> PanelAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(record) = self.selected_record().cloned() {
                    self.enter_edit_mode(&record);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(record) = self.selected_record() {
                    return PanelAction::ConfirmDelete(PendingDelete::new(
                        R::KIND,
                        record.id(),
                        record.delete_name(),
                    ));
                }
            }
            KeyCode::Char('r') => return PanelAction::Refresh,
            KeyCode::Char('q') => return PanelAction::Quit,
            _ => {}
        }
        PanelAction::None
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let title = if let Some(id) = self.session.target() {
            format!(" Edit {} #{id} ", R::KIND.title())
        } else {
            format!(" New {} ", R::KIND.title())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let [fields_area, actions_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);

        let constraints = vec![Constraint::Fill(1); self.fields.len()];
        let field_areas = Layout::horizontal(constraints).split(fields_area);
        for (field, field_area) in self.fields.iter().zip(field_areas.iter()) {
            field.render(*field_area, buf);
        }

        let button_style = if self.focus == PanelFocus::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![
            Span::styled(format!("[ {} ]", self.session.submit_label()), button_style),
            Span::raw("  "),
        ];
        if let Some(notice) = self.notices.current() {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            spans.push(Span::styled(
                notice.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Line::from(spans)).render(actions_area, buf);
    }
}

impl<R: PanelRecord> RecordPanel<R> {
    /// Renders the form above the record table.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [form_area, table_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(area);

        self.render_form(form_area, buf);

        let rows = self
            .list
            .rows()
            .iter()
            .map(|record| TableRow {
                cells: record.cells(),
                highlighted: record.highlighted(),
            })
            .collect();

        let title = format!("{} List", R::KIND.title());
        RecordTable::new(&title, R::HEADERS, rows)
            .placeholder(self.list.placeholder(R::KIND))
            .highlight(self.highlight)
            .focused(self.focus == PanelFocus::Table)
            .render(table_area, buf, &mut self.table_state);
    }
}
