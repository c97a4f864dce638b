//! Main application orchestrator.

use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::panels::{EMPLOYEE_SELECT, PROJECT_SELECT};
use super::record_panel::{PanelAction, RecordPanel};
use crate::application::dto::{ListView, SubmitRequest, SubmitResponse};
use crate::application::use_cases::{
    DeleteOutcome, DeleteRecordUseCase, ListRecordsUseCase, PendingDelete, SubmitRecordUseCase,
};
use crate::domain::entities::{AllocationDetail, Employee, EntityKind, Project};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordServicePort;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{ConfirmDialog, SelectOption, StatusBar, TabBar};

const NOTICE_TICK_RATE: Duration = Duration::from_millis(250);

/// Results of spawned requests, delivered back to the event loop.
#[derive(Debug)]
enum Action {
    EmployeesListed(ListView<Employee>),
    ProjectsListed(ListView<Project>),
    AllocationsListed(ListView<AllocationDetail>),
    EmployeeOptions(Vec<Employee>),
    ProjectOptions(Vec<Project>),
    Submitted {
        kind: EntityKind,
        result: Result<SubmitResponse, ApiError>,
    },
    Deleted {
        kind: EntityKind,
        result: Result<DeleteOutcome, ApiError>,
    },
}

/// Terminal application: one tab per record kind.
pub struct App {
    active: EntityKind,
    employees: RecordPanel<Employee>,
    projects: RecordPanel<Project>,
    allocations: RecordPanel<AllocationDetail>,
    confirm: Option<PendingDelete>,
    list_records: ListRecordsUseCase,
    submit_record: SubmitRecordUseCase,
    delete_record: DeleteRecordUseCase,
    api_url: String,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates the app over a record service.
    #[must_use]
    pub fn new(records: Arc<dyn RecordServicePort>, config: &AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let notice_duration = config.notice_duration();
        let highlight = highlight_style(&config.ui.highlight_color);

        Self {
            active: EntityKind::Employee,
            employees: RecordPanel::new(notice_duration).with_highlight(highlight),
            projects: RecordPanel::new(notice_duration).with_highlight(highlight),
            allocations: RecordPanel::new(notice_duration).with_highlight(highlight),
            confirm: None,
            list_records: ListRecordsUseCase::new(records.clone()),
            submit_record: SubmitRecordUseCase::new(records.clone()),
            delete_record: DeleteRecordUseCase::new(records),
            api_url: config.api_url.clone(),
            running: true,
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(api_url = %self.api_url, "Starting record client");
        self.show_tab(EntityKind::Employee);

        let mut terminal_events = EventStream::new();
        let mut notice_interval = interval(NOTICE_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(event) = terminal_events.next() => {
                    if let Event::Key(key) = event? {
                        self.handle_key(key);
                    }
                }

                _ = notice_interval.tick() => {
                    self.tick();
                }
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Returns the visible tab.
    #[must_use]
    pub const fn active_tab(&self) -> EntityKind {
        self.active
    }

    /// Whether the event loop should keep running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Switches tabs and lists the newly shown kind. The allocations tab
    /// also refreshes both selectors.
    pub fn show_tab(&mut self, kind: EntityKind) {
        debug!(tab = %kind, "Showing tab");
        self.active = kind;
        self.request_list(kind);
        if kind == EntityKind::Allocation {
            self.request_options();
        }
    }

    fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(request.await);
        });
    }

    fn request_list(&mut self, kind: EntityKind) {
        let list = self.list_records.clone();
        match kind {
            EntityKind::Employee => {
                self.employees.set_loading();
                self.spawn_request(async move { Action::EmployeesListed(list.employees().await) });
            }
            EntityKind::Project => {
                self.projects.set_loading();
                self.spawn_request(async move { Action::ProjectsListed(list.projects().await) });
            }
            EntityKind::Allocation => {
                self.allocations.set_loading();
                self.spawn_request(async move {
                    Action::AllocationsListed(list.allocations().await)
                });
            }
        }
    }

    fn request_options(&self) {
        let list = self.list_records.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            if let Some(employees) = list.employee_options().await {
                let _ = tx.send(Action::EmployeeOptions(employees));
            }
        });

        let list = self.list_records.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            if let Some(projects) = list.project_options().await {
                let _ = tx.send(Action::ProjectOptions(projects));
            }
        });
    }

    fn request_submit(&self, request: SubmitRequest) {
        let submit = self.submit_record.clone();
        let kind = request.kind();
        self.spawn_request(async move {
            let result = submit.execute(request).await;
            Action::Submitted { kind, result }
        });
    }

    fn request_delete(&self, pending: PendingDelete, confirmed: bool) {
        let delete = self.delete_record.clone();
        self.spawn_request(async move {
            let result = delete.execute(&pending, confirmed).await;
            Action::Deleted {
                kind: pending.kind,
                result,
            }
        });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if !EventHandler::is_press(&key) {
            return;
        }

        if EventHandler::is_quit_event(&key) {
            self.running = false;
            return;
        }

        if let Some(pending) = self.confirm.take() {
            match ConfirmDialog::answer(&key) {
                Some(confirmed) => self.request_delete(pending, confirmed),
                None => self.confirm = Some(pending),
            }
            return;
        }

        if let Some(kind) = EventHandler::tab_shortcut(&key) {
            self.show_tab(kind);
            return;
        }

        let action = match self.active {
            EntityKind::Employee => self.employees.handle_key(key),
            EntityKind::Project => self.projects.handle_key(key),
            EntityKind::Allocation => self.allocations.handle_key(key),
        };

        match action {
            PanelAction::None => {}
            PanelAction::Submit(request) => self.request_submit(request),
            PanelAction::ConfirmDelete(pending) => self.confirm = Some(pending),
            PanelAction::Refresh => self.show_tab(self.active),
            PanelAction::Quit => self.running = false,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::EmployeesListed(list) => self.employees.set_list(list),
            Action::ProjectsListed(list) => self.projects.set_list(list),
            Action::AllocationsListed(list) => self.allocations.set_list(list),
            Action::EmployeeOptions(employees) => {
                if let Some(select) = self.allocations.select_mut(EMPLOYEE_SELECT) {
                    select.set_options(
                        employees
                            .iter()
                            .map(|e| SelectOption::new(e.id(), e.option_label()))
                            .collect(),
                    );
                }
            }
            Action::ProjectOptions(projects) => {
                if let Some(select) = self.allocations.select_mut(PROJECT_SELECT) {
                    select.set_options(
                        projects
                            .iter()
                            .map(|p| SelectOption::new(p.id(), p.name()))
                            .collect(),
                    );
                }
            }
            Action::Submitted { kind, result } => {
                let reload = match kind {
                    EntityKind::Employee => self.employees.on_submitted(&result),
                    EntityKind::Project => self.projects.on_submitted(&result),
                    EntityKind::Allocation => self.allocations.on_submitted(&result),
                };
                if reload {
                    self.request_list(kind);
                }
            }
            Action::Deleted { kind, result } => {
                let reload = match kind {
                    EntityKind::Employee => self.employees.on_deleted(&result),
                    EntityKind::Project => self.projects.on_deleted(&result),
                    EntityKind::Allocation => self.allocations.on_deleted(&result),
                };
                if reload {
                    self.request_list(kind);
                }
            }
        }
    }

    fn tick(&mut self) {
        self.employees.tick();
        self.projects.tick();
        self.allocations.tick();
    }

    fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(TabBar::new(self.active), tabs_area);

        let buf = frame.buffer_mut();
        match self.active {
            EntityKind::Employee => self.employees.render(body_area, buf),
            EntityKind::Project => self.projects.render(body_area, buf),
            EntityKind::Allocation => self.allocations.render(body_area, buf),
        }

        let footer = if self.confirm.is_some() {
            StatusBar::new().hint("y", "Confirm").hint("n", "Cancel")
        } else {
            StatusBar::new()
                .hint("F1-F3", "Tabs")
                .hint("Tab", "Next field")
                .hint("Enter", "Submit")
                .hint("Esc", "Table")
                .hint("e", "Edit")
                .hint("d", "Delete")
                .hint("r", "Refresh")
                .hint("^Q", "Quit")
        }
        .right(self.api_url.clone());
        frame.render_widget(&footer, footer_area);

        if let Some(pending) = &self.confirm {
            frame.render_widget(ConfirmDialog::new(&pending.prompt), frame.area());
        }
    }
}

fn highlight_style(color: &str) -> Style {
    let bg = Color::from_str(color).unwrap_or_else(|_| {
        warn!(color, "Invalid highlight color, using default");
        Color::Rgb(0xe8, 0xe8, 0xe8)
    });
    Style::default().bg(bg).fg(Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::WriteMode;
    use crate::domain::entities::{EmployeeDraft, ProjectDraft, RecordId};
    use crate::domain::ports::mocks::{InMemoryRecordService, MockRecordServicePort};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(records: Arc<dyn RecordServicePort>) -> App {
        App::new(records, &AppConfig::default())
    }

    async fn next_action(app: &mut App) -> Action {
        tokio::time::timeout(Duration::from_secs(5), app.action_rx.recv())
            .await
            .expect("timed out waiting for an action")
            .expect("action channel closed")
    }

    #[tokio::test]
    async fn test_created_employee_is_listed_with_assigned_id() {
        let mut app = app_with(Arc::new(InMemoryRecordService::new()));

        for c in "Ana".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "Go".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "40".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        let submitted = next_action(&mut app).await;
        assert!(matches!(
            submitted,
            Action::Submitted {
                kind: EntityKind::Employee,
                result: Ok(SubmitResponse {
                    mode: WriteMode::Create,
                    ..
                }),
            }
        ));
        app.handle_action(submitted);
        assert_eq!(app.employees.list(), &ListView::Loading);

        let listed = next_action(&mut app).await;
        app.handle_action(listed);

        let rows = app.employees.list().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Ana");
        assert_eq!(rows[0].skills(), "Go");
        assert_eq!(rows[0].available_hours(), 40);
        assert_eq!(rows[0].id(), RecordId(1));
        assert_eq!(
            app.employees.notices().current().map(|n| n.message.as_str()),
            Some("Employee added successfully!")
        );
    }

    #[tokio::test]
    async fn test_allocations_tab_loads_list_and_both_selectors() {
        let service = InMemoryRecordService::new();
        service
            .create(&EmployeeDraft::new("Ana", "python", Some(40)).into())
            .await
            .unwrap();
        service
            .create(&ProjectDraft::new("ETL", Some(80), "Python, SQL").into())
            .await
            .unwrap();
        let mut app = app_with(Arc::new(service));

        app.handle_key(key(KeyCode::F(3)));
        assert_eq!(app.active_tab(), EntityKind::Allocation);

        for _ in 0..3 {
            let action = next_action(&mut app).await;
            app.handle_action(action);
        }

        assert_eq!(app.allocations.list(), &ListView::Empty);
        let employee_options = app
            .allocations
            .select_mut(EMPLOYEE_SELECT)
            .map(|s| s.options().to_vec())
            .unwrap_or_default();
        assert_eq!(
            employee_options,
            vec![SelectOption::new(RecordId(1), "Ana (python)")]
        );
        let project_options = app
            .allocations
            .select_mut(PROJECT_SELECT)
            .map(|s| s.options().to_vec())
            .unwrap_or_default();
        assert_eq!(project_options, vec![SelectOption::new(RecordId(2), "ETL")]);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let mut mock = MockRecordServicePort::new();
        mock.expect_list_employees()
            .returning(|| Ok(vec![Employee::new(1, "Ana", "Go", 40)]));
        mock.expect_delete().never();
        let mut app = app_with(Arc::new(mock));

        app.show_tab(EntityKind::Employee);
        let listed = next_action(&mut app).await;
        app.handle_action(listed);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(
            app.confirm.as_ref().map(|p| p.prompt.as_str()),
            Some("Are you sure you want to delete employee \"Ana\"?")
        );

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.confirm.is_none());

        let answered = next_action(&mut app).await;
        assert!(matches!(
            answered,
            Action::Deleted {
                result: Ok(DeleteOutcome::Declined),
                ..
            }
        ));
        app.handle_action(answered);
        assert!(app.employees.notices().current().is_none());
        assert_eq!(app.employees.list().rows().len(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_reports_and_relists() {
        let service = InMemoryRecordService::new();
        service
            .create(&ProjectDraft::new("ETL", Some(80), "SQL").into())
            .await
            .unwrap();
        let mut app = app_with(Arc::new(service));

        app.handle_key(key(KeyCode::F(2)));
        let listed = next_action(&mut app).await;
        app.handle_action(listed);
        assert_eq!(app.projects.list().rows().len(), 1);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(
            app.confirm.as_ref().map(|p| p.prompt.as_str()),
            Some("Are you sure you want to delete project \"ETL\"?")
        );
        app.handle_key(key(KeyCode::Char('y')));

        let deleted = next_action(&mut app).await;
        app.handle_action(deleted);
        assert_eq!(
            app.projects.notices().current().map(|n| n.message.as_str()),
            Some("Project deleted successfully!")
        );

        let relisted = next_action(&mut app).await;
        app.handle_action(relisted);
        assert_eq!(app.projects.list(), &ListView::Empty);
    }

    #[tokio::test]
    async fn test_unreachable_service_shows_generic_messages() {
        let mut mock = MockRecordServicePort::new();
        mock.expect_list_employees()
            .returning(|| Err(ApiError::transport("connection refused")));
        mock.expect_create()
            .returning(|_| Err(ApiError::transport("connection refused")));
        let mut app = app_with(Arc::new(mock));

        app.show_tab(EntityKind::Employee);
        let listed = next_action(&mut app).await;
        app.handle_action(listed);
        assert_eq!(
            app.employees.list().placeholder(EntityKind::Employee),
            Some("Failed to load employees".to_string())
        );

        app.handle_key(key(KeyCode::Enter));
        let submitted = next_action(&mut app).await;
        app.handle_action(submitted);
        assert_eq!(
            app.employees.notices().current().map(|n| n.message.as_str()),
            Some("Failed to connect to server")
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(Arc::new(InMemoryRecordService::new()));

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));

        assert!(!app.is_running());
    }

    #[test]
    fn test_highlight_style_falls_back_on_bad_color() {
        assert_eq!(
            highlight_style("#112233").bg,
            Some(Color::Rgb(0x11, 0x22, 0x33))
        );
        assert_eq!(
            highlight_style("not a color").bg,
            Some(Color::Rgb(0xe8, 0xe8, 0xe8))
        );
    }
}
