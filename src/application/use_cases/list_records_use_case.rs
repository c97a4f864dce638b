//! List use case: one read per call, no caching.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::ListView;
use crate::domain::entities::{AllocationDetail, Employee, EntityKind, Project};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordServicePort;

/// Fetches record lists for rendering.
#[derive(Clone)]
pub struct ListRecordsUseCase {
    records: Arc<dyn RecordServicePort>,
}

impl ListRecordsUseCase {
    /// Creates the use case over a record service.
    #[must_use]
    pub const fn new(records: Arc<dyn RecordServicePort>) -> Self {
        Self { records }
    }

    /// Lists employees.
    pub async fn employees(&self) -> ListView<Employee> {
        Self::view(EntityKind::Employee, self.records.list_employees().await)
    }

    /// Lists projects.
    pub async fn projects(&self) -> ListView<Project> {
        Self::view(EntityKind::Project, self.records.list_projects().await)
    }

    /// Lists the detailed allocation view.
    pub async fn allocations(&self) -> ListView<AllocationDetail> {
        Self::view(EntityKind::Allocation, self.records.list_allocations().await)
    }

    /// Fresh employee choices for the allocation form.
    ///
    /// Failures are logged and reported as `None` so callers keep their
    /// previous options.
    pub async fn employee_options(&self) -> Option<Vec<Employee>> {
        Self::options(EntityKind::Employee, self.records.list_employees().await)
    }

    /// Fresh project choices for the allocation form.
    pub async fn project_options(&self) -> Option<Vec<Project>> {
        Self::options(EntityKind::Project, self.records.list_projects().await)
    }

    fn view<T>(kind: EntityKind, result: Result<Vec<T>, ApiError>) -> ListView<T> {
        match &result {
            Ok(rows) => debug!(kind = %kind, count = rows.len(), "Records listed"),
            Err(e) => warn!(kind = %kind, error = %e, "Failed to list records"),
        }
        ListView::from_result(result)
    }

    fn options<T>(kind: EntityKind, result: Result<Vec<T>, ApiError>) -> Option<Vec<T>> {
        match result {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(kind = %kind, error = %e, "Failed to load dropdown options");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockRecordServicePort;

    fn employees(n: i64) -> Vec<Employee> {
        (1..=n)
            .map(|i| Employee::new(i, format!("E{i}"), "Go", 40))
            .collect()
    }

    #[tokio::test]
    async fn test_row_count_matches_array_length() {
        let mut port = MockRecordServicePort::new();
        port.expect_list_employees()
            .times(1)
            .returning(|| Ok(employees(3)));

        let use_case = ListRecordsUseCase::new(Arc::new(port));
        let view = use_case.employees().await;

        assert_eq!(view.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_array_renders_empty_state() {
        let mut port = MockRecordServicePort::new();
        port.expect_list_projects().returning(|| Ok(Vec::new()));

        let use_case = ListRecordsUseCase::new(Arc::new(port));
        let view = use_case.projects().await;

        assert_eq!(view, ListView::Empty);
        assert_eq!(
            view.placeholder(EntityKind::Project).as_deref(),
            Some("No projects found. Add one above!")
        );
    }

    #[tokio::test]
    async fn test_any_error_discards_render() {
        let mut port = MockRecordServicePort::new();
        port.expect_list_allocations()
            .returning(|| Err(ApiError::rejected(500, "boom")));

        let use_case = ListRecordsUseCase::new(Arc::new(port));

        assert_eq!(use_case.allocations().await, ListView::Failed);
    }

    #[tokio::test]
    async fn test_dropdown_failure_is_swallowed() {
        let mut port = MockRecordServicePort::new();
        port.expect_list_projects()
            .returning(|| Err(ApiError::transport("refused")));
        port.expect_list_employees().returning(|| Ok(employees(2)));

        let use_case = ListRecordsUseCase::new(Arc::new(port));

        assert!(use_case.project_options().await.is_none());
        assert_eq!(use_case.employee_options().await.map(|e| e.len()), Some(2));
    }
}
