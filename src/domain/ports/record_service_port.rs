//! Record service port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    AllocationDetail, Employee, EntityKind, Project, RecordDraft, RecordId,
};
use crate::domain::errors::ApiError;

/// Port for the remote record-keeping service.
///
/// Every call is a single request; nothing is cached or retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordServicePort: Send + Sync {
    /// Fetches all employees.
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// Fetches all projects.
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// Fetches the detailed allocation view.
    async fn list_allocations(&self) -> Result<Vec<AllocationDetail>, ApiError>;

    /// Creates a record of the draft's kind.
    async fn create(&self, draft: &RecordDraft) -> Result<(), ApiError>;

    /// Replaces the record addressed by `id` with the draft.
    async fn update(&self, id: RecordId, draft: &RecordDraft) -> Result<(), ApiError>;

    /// Deletes a record.
    async fn delete(&self, kind: EntityKind, id: RecordId) -> Result<(), ApiError>;
}


#[cfg(test)]
mod tests {
    use super::fake::{EMPLOYEE_HOUR_CAP, InMemoryRecordService};
    use super::*;
    use crate::domain::entities::{AllocationDraft, EmployeeDraft, ProjectDraft};

    #[tokio::test]
    async fn test_fake_reports_hours_left_under_cap() {
        let service = InMemoryRecordService::new();
        service
            .create(&EmployeeDraft::new("Ana", "Go", Some(40)).into())
            .await
            .unwrap();
        service
            .create(&ProjectDraft::new("ETL", Some(80), "Go").into())
            .await
            .unwrap();
        for hours in [30, 20] {
            service
                .create(&AllocationDraft::new(Some(1), Some(2), Some(hours)).into())
                .await
                .unwrap();
        }

        let rows = service.list_allocations().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].allocation_hours(), 30);
        assert_eq!(rows[0].total_employee_hours(), 50);
        assert_eq!(rows[0].remaining_hours(), EMPLOYEE_HOUR_CAP - 50);
    }

    #[tokio::test]
    async fn test_fake_rejects_missing_record() {
        let service = InMemoryRecordService::new();

        let error = service
            .delete(EntityKind::Project, RecordId(9))
            .await
            .unwrap_err();

        assert_eq!(error.detail(), Some("Project not found"));
    }
}
