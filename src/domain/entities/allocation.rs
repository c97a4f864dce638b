//! Allocation records: the write shape and the service's detailed read view.

use serde::{Deserialize, Serialize};

use super::{Employee, Project, RecordId};

/// Body of an allocation create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationDraft {
    /// Employee id, `null` when none is selected.
    pub employee_id: Option<i64>,
    /// Project id, `null` when none is selected.
    pub project_id: Option<i64>,
    /// Allocated hours, `null` when not a number.
    pub allocation_hours: Option<i64>,
}

impl AllocationDraft {
    /// Creates an allocation body.
    #[must_use]
    pub const fn new(
        employee_id: Option<i64>,
        project_id: Option<i64>,
        allocation_hours: Option<i64>,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            allocation_hours,
        }
    }
}

/// Denormalized allocation row produced by `/read_allocations_detailed`.
///
/// Totals and remaining hours are computed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDetail {
    allocation_id: RecordId,
    employee_id: RecordId,
    employee_name: String,
    employee_skills: String,
    project_id: RecordId,
    project_name: String,
    project_skills_required: String,
    allocation_hours: i64,
    total_employee_hours: i64,
    remaining_hours: i64,
}

impl AllocationDetail {
    /// Starts a detail row joining an allocation to its employee and project.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, employee: &Employee, project: &Project) -> Self {
        Self {
            allocation_id: id.into(),
            employee_id: employee.id(),
            employee_name: employee.name().to_string(),
            employee_skills: employee.skills().to_string(),
            project_id: project.id(),
            project_name: project.name().to_string(),
            project_skills_required: project.skill_required().to_string(),
            allocation_hours: 0,
            total_employee_hours: 0,
            remaining_hours: 0,
        }
    }

    /// Sets the allocated, total and remaining hours.
    #[must_use]
    pub const fn with_hours(mut self, allocated: i64, total: i64, remaining: i64) -> Self {
        self.allocation_hours = allocated;
        self.total_employee_hours = total;
        self.remaining_hours = remaining;
        self
    }

    /// Returns the allocation id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.allocation_id
    }

    /// Returns the allocated employee's id.
    #[must_use]
    pub const fn employee_id(&self) -> RecordId {
        self.employee_id
    }

    /// Returns the employee name.
    #[must_use]
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Returns the employee's skills.
    #[must_use]
    pub fn employee_skills(&self) -> &str {
        &self.employee_skills
    }

    /// Returns the project id.
    #[must_use]
    pub const fn project_id(&self) -> RecordId {
        self.project_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the skills the project requires.
    #[must_use]
    pub fn project_skills_required(&self) -> &str {
        &self.project_skills_required
    }

    /// Returns the hours of this allocation.
    #[must_use]
    pub const fn allocation_hours(&self) -> i64 {
        self.allocation_hours
    }

    /// Returns the employee's hours across all allocations.
    #[must_use]
    pub const fn total_employee_hours(&self) -> i64 {
        self.total_employee_hours
    }

    /// Returns the hours the employee has left.
    #[must_use]
    pub const fn remaining_hours(&self) -> i64 {
        self.remaining_hours
    }

    /// Whether the employee's skills and the project's required skills
    /// overlap under the substring heuristic.
    #[must_use]
    pub fn skills_match(&self) -> bool {
        crate::domain::skill_match::skills_overlap(
            &self.employee_skills,
            &self.project_skills_required,
        )
    }
}
