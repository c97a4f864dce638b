//! Write body for any record kind.

use serde::Serialize;

use super::{AllocationDraft, EmployeeDraft, EntityKind, ProjectDraft};

/// Create/update body, tagged by kind but serialized as the bare record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordDraft {
    /// Employee body.
    Employee(EmployeeDraft),
    /// Project body.
    Project(ProjectDraft),
    /// Allocation body.
    Allocation(AllocationDraft),
}

impl RecordDraft {
    /// Returns the kind of record this body writes.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Employee(_) => EntityKind::Employee,
            Self::Project(_) => EntityKind::Project,
            Self::Allocation(_) => EntityKind::Allocation,
        }
    }
}

impl From<EmployeeDraft> for RecordDraft {
    fn from(value: EmployeeDraft) -> Self {
        Self::Employee(value)
    }
}

impl From<ProjectDraft> for RecordDraft {
    fn from(value: ProjectDraft) -> Self {
        Self::Project(value)
    }
}

impl From<AllocationDraft> for RecordDraft {
    fn from(value: AllocationDraft) -> Self {
        Self::Allocation(value)
    }
}
