//! Domain layer with record entities and the record service port.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Panel notices.
pub mod notice;
/// Port definitions.
pub mod ports;
/// Skill overlap heuristic.
pub mod skill_match;

pub use entities::{
    AllocationDetail, AllocationDraft, Employee, EmployeeDraft, EntityKind, Project,
    ProjectDraft, RecordDraft, RecordId,
};
pub use errors::ApiError;
pub use notice::{Notice, NoticeLevel};
pub use ports::RecordServicePort;
