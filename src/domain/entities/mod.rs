//! Domain entity definitions.

mod allocation;
mod draft;
mod employee;
mod kind;
mod project;
mod record_id;

pub use allocation::{AllocationDetail, AllocationDraft};
pub use draft::RecordDraft;
pub use employee::{Employee, EmployeeDraft};
pub use kind::EntityKind;
pub use project::{Project, ProjectDraft};
pub use record_id::RecordId;
