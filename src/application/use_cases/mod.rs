//! Use case implementations.

mod delete_record_use_case;
mod list_records_use_case;
mod submit_record_use_case;

pub use delete_record_use_case::{DeleteOutcome, DeleteRecordUseCase, PendingDelete};
pub use list_records_use_case::ListRecordsUseCase;
pub use submit_record_use_case::SubmitRecordUseCase;
