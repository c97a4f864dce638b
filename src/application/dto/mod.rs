//! Data transfer objects for the application layer.

mod form_dto;
mod record_dto;

pub use form_dto::{AllocationForm, EmployeeForm, ProjectForm, coerce_int};
pub use record_dto::{
    CONNECT_FAILED_MESSAGE, ListView, SubmitRequest, SubmitResponse, WriteMode,
    delete_failure_notice, delete_success_notice, empty_message, submit_failure_notice,
};
