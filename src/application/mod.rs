//! Application layer with use cases, form DTOs and panel services.

/// Data transfer objects.
pub mod dto;
/// Panel state services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ListView, SubmitRequest, SubmitResponse, WriteMode};
pub use services::{EditSession, NoticeBoard};
pub use use_cases::{DeleteRecordUseCase, ListRecordsUseCase, PendingDelete, SubmitRecordUseCase};
