//! Request and result types for the record use cases.

use crate::domain::entities::{EntityKind, RecordDraft, RecordId};
use crate::domain::errors::ApiError;
use crate::domain::notice::Notice;

/// Message shown when a submit got no interpretable response.
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to server";

/// Contents of a list region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListView<T> {
    /// Request in flight.
    #[default]
    Loading,
    /// Service returned an empty array.
    Empty,
    /// Service returned at least one record.
    Rows(Vec<T>),
    /// Any transport, status or parse failure.
    Failed,
}

impl<T> ListView<T> {
    /// Builds the view for a completed fetch.
    #[must_use]
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => Self::Empty,
            Ok(rows) => Self::Rows(rows),
            Err(_) => Self::Failed,
        }
    }

    /// Returns the rows when a table should be rendered.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Rows(rows) => rows,
            Self::Loading | Self::Empty | Self::Failed => &[],
        }
    }

    /// Returns the placeholder text shown instead of a table.
    #[must_use]
    pub fn placeholder(&self, kind: EntityKind) -> Option<String> {
        match self {
            Self::Loading => Some("Loading...".to_string()),
            Self::Empty => Some(empty_message(kind)),
            Self::Failed => Some(format!("Failed to load {}", kind.plural())),
            Self::Rows(_) => None,
        }
    }
}

/// Empty-state text for a kind.
#[must_use]
pub fn empty_message(kind: EntityKind) -> String {
    let verb = match kind {
        EntityKind::Allocation => "Create",
        EntityKind::Employee | EntityKind::Project => "Add",
    };
    format!("No {} found. {verb} one above!", kind.plural())
}

/// Whether a submit creates a record or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// POST to the create endpoint.
    Create,
    /// PUT to the update endpoint of this record.
    Update(RecordId),
}

impl WriteMode {
    /// Update when an edit target is in progress, create otherwise.
    #[must_use]
    pub const fn for_target(editing: Option<RecordId>) -> Self {
        match editing {
            Some(id) => Self::Update(id),
            None => Self::Create,
        }
    }
}

/// Form submission.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Write body.
    pub draft: RecordDraft,
    /// Create or update.
    pub mode: WriteMode,
}

impl SubmitRequest {
    /// Builds a submission, updating `editing` when set.
    #[must_use]
    pub fn new(draft: impl Into<RecordDraft>, editing: Option<RecordId>) -> Self {
        Self {
            draft: draft.into(),
            mode: WriteMode::for_target(editing),
        }
    }

    /// Kind of record being written.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.draft.kind()
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Kind of record written.
    pub kind: EntityKind,
    /// Whether it was created or updated.
    pub mode: WriteMode,
}

impl SubmitResponse {
    /// Success notice for this outcome.
    #[must_use]
    pub fn notice(&self) -> Notice {
        let verb = match (self.mode, self.kind) {
            (WriteMode::Update(_), _) => "updated",
            (WriteMode::Create, EntityKind::Allocation) => "created",
            (WriteMode::Create, EntityKind::Employee | EntityKind::Project) => "added",
        };
        Notice::success(format!("{} {verb} successfully!", self.kind.title()))
    }
}

/// Notice for a failed submission.
#[must_use]
pub fn submit_failure_notice(error: &ApiError) -> Notice {
    failure_notice(error, CONNECT_FAILED_MESSAGE)
}

/// Notice for a successful delete.
#[must_use]
pub fn delete_success_notice(kind: EntityKind) -> Notice {
    Notice::success(format!("{} deleted successfully!", kind.title()))
}

/// Notice for a failed delete.
#[must_use]
pub fn delete_failure_notice(kind: EntityKind, error: &ApiError) -> Notice {
    failure_notice(error, &format!("Failed to delete {}", kind.noun()))
}

fn failure_notice(error: &ApiError, fallback: &str) -> Notice {
    match error.detail() {
        Some(detail) => Notice::error(format!("Error: {detail}")),
        None => Notice::error(fallback),
    }
}
