//! Delete-with-confirmation use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{EntityKind, RecordId};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordServicePort;

/// Delete awaiting the user's yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    /// Kind of record to delete.
    pub kind: EntityKind,
    /// Record to delete.
    pub id: RecordId,
    /// Question shown to the user.
    pub prompt: String,
}

impl PendingDelete {
    /// Builds the confirmation for a record. Employees and projects are
    /// named in the prompt; allocations are not.
    #[must_use]
    pub fn new(kind: EntityKind, id: RecordId, name: Option<&str>) -> Self {
        let prompt = match name {
            Some(name) if kind != EntityKind::Allocation => {
                format!("Are you sure you want to delete {} \"{name}\"?", kind.noun())
            }
            _ => format!("Are you sure you want to delete this {}?", kind.noun()),
        };
        Self { kind, id, prompt }
    }
}

/// Result of answering a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined; nothing was sent.
    Declined,
    /// Service deleted the record.
    Deleted,
}

/// Deletes a record once the user confirms.
#[derive(Clone)]
pub struct DeleteRecordUseCase {
    records: Arc<dyn RecordServicePort>,
}

impl DeleteRecordUseCase {
    /// Creates the use case over a record service.
    #[must_use]
    pub const fn new(records: Arc<dyn RecordServicePort>) -> Self {
        Self { records }
    }

    /// Sends the delete only if `confirmed`.
    ///
    /// # Errors
    /// Returns the service error when the delete request fails.
    pub async fn execute(
        &self,
        pending: &PendingDelete,
        confirmed: bool,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirmed {
            debug!(kind = %pending.kind, id = %pending.id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match self.records.delete(pending.kind, pending.id).await {
            Ok(()) => {
                info!(kind = %pending.kind, id = %pending.id, "Record deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                warn!(kind = %pending.kind, id = %pending.id, error = %e, "Delete failed");
                Err(e)
            }
        }
    }
}
