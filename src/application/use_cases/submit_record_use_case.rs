//! Create-or-update use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{SubmitRequest, SubmitResponse, WriteMode};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordServicePort;

/// Sends a form submission as a create or an update.
#[derive(Clone)]
pub struct SubmitRecordUseCase {
    records: Arc<dyn RecordServicePort>,
}

impl SubmitRecordUseCase {
    /// Creates the use case over a record service.
    #[must_use]
    pub const fn new(records: Arc<dyn RecordServicePort>) -> Self {
        Self { records }
    }

    /// Executes the submission.
    ///
    /// # Errors
    /// Returns the service error unchanged; nothing is retried.
    pub async fn execute(&self, request: SubmitRequest) -> Result<SubmitResponse, ApiError> {
        let kind = request.kind();
        debug!(kind = %kind, mode = ?request.mode, "Submitting record");

        let result = match request.mode {
            WriteMode::Create => self.records.create(&request.draft).await,
            WriteMode::Update(id) => self.records.update(id, &request.draft).await,
        };

        match result {
            Ok(()) => {
                info!(kind = %kind, mode = ?request.mode, "Record saved");
                Ok(SubmitResponse {
                    kind,
                    mode: request.mode,
                })
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "Record submission failed");
                Err(e)
            }
        }
    }
}
