//! Initiative record.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Project as returned by the record service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    project_id: RecordId,
    project_name: String,
    project_duration: i64,
    project_skill_required: String,
}

impl Project {
    /// Creates a project record.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        duration: i64,
        skill_required: impl Into<String>,
    ) -> Self {
        Self {
            project_id: id.into(),
            project_name: name.into(),
            project_duration: duration,
            project_skill_required: skill_required.into(),
        }
    }

    /// Returns the server-assigned id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.project_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.project_name
    }

    /// Returns the duration in hours.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.project_duration
    }

    /// Returns the required-skill descriptor.
    #[must_use]
    pub fn skill_required(&self) -> &str {
        &self.project_skill_required
    }
}

/// Body of a project create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    /// Project name.
    pub project_name: String,
    /// Duration in hours, `null` when not a number.
    pub project_duration: Option<i64>,
    /// Required skill.
    pub project_skill_required: String,
}

impl ProjectDraft {
    /// Creates a project body.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration: Option<i64>,
        skill_required: impl Into<String>,
    ) -> Self {
        Self {
            project_name: name.into(),
            project_duration: duration,
            project_skill_required: skill_required.into(),
        }
    }
}
