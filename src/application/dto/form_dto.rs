//! Raw form values and their coercion into write bodies.

use crate::domain::entities::{AllocationDraft, EmployeeDraft, ProjectDraft, RecordDraft};

/// Parses the leading integer of a form field.
///
/// Leading whitespace and a sign are accepted and trailing garbage is
/// ignored, so `" 40h"` yields `40`. A field with no leading digits yields
/// `None`, which is sent to the service as `null`.
#[must_use]
pub fn coerce_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Employee form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Name field.
    pub name: String,
    /// Free-text skills field.
    pub skills: String,
    /// Available hours, as typed.
    pub available_hours: String,
}

impl EmployeeForm {
    /// Coerces the fields into a create or update body.
    #[must_use]
    pub fn to_draft(&self) -> RecordDraft {
        EmployeeDraft::new(
            self.name.clone(),
            self.skills.clone(),
            coerce_int(&self.available_hours),
        )
        .into()
    }
}

/// Project form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    /// Name field.
    pub name: String,
    /// Duration in hours, as typed.
    pub duration: String,
    /// Required skill field.
    pub skill_required: String,
}

impl ProjectForm {
    /// Coerces the fields into a create or update body.
    #[must_use]
    pub fn to_draft(&self) -> RecordDraft {
        ProjectDraft::new(
            self.name.clone(),
            coerce_int(&self.duration),
            self.skill_required.clone(),
        )
        .into()
    }
}

/// Allocation form contents. Select values are the chosen record id as text,
/// or empty while the placeholder is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationForm {
    /// Selected employee id.
    pub employee: String,
    /// Selected project id.
    pub project: String,
    /// Allocated hours, as typed.
    pub hours: String,
}

impl AllocationForm {
    /// Coerces the fields into a create or update body.
    #[must_use]
    pub fn to_draft(&self) -> RecordDraft {
        AllocationDraft::new(
            coerce_int(&self.employee),
            coerce_int(&self.project),
            coerce_int(&self.hours),
        )
        .into()
    }
}
