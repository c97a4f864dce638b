//! Staff member record.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Staff member as returned by the record service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    employee_id: RecordId,
    employee_name: String,
    skilled_language: String,
    available_hrs: i64,
}

impl Employee {
    /// Creates an employee record.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        skills: impl Into<String>,
        available_hours: i64,
    ) -> Self {
        Self {
            employee_id: id.into(),
            employee_name: name.into(),
            skilled_language: skills.into(),
            available_hrs: available_hours,
        }
    }

    /// Returns the server-assigned id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.employee_id
    }

    /// Returns the employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.employee_name
    }

    /// Returns the free-text skill descriptor.
    #[must_use]
    pub fn skills(&self) -> &str {
        &self.skilled_language
    }

    /// Returns the available hours.
    #[must_use]
    pub const fn available_hours(&self) -> i64 {
        self.available_hrs
    }

    /// Label used for allocation dropdown options.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.employee_name, self.skilled_language)
    }
}

/// Body of an employee create or update request.
///
/// Numeric fields that could not be coerced are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDraft {
    /// Employee name.
    pub employee_name: String,
    /// Free-text skills.
    pub skilled_language: String,
    /// Available hours, `null` when not a number.
    pub available_hrs: Option<i64>,
}

impl EmployeeDraft {
    /// Creates an employee body.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        skills: impl Into<String>,
        available_hours: Option<i64>,
    ) -> Self {
        Self {
            employee_name: name.into(),
            skilled_language: skills.into(),
            available_hrs: available_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"{"employee_id":3,"employee_name":"Ana","skilled_language":"Go","available_hrs":40}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(employee.id(), RecordId(3));
        assert_eq!(employee.name(), "Ana");
        assert_eq!(employee.skills(), "Go");
        assert_eq!(employee.available_hours(), 40);
        assert_eq!(employee.option_label(), "Ana (Go)");
    }

    #[test]
    fn test_draft_has_no_id_and_null_hours() {
        let draft = EmployeeDraft::new("Ana", "Go", None);
        let value = serde_json::to_value(&draft).unwrap();

        assert!(value.get("employee_id").is_none());
        assert!(value["available_hrs"].is_null());
    }
}
