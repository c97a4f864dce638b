//! How each record kind fills a panel's table and form.

use super::form_field::FormField;
use super::record_panel::PanelRecord;
use crate::application::dto::{AllocationForm, EmployeeForm, ProjectForm};
use crate::domain::entities::{
    AllocationDetail, Employee, EntityKind, Project, RecordDraft, RecordId,
};

/// Index of the employee selector in the allocation form.
pub const EMPLOYEE_SELECT: usize = 0;
/// Index of the project selector in the allocation form.
pub const PROJECT_SELECT: usize = 1;

fn field(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}

impl PanelRecord for Employee {
    const KIND: EntityKind = EntityKind::Employee;
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Skills", "Available Hours"];

    fn id(&self) -> RecordId {
        Self::id(self)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            Self::id(self).to_string(),
            self.name().to_string(),
            self.skills().to_string(),
            self.available_hours().to_string(),
        ]
    }

    fn delete_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.skills().to_string(),
            self.available_hours().to_string(),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("Name", "Employee name"),
            FormField::text("Skills", "e.g. Python, SQL"),
            FormField::text("Available Hours", "40"),
        ]
    }

    fn draft(values: &[String]) -> RecordDraft {
        EmployeeForm {
            name: field(values, 0),
            skills: field(values, 1),
            available_hours: field(values, 2),
        }
        .to_draft()
    }
}

impl PanelRecord for Project {
    const KIND: EntityKind = EntityKind::Project;
    const HEADERS: &'static [&'static str] =
        &["ID", "Project Name", "Duration (hrs)", "Skills Required"];

    fn id(&self) -> RecordId {
        Self::id(self)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            Self::id(self).to_string(),
            self.name().to_string(),
            self.duration().to_string(),
            self.skill_required().to_string(),
        ]
    }

    fn delete_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.duration().to_string(),
            self.skill_required().to_string(),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("Project Name", "Project name"),
            FormField::text("Duration (hrs)", "120"),
            FormField::text("Skills Required", "e.g. Rust"),
        ]
    }

    fn draft(values: &[String]) -> RecordDraft {
        ProjectForm {
            name: field(values, 0),
            duration: field(values, 1),
            skill_required: field(values, 2),
        }
        .to_draft()
    }
}

impl PanelRecord for AllocationDetail {
    const KIND: EntityKind = EntityKind::Allocation;
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Employee",
        "Employee Skills",
        "Project",
        "Skills Required",
        "Hours Allocated",
        "Total Hours",
        "Remaining Hours",
    ];

    fn id(&self) -> RecordId {
        Self::id(self)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            Self::id(self).to_string(),
            self.employee_name().to_string(),
            self.employee_skills().to_string(),
            self.project_name().to_string(),
            self.project_skills_required().to_string(),
            self.allocation_hours().to_string(),
            self.total_employee_hours().to_string(),
            self.remaining_hours().to_string(),
        ]
    }

    fn highlighted(&self) -> bool {
        self.skills_match()
    }

    fn delete_name(&self) -> Option<&str> {
        None
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.employee_id().to_string(),
            self.project_id().to_string(),
            self.allocation_hours().to_string(),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::select("Employee", "Select Employee"),
            FormField::select("Project", "Select Project"),
            FormField::text("Hours", "10"),
        ]
    }

    fn draft(values: &[String]) -> RecordDraft {
        AllocationForm {
            employee: field(values, EMPLOYEE_SELECT),
            project: field(values, PROJECT_SELECT),
            hours: field(values, 2),
        }
        .to_draft()
    }
}
