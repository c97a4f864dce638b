//! The three record kinds and their service routes.

use super::RecordId;

/// Kind of record managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Staff member.
    Employee,
    /// Initiative staff get allocated to.
    Project,
    /// Hours of one employee booked on one project.
    Allocation,
}

impl EntityKind {
    /// All kinds in tab order.
    pub const ALL: [Self; 3] = [Self::Employee, Self::Project, Self::Allocation];

    /// Lower-case noun used in user-facing messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Project => "project",
            Self::Allocation => "allocation",
        }
    }

    /// Capitalized noun used in user-facing messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Project => "Project",
            Self::Allocation => "Allocation",
        }
    }

    /// Plural noun.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Employee => "employees",
            Self::Project => "projects",
            Self::Allocation => "allocations",
        }
    }

    /// Path of the list endpoint.
    ///
    /// Allocations are listed through the detailed read view.
    #[must_use]
    pub const fn list_path(self) -> &'static str {
        match self {
            Self::Employee => "/read_employees",
            Self::Project => "/read_projects",
            Self::Allocation => "/read_allocations_detailed",
        }
    }

    /// Path of the create endpoint.
    #[must_use]
    pub const fn create_path(self) -> &'static str {
        match self {
            Self::Employee => "/create_employee",
            Self::Project => "/create_project",
            Self::Allocation => "/create_allocation",
        }
    }

    /// Path of the update endpoint for a record.
    #[must_use]
    pub fn update_path(self, id: RecordId) -> String {
        format!("/update_{}/{id}", self.noun())
    }

    /// Path of the delete endpoint for a record.
    #[must_use]
    pub fn delete_path(self, id: RecordId) -> String {
        format!("/delete_{}/{id}", self.noun())
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_routes() {
        let id = RecordId(7);
        assert_eq!(EntityKind::Employee.update_path(id), "/update_employee/7");
        assert_eq!(EntityKind::Project.delete_path(id), "/delete_project/7");
        assert_eq!(
            EntityKind::Allocation.update_path(id),
            "/update_allocation/7"
        );
        assert_eq!(EntityKind::Allocation.create_path(), "/create_allocation");
    }

    #[test]
    fn test_allocations_list_detailed_view() {
        assert_eq!(
            EntityKind::Allocation.list_path(),
            "/read_allocations_detailed"
        );
    }
}
