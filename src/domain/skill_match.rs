//! Skill overlap heuristic used to highlight allocation rows.

/// Returns whether either skill text contains the other, ignoring case.
///
/// Purely cosmetic: allocations are never rejected client-side on this.
#[must_use]
pub fn skills_overlap(employee_skills: &str, required_skills: &str) -> bool {
    let employee = employee_skills.to_lowercase();
    let required = required_skills.to_lowercase();
    employee.contains(&required) || required.contains(&employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("python", "python, sql", true ; "employee_in_required")]
    #[test_case("python, sql", "python", true ; "required_in_employee")]
    #[test_case("Python", "PYTHON", true ; "case_insensitive")]
    #[test_case("python", "java", false ; "disjoint")]
    #[test_case("rust", "trusted", true ; "plain_substring")]
    #[test_case("", "java", true ; "empty_is_substring")]
    fn test_skills_overlap(employee: &str, required: &str, expected: bool) {
        assert_eq!(skills_overlap(employee, required), expected);
    }
}
