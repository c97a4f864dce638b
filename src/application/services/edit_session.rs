//! Per-kind edit target: "not editing" or "editing record #N".

use crate::domain::entities::{EntityKind, RecordId};

/// Tracks which record, if any, the form is editing.
///
/// Entered by [`EditSession::enter`] and left only by
/// [`EditSession::finish`] after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    kind: EntityKind,
    target: Option<RecordId>,
}

impl EditSession {
    /// Starts out not editing.
    #[must_use]
    pub const fn new(kind: EntityKind) -> Self {
        Self { kind, target: None }
    }

    /// Marks `id` as the record being edited.
    pub fn enter(&mut self, id: RecordId) {
        self.target = Some(id);
    }

    /// Leaves edit mode.
    pub fn finish(&mut self) {
        self.target = None;
    }

    /// Returns the record being edited.
    #[must_use]
    pub const fn target(&self) -> Option<RecordId> {
        self.target
    }

    /// Whether a record is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Label of the submit control for the current state.
    #[must_use]
    pub fn submit_label(&self) -> String {
        let verb = match (self.target, self.kind) {
            (Some(_), _) => "Update",
            (None, EntityKind::Allocation) => "Create",
            (None, EntityKind::Employee | EntityKind::Project) => "Add",
        };
        format!("{verb} {}", self.kind.title())
    }
}
