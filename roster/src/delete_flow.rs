//! Two-step delete confirmation: pick a record, then confirm or cancel.

#[cfg(test)]
#[path = "delete_flow_test.rs"]
mod delete_flow_test;

use crate::model::EmployeeId;

/// Confirmation state for deleting a single employee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// A target was chosen; no request has been sent yet.
    Pending { target: EmployeeId },
}

/// How a confirmed delete request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

impl DeleteOutcome {
    /// Whether the listing must be refetched after this outcome.
    #[must_use]
    pub fn refetch(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Notification text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => "Employee deleted successfully",
            Self::Failed => "Failed to delete employee",
        }
    }
}

impl DeleteFlow {
    /// Ask for confirmation before deleting `target`.
    pub fn request(&mut self, target: EmployeeId) {
        *self = Self::Pending { target };
    }

    /// Dismiss the confirmation surface and forget the target.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn target(&self) -> Option<EmployeeId> {
        match self {
            Self::Idle => None,
            Self::Pending { target } => Some(*target),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Close out a confirmed delete. Always returns to idle, whatever the
    /// outcome, and hands the outcome back for follow-up.
    pub fn settle(&mut self, outcome: DeleteOutcome) -> DeleteOutcome {
        *self = Self::Idle;
        outcome
    }
}
