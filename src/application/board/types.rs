use crate::domain::form::FormField;

/// Result of fetching the post list. Failures are already logged by the
/// board; callers only need this for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Replaced { count: usize },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated { id: String },
    /// Nothing was sent: a required field is blank.
    MissingField(FormField),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Pure local transition, no network involved.
    Local,
    Refresh(RefreshOutcome),
    Submit(SubmitOutcome),
    Remove(RemoveOutcome),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created | SubmitOutcome::Updated { .. })
    }
}
