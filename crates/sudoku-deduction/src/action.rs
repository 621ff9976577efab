//! Proposed changes to a field.

use serde::{Deserialize, Serialize};

/// What kind of change an action proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    RemoveCandidate,
    SetValue,
}

/// An atomic, independently sound deduction: remove a candidate from a
/// cell or place a value in it.
///
/// `cell` is the linear index into the field, which keeps actions
/// serializable and free of borrows; [`Field::apply`](crate::Field::apply)
/// resolves it. `reason` names the strategy, the matched pattern, and
/// the participating positions so logs stay diagnosable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub digit: u8,
    pub cell: usize,
    pub reason: String,
}

impl Action {
    pub fn remove(digit: u8, cell: usize, reason: String) -> Self {
        Action {
            kind: ActionKind::RemoveCandidate,
            digit,
            cell,
            reason,
        }
    }

    pub fn set(digit: u8, cell: usize, reason: String) -> Self {
        Action {
            kind: ActionKind::SetValue,
            digit,
            cell,
            reason,
        }
    }
}
