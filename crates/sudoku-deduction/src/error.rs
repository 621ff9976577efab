//! Crate-wide error type.

use thiserror::Error;

use crate::field::GroupKind;
use crate::position::CellPosition;

#[derive(Debug, Error)]
pub enum Error {
    /// Board strings and snapshots must describe exactly 81 cells.
    #[error("expected exactly 81 {what}, found {found}")]
    InvalidInput { what: &'static str, found: usize },

    /// A snapshot record whose position or value falls outside the board.
    #[error("snapshot record for position {position} is out of range")]
    InvalidRecord { position: usize },

    /// A value assignment the cell's candidate state forbids.
    #[error("cell {position} cannot take {digit}")]
    InvalidAssignment { position: CellPosition, digit: u8 },

    /// A chain merge that would assign both colours to one member.
    #[error("chain merge would assign both colours to a member")]
    ChainInconsistency,

    /// A strategy invoked with a group kind it does not support.
    #[error("{strategy} cannot run over {kind} groups")]
    StrategyArgument {
        strategy: &'static str,
        kind: GroupKind,
    },

    /// A snapshot record that does not parse as JSON.
    #[error("malformed snapshot record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
