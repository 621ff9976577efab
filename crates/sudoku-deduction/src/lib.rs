//! Deduction core for a 9x9 Sudoku assistant.
//!
//! Given a partially filled board, the functions in [`strategy`]
//! propose atomic [`Action`]s — eliminate a candidate from a cell, or
//! place a value — each carrying a human-readable justification. The
//! board model ([`Field`], [`Cell`], [`CellPosition`], [`DigitSet`])
//! and the two-coloured [`chain::Chain`] behind simple colouring are
//! the shared substrates. A driver feeds accepted actions back through
//! [`Field::apply`] and may persist board snapshots with
//! [`Field::save`] / [`Field::load`].

mod action;
mod cell;
pub mod chain;
mod digit_set;
mod error;
mod field;
mod position;
mod rng;
pub mod strategy;

pub use action::{Action, ActionKind};
pub use cell::Cell;
pub use chain::{Chain, Color, SubChain};
pub use digit_set::DigitSet;
pub use error::Error;
pub use field::{Field, GroupKind};
pub use position::CellPosition;
pub use rng::SimpleRng;
