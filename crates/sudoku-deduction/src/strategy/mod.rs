//! Human-style deduction strategies.
//!
//! Every strategy reads a [`Field`] and proposes [`Action`]s; none of
//! them mutates the board, and each emitted action is independently
//! sound against the board state it was derived from. Group visiting
//! order is shuffled through the injected [`SimpleRng`], so callers
//! must not rely on emission order.

mod chains;
mod fish;
mod intersections;
mod singles;
mod subsets;

pub use chains::single_chains;
pub use fish::x_wing;
pub use intersections::{box_line_reduction, pointing_pairs};
pub use singles::{
    show_possibles, show_possibles_in_group, singles, singles_in_group, solved, solved_in_group,
};
pub use subsets::{
    hidden_pairs, hidden_pairs_in_group, hidden_triples, hidden_triples_in_group, naked_pairs,
    naked_pairs_in_group, naked_triples, naked_triples_in_group,
};

use crate::action::Action;
use crate::cell::Cell;
use crate::digit_set::DigitSet;
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::position::CellPosition;
use crate::rng::SimpleRng;

/// The capability a strategy needs from a group member: where it is,
/// what it holds, and what it still hopes for. Implemented by [`Cell`];
/// tests drive the per-group strategy bodies with lightweight stand-ins.
pub trait CellView {
    fn position(&self) -> CellPosition;
    fn value(&self) -> u8;
    fn hopeful(&self) -> DigitSet;
}

impl CellView for Cell {
    fn position(&self) -> CellPosition {
        Cell::position(self)
    }

    fn value(&self) -> u8 {
        Cell::value(self)
    }

    fn hopeful(&self) -> DigitSet {
        Cell::hopeful(self)
    }
}

impl<C: CellView> CellView for &C {
    fn position(&self) -> CellPosition {
        (*self).position()
    }

    fn value(&self) -> u8 {
        (*self).value()
    }

    fn hopeful(&self) -> DigitSet {
        (*self).hopeful()
    }
}

/// Restricts which groups a strategy visits. An unset kind or index
/// list falls back to the strategy's own default (all the kinds it
/// supports, indices 0..=8).
#[derive(Debug, Clone, Default)]
pub struct Scope {
    kinds: Option<Vec<GroupKind>>,
    indices: Option<Vec<usize>>,
}

impl Scope {
    /// Visit every group the strategy supports.
    pub fn all() -> Self {
        Scope::default()
    }

    /// Visit only groups of one kind.
    pub fn of(kind: GroupKind) -> Self {
        Scope {
            kinds: Some(vec![kind]),
            indices: None,
        }
    }

    pub fn with_kinds(mut self, kinds: &[GroupKind]) -> Self {
        self.kinds = Some(kinds.to_vec());
        self
    }

    pub fn with_index(mut self, idx: usize) -> Self {
        self.indices = Some(vec![idx]);
        self
    }

    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices = Some(indices.to_vec());
        self
    }

    pub(crate) fn effective_kinds(&self, default: &[GroupKind]) -> Vec<GroupKind> {
        self.kinds.clone().unwrap_or_else(|| default.to_vec())
    }

    pub(crate) fn effective_indices(&self) -> Vec<usize> {
        self.indices.clone().unwrap_or_else(|| (0..9).collect())
    }
}

/// Uniform strategy signature, for building driver tables.
pub type StrategyFn = fn(&Field, &Scope, &mut SimpleRng) -> Result<Vec<Action>, Error>;

/// The strategy roster paired with ascending difficulty weights, in the
/// order a driver typically runs it.
pub fn weighted_solvers() -> Vec<(u32, StrategyFn)> {
    vec![
        (0, solved as StrategyFn),
        (1, show_possibles),
        (2, singles),
        (3, naked_pairs),
        (4, naked_triples),
        (5, hidden_pairs),
        (6, hidden_triples),
        (7, pointing_pairs),
        (8, box_line_reduction),
        (9, x_wing),
        (10, single_chains),
    ]
}

/// The roster sorted by weight.
pub fn all_solvers() -> Vec<StrategyFn> {
    let mut weighted = weighted_solvers();
    weighted.sort_by_key(|(weight, _)| *weight);
    weighted.into_iter().map(|(_, solver)| solver).collect()
}

/// Shared group-visit driver: resolve the scope against the strategy's
/// default kinds, shuffle the visit order, and run the body per group.
pub(crate) fn visit_groups(
    field: &Field,
    scope: &Scope,
    rng: &mut SimpleRng,
    default_kinds: &[GroupKind],
    mut body: impl FnMut(GroupKind, &[&Cell], &mut Vec<Action>),
) -> Vec<Action> {
    let mut kinds = scope.effective_kinds(default_kinds);
    let mut indices = scope.effective_indices();
    rng.shuffle(&mut kinds);
    rng.shuffle(&mut indices);

    let mut actions = Vec::new();
    for &kind in &kinds {
        for &idx in &indices {
            let group = field.get_group(kind, idx);
            body(kind, &group, &mut actions);
        }
    }
    actions
}
