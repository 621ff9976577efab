//! Board coordinates.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::GroupKind;

/// A coordinate on the 9x9 board: `x` is the column, `y` the row.
///
/// Positions are interchangeable with linear indices 0..81 through
/// [`from_int`](CellPosition::from_int) / [`as_int`](CellPosition::as_int),
/// and order by that linear index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub x: u8,
    pub y: u8,
}

impl CellPosition {
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < 9 && y < 9, "position ({}, {}) off the board", x, y);
        CellPosition { x, y }
    }

    /// The position at linear index `9 * y + x`.
    pub fn from_int(index: usize) -> Self {
        CellPosition {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Linear index, the inverse of [`from_int`](CellPosition::from_int).
    pub fn as_int(&self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    pub fn row(&self) -> u8 {
        self.y
    }

    pub fn column(&self) -> u8 {
        self.x
    }

    /// Index of the 3x3 block, numbered left-to-right, top-to-bottom.
    pub fn block(&self) -> u8 {
        self.x / 3 + 3 * (self.y / 3)
    }

    /// The row/column/block index of this position for a group kind.
    pub fn index_in(&self, kind: GroupKind) -> usize {
        match kind {
            GroupKind::Row => self.row() as usize,
            GroupKind::Column => self.column() as usize,
            GroupKind::Block => self.block() as usize,
        }
    }

    /// Two distinct cells see each other when they share a row, column,
    /// or block.
    pub fn sees(&self, other: CellPosition) -> bool {
        *self != other
            && (self.y == other.y || self.x == other.x || self.block() == other.block())
    }
}

impl Ord for CellPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_int().cmp(&other.as_int())
    }
}

impl PartialOrd for CellPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Debug for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
