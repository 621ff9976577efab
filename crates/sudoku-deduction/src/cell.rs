//! A single board cell and its candidate state.

use std::cmp::Ordering;

use crate::digit_set::DigitSet;
use crate::error::Error;
use crate::position::CellPosition;

/// A cell: a placed value (0 = empty) plus the digits still considered
/// possible (`hopeful`) and the digits ruled out for good (`futile`).
///
/// Invariants: a valued cell has an empty hopeful set, and hopeful and
/// futile never intersect. Cells compare and order by board position.
#[derive(Debug, Clone)]
pub struct Cell {
    position: CellPosition,
    value: u8,
    hopeful: DigitSet,
    futile: DigitSet,
    debug: Vec<(u8, String)>,
}

impl Cell {
    /// A fresh cell starts with every digit hopeful, unless it already
    /// holds a value.
    pub fn new(value: u8, position: CellPosition) -> Self {
        Cell {
            position,
            value,
            hopeful: if value == 0 {
                DigitSet::FULL
            } else {
                DigitSet::EMPTY
            },
            futile: DigitSet::EMPTY,
            debug: Vec::new(),
        }
    }

    pub fn position(&self) -> CellPosition {
        self.position
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn hopeful(&self) -> DigitSet {
        self.hopeful
    }

    pub fn futile(&self) -> DigitSet {
        self.futile
    }

    /// The elimination log: (digit, reason) pairs, oldest first.
    pub fn debug_log(&self) -> &[(u8, String)] {
        &self.debug
    }

    /// Place a value. The digit must still be hopeful and not futile;
    /// placing clears the hopeful set.
    pub fn set_value(&mut self, digit: u8) -> Result<(), Error> {
        if !self.hopeful.contains(digit) || self.futile.contains(digit) {
            return Err(Error::InvalidAssignment {
                position: self.position,
                digit,
            });
        }
        self.value = digit;
        self.hopeful = DigitSet::EMPTY;
        Ok(())
    }

    /// Drop a candidate. A no-op on the set when the digit is already
    /// gone; the reason is logged either way.
    pub fn eliminate(&mut self, digit: u8, reason: &str) {
        self.hopeful.remove(digit);
        self.debug.push((digit, reason.to_owned()));
    }

    /// Record a permanent exclusion. No strategy in the current roster
    /// writes here; the set exists for strategies that prove a digit can
    /// never return.
    pub fn mark_futile(&mut self, digit: u8) {
        self.hopeful.remove(digit);
        self.futile.insert(digit);
    }

    /// Overwrite value and candidates from a snapshot record, bypassing
    /// the `set_value` preconditions. `futile` resets; the log is kept.
    pub(crate) fn restore_state(&mut self, value: u8, hopeful: DigitSet) {
        self.value = value;
        self.hopeful = hopeful;
        self.futile = DigitSet::EMPTY;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(index: usize) -> CellPosition {
        CellPosition::from_int(index)
    }

    #[test]
    fn test_new_empty_cell_hopes_for_everything() {
        let cell = Cell::new(0, pos(0));
        assert_eq!(cell.value(), 0);
        assert_eq!(cell.hopeful(), DigitSet::FULL);
        assert!(cell.futile().is_empty());
    }

    #[test]
    fn test_new_valued_cell_hopes_for_nothing() {
        let cell = Cell::new(5, pos(0));
        assert_eq!(cell.value(), 5);
        assert!(cell.hopeful().is_empty());
    }

    #[test]
    fn test_set_value_requires_hopeful_digit() {
        let mut cell = Cell::new(0, pos(3));
        cell.eliminate(4, "test");
        assert!(matches!(
            cell.set_value(4),
            Err(Error::InvalidAssignment { digit: 4, .. })
        ));

        cell.set_value(7).unwrap();
        assert_eq!(cell.value(), 7);
        assert!(cell.hopeful().is_empty());

        // Once placed, nothing is hopeful, so a second placement fails.
        assert!(cell.set_value(7).is_err());
    }

    #[test]
    fn test_set_value_rejects_futile_digit() {
        let mut cell = Cell::new(0, pos(3));
        cell.mark_futile(2);
        assert!(!cell.hopeful().contains(2));
        assert!(cell.futile().contains(2));
        assert!(cell.set_value(2).is_err());
    }

    #[test]
    fn test_eliminate_logs_and_is_idempotent() {
        let mut cell = Cell::new(0, pos(10));
        cell.eliminate(3, "first");
        cell.eliminate(3, "second");
        assert!(!cell.hopeful().contains(3));
        assert_eq!(cell.hopeful().len(), 8);
        assert_eq!(cell.debug_log().len(), 2);
        assert_eq!(cell.debug_log()[0], (3, "first".to_owned()));
    }

    #[test]
    fn test_cells_order_by_position() {
        let a = Cell::new(0, pos(8));
        let b = Cell::new(0, pos(9));
        assert!(a < b);
    }
}
