//! The board: 81 cells, group views, action application, persistence.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind};
use crate::cell::Cell;
use crate::digit_set::DigitSet;
use crate::error::Error;
use crate::position::CellPosition;

/// The three group families a board decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Row,
    Column,
    Block,
}

impl GroupKind {
    /// All three kinds, in the fixed row/column/block order.
    pub const ALL: [GroupKind; 3] = [GroupKind::Row, GroupKind::Column, GroupKind::Block];
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Row => write!(f, "row"),
            GroupKind::Column => write!(f, "column"),
            GroupKind::Block => write!(f, "block"),
        }
    }
}

/// One snapshot line: the persisted state of a single cell.
#[derive(Debug, Serialize, Deserialize)]
struct CellRecord {
    value: u8,
    position: usize,
    hopeful: Vec<u8>,
}

/// An ordered collection of 81 cells.
#[derive(Debug, Clone)]
pub struct Field {
    cells: Vec<Cell>,
}

impl Field {
    /// Build a field from any string. Characters other than ASCII digits
    /// are skipped; the first 81 digits fill the board in linear order
    /// and later digits are ignored. Fewer than 81 digits is an error.
    pub fn from_string(board: &str) -> Result<Self, Error> {
        let digits: Vec<u8> = board
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .take(81)
            .collect();
        if digits.len() < 81 {
            return Err(Error::InvalidInput {
                what: "board digits",
                found: digits.len(),
            });
        }
        let cells = digits
            .into_iter()
            .enumerate()
            .map(|(index, value)| Cell::new(value, CellPosition::from_int(index)))
            .collect();
        Ok(Field { cells })
    }

    /// All 81 cells in linear position order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at a linear index.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn get_cell(&self, x: u8, y: u8) -> &Cell {
        &self.cells[CellPosition::new(x, y).as_int()]
    }

    /// Place a value through the cell's guarded setter.
    pub fn set_cell(&mut self, x: u8, y: u8, digit: u8) -> Result<(), Error> {
        self.cells[CellPosition::new(x, y).as_int()].set_value(digit)
    }

    /// The 9 cells whose position falls in group `idx` of `kind`.
    pub fn get_group(&self, kind: GroupKind, idx: usize) -> Vec<&Cell> {
        self.cells
            .iter()
            .filter(|cell| cell.position().index_in(kind) == idx)
            .collect()
    }

    /// All 9 groups of one kind, indexed 0..=8.
    pub fn groups(&self, kind: GroupKind) -> Vec<Vec<&Cell>> {
        (0..9).map(|idx| self.get_group(kind, idx)).collect()
    }

    /// Apply a proposed action.
    pub fn apply(&mut self, action: &Action) -> Result<(), Error> {
        log::debug!(
            "apply {:?} {} at cell {}: {}",
            action.kind,
            action.digit,
            action.cell,
            action.reason
        );
        let cell = &mut self.cells[action.cell];
        match action.kind {
            ActionKind::RemoveCandidate => {
                cell.eliminate(action.digit, &action.reason);
                Ok(())
            }
            ActionKind::SetValue => cell.set_value(action.digit),
        }
    }

    /// Serialize the board as one JSON record per cell.
    pub fn snapshot(&self) -> Result<String, Error> {
        let mut lines = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            let record = CellRecord {
                value: cell.value(),
                position: cell.position().as_int(),
                hopeful: cell.hopeful().to_vec(),
            };
            lines.push(serde_json::to_string(&record)?);
        }
        Ok(lines.join("\n"))
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.snapshot()?)?;
        Ok(())
    }

    /// Restore value and candidate state from a snapshot. Records match
    /// cells by position, in any order. Values are set directly (a
    /// snapshot is trusted over the assignment preconditions), `hopeful`
    /// becomes the loaded set clipped to 1..=9, and `futile` resets.
    pub fn restore(&mut self, snapshot: &str) -> Result<(), Error> {
        let mut records: HashMap<usize, CellRecord> = HashMap::new();
        for line in snapshot.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let record: CellRecord = serde_json::from_str(line)?;
            if record.position >= 81 || record.value > 9 {
                return Err(Error::InvalidRecord {
                    position: record.position,
                });
            }
            records.insert(record.position, record);
        }
        if records.len() != 81 {
            return Err(Error::InvalidInput {
                what: "snapshot records",
                found: records.len(),
            });
        }
        for cell in &mut self.cells {
            // 81 distinct in-range positions form a bijection with the cells.
            let record = &records[&cell.position().as_int()];
            let hopeful: DigitSet = record
                .hopeful
                .iter()
                .copied()
                .filter(|digit| (1..=9).contains(digit))
                .collect();
            cell.restore_state(record.value, hopeful);
        }
        Ok(())
    }

    pub fn load(&mut self, path: &Path) -> Result<(), Error> {
        let text = fs::read_to_string(path)?;
        self.restore(&text)
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(board: &str) -> Result<Self, Error> {
        Field::from_string(board)
    }
}

/// Debug rendering: values in a grid with heavy separators at block
/// boundaries. Not part of any interchange format.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for x in 0..9 {
                if x % 3 == 0 {
                    write!(f, "| ")?;
                }
                write!(f, "{} ", self.get_cell(x, y).value())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
