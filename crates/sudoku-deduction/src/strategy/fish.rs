//! The fish strategy: X-Wing over rows or columns.

use std::collections::HashMap;

use super::Scope;
use crate::action::Action;
use crate::cell::Cell;
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::position::CellPosition;
use crate::rng::SimpleRng;

/// X-Wing: when a digit is restricted to the same two columns in
/// exactly two rows, those columns can hold the digit nowhere else (and
/// symmetrically with rows and columns swapped). Only row and column
/// scopes are meaningful; a block scope is an argument error.
pub fn x_wing(field: &Field, scope: &Scope, rng: &mut SimpleRng) -> Result<Vec<Action>, Error> {
    let mut axes = scope.effective_kinds(&[GroupKind::Row, GroupKind::Column]);
    if let Some(&kind) = axes.iter().find(|&&kind| kind == GroupKind::Block) {
        return Err(Error::StrategyArgument {
            strategy: "x_wing",
            kind,
        });
    }
    rng.shuffle(&mut axes);

    let mut actions = Vec::new();
    for axis in axes {
        x_wing_on_axis(field, axis, &mut actions);
    }
    Ok(actions)
}

fn x_wing_on_axis(field: &Field, axis: GroupKind, actions: &mut Vec<Action>) {
    let cross = match axis {
        GroupKind::Row => GroupKind::Column,
        _ => GroupKind::Row,
    };
    let groups = field.groups(axis);

    // digit -> sorted cross-axis coordinates -> base group -> its cells
    #[allow(clippy::type_complexity)]
    let mut patterns: HashMap<u8, HashMap<Vec<usize>, HashMap<usize, Vec<&Cell>>>> =
        HashMap::new();
    for (group_idx, group) in groups.iter().enumerate() {
        for digit in 1..=9u8 {
            let members: Vec<&Cell> = group
                .iter()
                .filter(|cell| cell.hopeful().contains(digit))
                .copied()
                .collect();
            if members.is_empty() {
                continue;
            }
            let mut coords: Vec<usize> = members
                .iter()
                .map(|member| member.position().index_in(cross))
                .collect();
            coords.sort_unstable();
            patterns
                .entry(digit)
                .or_default()
                .entry(coords)
                .or_default()
                .insert(group_idx, members);
        }
    }

    for (digit, tuples) in &patterns {
        for (coords, base_groups) in tuples {
            // Two base lines sharing the same two cover coordinates.
            if coords.len() != 2 || base_groups.len() != 2 {
                continue;
            }
            let mut corners: Vec<CellPosition> = base_groups
                .values()
                .flatten()
                .map(|cell| cell.position())
                .collect();
            corners.sort_unstable();
            for &coord in coords {
                for cell in field.get_group(cross, coord) {
                    if corners.contains(&cell.position()) {
                        continue;
                    }
                    if !cell.hopeful().contains(*digit) {
                        continue;
                    }
                    actions.push(Action::remove(
                        *digit,
                        cell.position().as_int(),
                        format!(
                            "X-Wing {:?}, {} cannot occur in another cell of this {}",
                            corners, digit, cross
                        ),
                    ));
                }
            }
        }
    }
}
