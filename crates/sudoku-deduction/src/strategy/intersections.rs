//! Intersection strategies: pointing pairs and box/line reduction.
//!
//! Both look at where a digit's remaining homes inside one group fall
//! and then reach into the intersecting group to prune; unlike the
//! locked-set strategies they need the whole field, not just one group.

use std::collections::HashMap;

use super::{visit_groups, Scope};
use crate::action::Action;
use crate::cell::Cell;
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::position::CellPosition;
use crate::rng::SimpleRng;

/// Pointing pairs: when a digit's homes within a block all share one
/// row or column, the digit cannot appear elsewhere on that line.
pub fn pointing_pairs(
    field: &Field,
    scope: &Scope,
    rng: &mut SimpleRng,
) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &[GroupKind::Block],
        |_kind, group, actions| {
            pointing_pairs_in_block(field, group, actions);
        },
    ))
}

fn pointing_pairs_in_block(field: &Field, group: &[&Cell], actions: &mut Vec<Action>) {
    let mut homes: HashMap<u8, Vec<&Cell>> = HashMap::new();
    for &member in group {
        for digit in member.hopeful() {
            homes.entry(digit).or_default().push(member);
        }
    }

    for (digit, members) in &homes {
        for line in [GroupKind::Row, GroupKind::Column] {
            let line_idx = members[0].position().index_in(line);
            if members
                .iter()
                .any(|member| member.position().index_in(line) != line_idx)
            {
                continue;
            }
            let member_positions: Vec<CellPosition> =
                members.iter().map(|member| member.position()).collect();
            for cell in field.get_group(line, line_idx) {
                if member_positions.contains(&cell.position()) {
                    continue;
                }
                if !cell.hopeful().contains(*digit) {
                    continue;
                }
                actions.push(Action::remove(
                    *digit,
                    cell.position().as_int(),
                    format!(
                        "pointing pair {} in same {} {:?}",
                        digit, line, member_positions
                    ),
                ));
            }
        }
    }
}

/// Box/line reduction: when a digit's homes within a row or column all
/// fall inside one block, the digit cannot appear elsewhere in that
/// block.
pub fn box_line_reduction(
    field: &Field,
    scope: &Scope,
    rng: &mut SimpleRng,
) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &[GroupKind::Row, GroupKind::Column],
        |_kind, group, actions| {
            box_line_reduction_in_line(field, group, actions);
        },
    ))
}

fn box_line_reduction_in_line(field: &Field, group: &[&Cell], actions: &mut Vec<Action>) {
    let mut homes: HashMap<u8, Vec<&Cell>> = HashMap::new();
    for &member in group {
        for digit in member.hopeful() {
            homes.entry(digit).or_default().push(member);
        }
    }

    for (digit, members) in &homes {
        let block = members[0].position().block();
        if members
            .iter()
            .any(|member| member.position().block() != block)
        {
            continue;
        }
        let member_positions: Vec<CellPosition> =
            members.iter().map(|member| member.position()).collect();
        for cell in field.get_group(GroupKind::Block, block as usize) {
            if member_positions.contains(&cell.position()) {
                continue;
            }
            if !cell.hopeful().contains(*digit) {
                continue;
            }
            actions.push(Action::remove(
                *digit,
                cell.position().as_int(),
                format!(
                    "box reduction {} only in block {} {:?}",
                    digit, block, member_positions
                ),
            ));
        }
    }
}
