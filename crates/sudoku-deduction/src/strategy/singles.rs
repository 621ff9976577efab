//! The entry-level strategies: naked singles, hidden singles, and
//! elimination against already placed values.

use std::collections::HashMap;

use super::{visit_groups, CellView, Scope};
use crate::action::Action;
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::rng::SimpleRng;

/// Naked singles: a cell whose hopeful set has shrunk to one digit
/// takes that digit.
pub fn solved(field: &Field, scope: &Scope, rng: &mut SimpleRng) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &GroupKind::ALL,
        |_kind, group, actions| {
            actions.extend(solved_in_group(group));
        },
    ))
}

/// The naked-single check over one group.
pub fn solved_in_group<C: CellView>(group: &[C]) -> Vec<Action> {
    let mut actions = Vec::new();
    for member in group {
        if let Some(digit) = member.hopeful().sole() {
            actions.push(Action::set(
                digit,
                member.position().as_int(),
                format!("solved cell {} found at {}", digit, member.position()),
            ));
        }
    }
    actions
}

/// Hidden singles: a digit with exactly one home left in a group goes
/// there.
pub fn singles(field: &Field, scope: &Scope, rng: &mut SimpleRng) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &GroupKind::ALL,
        |kind, group, actions| {
            actions.extend(singles_in_group(kind, group));
        },
    ))
}

/// The hidden-single check over one group.
pub fn singles_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let mut homes: HashMap<u8, Vec<&C>> = HashMap::new();
    for member in group {
        for digit in member.hopeful() {
            homes.entry(digit).or_default().push(member);
        }
    }

    let mut actions = Vec::new();
    for (digit, members) in homes {
        if members.len() > 1 {
            continue;
        }
        let member = members[0];
        actions.push(Action::set(
            digit,
            member.position().as_int(),
            format!(
                "single {} found in {} at {}",
                digit,
                kind,
                member.position()
            ),
        ));
    }
    actions
}

/// Elimination against placed values: a value somewhere in a group
/// rules its digit out everywhere else in the group.
pub fn show_possibles(
    field: &Field,
    scope: &Scope,
    rng: &mut SimpleRng,
) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &GroupKind::ALL,
        |kind, group, actions| {
            actions.extend(show_possibles_in_group(kind, group));
        },
    ))
}

/// The placed-value elimination over one group.
pub fn show_possibles_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let mut actions = Vec::new();
    for member in group {
        if member.value() == 0 {
            continue;
        }
        for other in group {
            if other.position() == member.position() {
                continue;
            }
            if other.hopeful().contains(member.value()) {
                actions.push(Action::remove(
                    member.value(),
                    other.position().as_int(),
                    format!(
                        "value {} is present in the same {} at {}",
                        member.value(),
                        kind,
                        member.position()
                    ),
                ));
            }
        }
    }
    actions
}
