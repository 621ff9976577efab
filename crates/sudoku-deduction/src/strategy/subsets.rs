//! Locked-set strategies: naked and hidden pairs and triples.

use std::collections::{BTreeSet, HashMap};

use super::{visit_groups, CellView, Scope};
use crate::action::Action;
use crate::digit_set::DigitSet;
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::position::CellPosition;
use crate::rng::SimpleRng;

/// Naked pairs: two cells of a group sharing the same two candidates
/// claim those digits for themselves.
pub fn naked_pairs(field: &Field, scope: &Scope, rng: &mut SimpleRng) -> Result<Vec<Action>, Error> {
    Ok(visit_groups(
        field,
        scope,
        rng,
        &GroupKind::ALL,
        |kind, group, actions| {
            actions.extend(naked_pairs_in_group(kind, group));
        },
    ))
}

/// The naked-pair check over one group.
pub fn naked_pairs_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let mut pairs: HashMap<DigitSet, Vec<&C>> = HashMap::new();
    for member in group {
        if member.hopeful().len() == 2 {
            pairs.entry(member.hopeful()).or_default().push(member);
        }
    }

    let mut actions = Vec::new();
    for (pair, owners) in &pairs {
        if owners.len() != 2 {
            continue;
        }
        let owner_positions: Vec<CellPosition> =
            owners.iter().map(|owner| owner.position()).collect();
        for member in group {
            if owner_positions.contains(&member.position()) {
                continue;
            }
            for digit in *pair {
                if member.hopeful().contains(digit) {
                    actions.push(Action::remove(
                        digit,
                        member.position().as_int(),
                        format!(
                            "naked pair in same {} {:?} on {:?}",
                            kind, pair, owner_positions
                        ),
                    ));
                }
            }
        }
    }
    actions
}

/// Naked triples: three cells whose candidates fit inside one
/// three-digit set claim those digits. A two-candidate cell joins every
/// triple that covers it.
pub fn naked_triples(
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
            actions.extend(naked_triples_in_group(kind, group));
        },
    ))
}

/// The naked-triple check over one group.
pub fn naked_triples_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let mut triples: HashMap<DigitSet, Vec<&C>> = HashMap::new();
    for member in group {
        let hopeful = member.hopeful();
        if hopeful.len() == 3 {
            triples.entry(hopeful).or_default().push(member);
        }
        if hopeful.len() == 2 {
            for missing in DigitSet::FULL.without(hopeful) {
                triples.entry(hopeful.with(missing)).or_default().push(member);
            }
        }
    }

    let mut actions = Vec::new();
    for (triple, owners) in &triples {
        if owners.len() != 3 {
            continue;
        }
        let owner_positions: Vec<CellPosition> =
            owners.iter().map(|owner| owner.position()).collect();
        for member in group {
            if owner_positions.contains(&member.position()) {
                continue;
            }
            for digit in *triple {
                if member.hopeful().contains(digit) {
                    actions.push(Action::remove(
                        digit,
                        member.position().as_int(),
                        format!(
                            "naked triple in same {} {:?} on {:?}",
                            kind, triple, owner_positions
                        ),
                    ));
                }
            }
        }
    }
    actions
}

/// Hidden pairs: two digits confined to the same two cells of a group
/// clear every other candidate from those cells.
pub fn hidden_pairs(
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
            actions.extend(hidden_pairs_in_group(kind, group));
        },
    ))
}

/// The hidden-pair check over one group.
pub fn hidden_pairs_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let homes = confined_homes(group, 2);
    let digits: Vec<u8> = sorted_keys(&homes);

    let mut actions = Vec::new();
    let mut used = vec![false; digits.len()];
    for i in 0..digits.len() {
        if used[i] {
            continue;
        }
        for j in (i + 1)..digits.len() {
            if used[j] || homes[&digits[i]] != homes[&digits[j]] {
                continue;
            }
            used[i] = true;
            used[j] = true;
            let pair: DigitSet = [digits[i], digits[j]].into_iter().collect();
            let home = &homes[&digits[i]];
            let home_positions: Vec<CellPosition> =
                home.iter().map(|&cell| CellPosition::from_int(cell)).collect();
            for member in group {
                if !home.contains(&member.position().as_int()) {
                    continue;
                }
                for digit in member.hopeful().without(pair) {
                    actions.push(Action::remove(
                        digit,
                        member.position().as_int(),
                        format!(
                            "hidden pair in same {} {:?} on {:?}",
                            kind, pair, home_positions
                        ),
                    ));
                }
            }
            break;
        }
    }
    actions
}

/// Hidden triples: three digits whose homes together span at most three
/// cells clear every other candidate from those cells.
pub fn hidden_triples(
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
            actions.extend(hidden_triples_in_group(kind, group));
        },
    ))
}

/// The hidden-triple check over one group.
pub fn hidden_triples_in_group<C: CellView>(kind: GroupKind, group: &[C]) -> Vec<Action> {
    let homes = confined_homes(group, 3);
    let digits: Vec<u8> = sorted_keys(&homes);

    let mut actions = Vec::new();
    for i in 0..digits.len() {
        for j in (i + 1)..digits.len() {
            for k in (j + 1)..digits.len() {
                let triple: DigitSet = [digits[i], digits[j], digits[k]].into_iter().collect();
                let mut cells_of_triple: BTreeSet<usize> = BTreeSet::new();
                for digit in triple {
                    cells_of_triple.extend(homes[&digit].iter().copied());
                }
                if cells_of_triple.len() > 3 {
                    continue;
                }
                let home_positions: Vec<CellPosition> = cells_of_triple
                    .iter()
                    .map(|&cell| CellPosition::from_int(cell))
                    .collect();
                for member in group {
                    if !cells_of_triple.contains(&member.position().as_int()) {
                        continue;
                    }
                    for digit in member.hopeful().without(triple) {
                        actions.push(Action::remove(
                            digit,
                            member.position().as_int(),
                            format!(
                                "hidden triple in same {} {:?} on {:?}",
                                kind, triple, home_positions
                            ),
                        ));
                    }
                }
            }
        }
    }
    actions
}

/// Map each digit to the cells of the group that still admit it,
/// dropping digits with more homes than `limit`.
fn confined_homes<C: CellView>(group: &[C], limit: usize) -> HashMap<u8, BTreeSet<usize>> {
    let mut homes: HashMap<u8, BTreeSet<usize>> = HashMap::new();
    for member in group {
        for digit in member.hopeful() {
            homes.entry(digit).or_default().insert(member.position().as_int());
        }
    }
    homes.retain(|_, cells| cells.len() <= limit);
    homes
}

fn sorted_keys(homes: &HashMap<u8, BTreeSet<usize>>) -> Vec<u8> {
    let mut digits: Vec<u8> = homes.keys().copied().collect();
    digits.sort_unstable();
    digits
}
