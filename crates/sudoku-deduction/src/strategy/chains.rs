//! Simple colouring (single chains).

use super::Scope;
use crate::action::Action;
use crate::chain::{Chain, Color};
use crate::error::Error;
use crate::field::{Field, GroupKind};
use crate::position::CellPosition;
use crate::rng::SimpleRng;

/// Simple colouring, rule 4: for each digit, link up every conjugate
/// pair (a group with exactly two homes left for the digit) into a
/// two-coloured chain. One colour class of each component is the true
/// one, so a candidate cell outside the component that sees both
/// colours can never hold the digit.
///
/// A chain that cannot be two-coloured means the board state is
/// contradictory; the error surfaces and no repair is attempted.
pub fn single_chains(
    field: &Field,
    _scope: &Scope,
    _rng: &mut SimpleRng,
) -> Result<Vec<Action>, Error> {
    let mut actions = Vec::new();
    for digit in 1..=9u8 {
        let mut chain: Chain<usize> = Chain::new();
        for kind in GroupKind::ALL {
            for idx in 0..9 {
                let homes: Vec<usize> = field
                    .get_group(kind, idx)
                    .into_iter()
                    .filter(|cell| cell.hopeful().contains(digit))
                    .map(|cell| cell.position().as_int())
                    .collect();
                if let [a, b] = homes[..] {
                    chain.add_pair(a, b)?;
                }
            }
        }
        if chain.members().is_empty() {
            continue;
        }
        log::trace!(
            "digit {}: {} conjugate cells across {} subchains",
            digit,
            chain.members().len(),
            chain.subchains().count()
        );

        let candidates: Vec<usize> = field
            .cells()
            .iter()
            .filter(|cell| cell.hopeful().contains(digit))
            .map(|cell| cell.position().as_int())
            .collect();

        for subchain in chain.subchains() {
            for &candidate in &candidates {
                if subchain.members().contains(&candidate) {
                    continue;
                }
                let position = CellPosition::from_int(candidate);
                let mut sees_a = false;
                let mut sees_b = false;
                for member in subchain.members() {
                    if !position.sees(CellPosition::from_int(*member)) {
                        continue;
                    }
                    match subchain.color_of(member) {
                        Some(Color::A) => sees_a = true,
                        Some(Color::B) => sees_b = true,
                        None => {}
                    }
                    if sees_a && sees_b {
                        break;
                    }
                }
                if sees_a && sees_b {
                    actions.push(Action::remove(
                        digit,
                        candidate,
                        format!(
                            "single chain rule 4: {} at {} sees both colours of a conjugate chain",
                            digit, position
                        ),
                    ));
                }
            }
        }
    }
    Ok(actions)
}
