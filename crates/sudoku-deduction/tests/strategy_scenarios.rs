//! Strategy scenarios on full boards, driven through snapshot fixtures.
//!
//! The fixtures sculpt exact candidate states via `Field::restore`, the
//! same route a saved board would take. Assertions compare sets of
//! (cell, digit) pairs because strategy emission order is shuffled.

use std::collections::BTreeSet;

use sudoku_deduction::strategy::{
    all_solvers, box_line_reduction, pointing_pairs, single_chains, x_wing, Scope,
};
use sudoku_deduction::{Action, ActionKind, CellPosition, Field, GroupKind, SimpleRng};

/// Build a board with no values and a chosen hopeful set per cell:
/// `overrides` wins, everything else gets `default`.
fn field_with_candidates(default: &[u8], overrides: &[(usize, &[u8])]) -> Field {
    let mut hopeful: Vec<Vec<u8>> = vec![default.to_vec(); 81];
    for (position, digits) in overrides {
        hopeful[*position] = digits.to_vec();
    }
    let lines: Vec<String> = (0..81)
        .map(|position| {
            serde_json::json!({
                "value": 0,
                "position": position,
                "hopeful": hopeful[position],
            })
            .to_string()
        })
        .collect();
    let mut field = Field::from_string(&"0".repeat(81)).unwrap();
    field.restore(&lines.join("\n")).unwrap();
    field
}

fn targets(actions: &[Action]) -> BTreeSet<(usize, u8)> {
    actions.iter().map(|a| (a.cell, a.digit)).collect()
}

fn index(x: u8, y: u8) -> usize {
    CellPosition::new(x, y).as_int()
}

#[test]
fn test_pointing_pair_clears_the_rest_of_the_line() {
    // In block 0, digit 2 fits only in the top row; digits 4..9 spread
    // over at least two rows and two columns each.
    let field = field_with_candidates(
        &[1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[
            (index(0, 0), &[2, 4, 5]),
            (index(1, 0), &[2, 4, 6]),
            (index(2, 0), &[2, 5, 6]),
            (index(0, 1), &[4, 7, 8]),
            (index(1, 1), &[7, 8, 9]),
            (index(2, 1), &[4, 8, 9]),
            (index(0, 2), &[5, 7, 9]),
            (index(1, 2), &[5, 6, 7]),
            (index(2, 2), &[6, 8, 9]),
            // The rest of row 0: three cells still hoping for 2, three not.
            (index(3, 0), &[1, 2, 3]),
            (index(4, 0), &[2, 3, 9]),
            (index(5, 0), &[1, 2, 9]),
            (index(6, 0), &[1, 3, 9]),
            (index(7, 0), &[3, 9]),
            (index(8, 0), &[1, 3]),
        ],
    );

    let mut rng = SimpleRng::with_seed(11);
    let scope = Scope::all().with_index(0);
    let actions = pointing_pairs(&field, &scope, &mut rng).unwrap();

    assert_eq!(actions.len(), 3, "expected exactly three removals");
    assert_eq!(
        targets(&actions),
        [
            (index(3, 0), 2),
            (index(4, 0), 2),
            (index(5, 0), 2),
        ]
        .into_iter()
        .collect()
    );
    for action in &actions {
        assert_eq!(action.kind, ActionKind::RemoveCandidate);
        assert!(action.reason.contains("pointing pair 2 in same row"));
    }
}

#[test]
fn test_box_line_reduction_clears_the_rest_of_the_block() {
    // In row 4, digit 6 fits only inside block 3; two other block-3
    // cells still hope for 6 and must lose it.
    let field = field_with_candidates(
        &[1, 2, 3],
        &[
            (index(0, 4), &[1, 2, 6]),
            (index(1, 4), &[2, 3, 6]),
            (index(2, 4), &[1, 3, 6]),
            (index(0, 3), &[1, 6]),
            (index(1, 3), &[1, 2]),
            (index(2, 3), &[2, 3]),
            (index(0, 5), &[1, 3]),
            (index(1, 5), &[2, 6]),
            (index(2, 5), &[1, 2]),
        ],
    );

    let mut rng = SimpleRng::with_seed(3);
    let scope = Scope::of(GroupKind::Row).with_index(4);
    let actions = box_line_reduction(&field, &scope, &mut rng).unwrap();

    assert_eq!(
        targets(&actions),
        [(index(0, 3), 6), (index(1, 5), 6)].into_iter().collect()
    );
    for action in &actions {
        assert!(action.reason.contains("box reduction 6 only in block 3"));
    }
}

#[test]
fn test_x_wing_spares_the_corners() {
    // Digit 7 sits at columns 2 and 6 in rows 1 and 4 (the corners) and
    // at six more cells spread over those two columns.
    let seven = &[1, 2, 7][..];
    let field = field_with_candidates(
        &[1, 2, 3],
        &[
            (index(2, 1), seven),
            (index(6, 1), seven),
            (index(2, 4), seven),
            (index(6, 4), seven),
            (index(2, 0), seven),
            (index(2, 3), seven),
            (index(2, 5), seven),
            (index(6, 2), seven),
            (index(6, 6), seven),
            (index(6, 8), seven),
        ],
    );

    let mut rng = SimpleRng::with_seed(5);
    let actions = x_wing(&field, &Scope::all(), &mut rng).unwrap();

    assert_eq!(actions.len(), 6, "expected exactly six removals");
    assert!(actions.iter().all(|a| a.digit == 7));
    assert_eq!(
        targets(&actions),
        [
            (index(2, 0), 7),
            (index(2, 3), 7),
            (index(2, 5), 7),
            (index(6, 2), 7),
            (index(6, 6), 7),
            (index(6, 8), 7),
        ]
        .into_iter()
        .collect()
    );
}

#[test]
fn test_single_chain_elimination_for_a_cell_seeing_both_colours() {
    // Conjugate pairs for 5: row 0 {(0,0), (6,0)}, block 2 {(6,0), (8,2)},
    // column 8 {(8,2), (8,6)}. The chain colours (0,0)/(8,2) opposite to
    // (6,0)/(8,6). Cell (0,6) sees (0,0) down column 0 and (8,6) along
    // row 6 — both colours — so it loses 5. The two other bystander
    // candidates each see only one colour.
    let five = &[1, 2, 3, 5][..];
    let field = field_with_candidates(
        &[1, 2, 3],
        &[
            (index(0, 0), five),
            (index(6, 0), five),
            (index(8, 2), five),
            (index(8, 6), five),
            (index(0, 3), five),
            (index(0, 6), five),
            (index(4, 6), five),
        ],
    );

    let mut rng = SimpleRng::with_seed(9);
    let actions = single_chains(&field, &Scope::all(), &mut rng).unwrap();

    assert_eq!(
        targets(&actions),
        [(index(0, 6), 5)].into_iter().collect()
    );
    assert!(actions[0].reason.contains("single chain rule 4"));
}

#[test]
fn test_full_roster_runs_on_a_fresh_board() {
    // A blank board admits no deduction beyond the trivial none; every
    // strategy must still run cleanly through the shared driver.
    let field = Field::from_string(&"0".repeat(81)).unwrap();
    let mut rng = SimpleRng::with_seed(1);
    for solver in all_solvers() {
        let actions = solver(&field, &Scope::all(), &mut rng).unwrap();
        assert!(
            actions.is_empty(),
            "no strategy should deduce anything from a blank board"
        );
    }
}
