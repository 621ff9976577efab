//! Snapshot persistence against real files.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use sudoku_deduction::{Action, Field};

const EASY: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("sudoku-deduction-{}-{}", process::id(), name))
}

#[test]
fn test_save_then_load_restores_values_and_candidates() {
    let mut field = Field::from_string(EASY).unwrap();
    // Shape a few candidate sets so the snapshot carries real state.
    field.apply(&Action::remove(1, 2, "fixture".into())).unwrap();
    field.apply(&Action::remove(2, 2, "fixture".into())).unwrap();
    field.apply(&Action::remove(9, 78, "fixture".into())).unwrap();

    let path = scratch_path("roundtrip.jsonl");
    field.save(&path).unwrap();

    let mut reloaded = Field::from_string(&"0".repeat(81)).unwrap();
    reloaded.load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    for index in 0..81 {
        assert_eq!(
            reloaded.cell(index).value(),
            field.cell(index).value(),
            "value mismatch at {}",
            index
        );
        assert_eq!(
            reloaded.cell(index).hopeful(),
            field.cell(index).hopeful(),
            "hopeful mismatch at {}",
            index
        );
    }
}

#[test]
fn test_record_order_does_not_matter() {
    let field = Field::from_string(EASY).unwrap();
    let snapshot = field.snapshot().unwrap();
    let mut lines: Vec<&str> = snapshot.lines().collect();
    lines.reverse();

    let mut reloaded = Field::from_string(&"0".repeat(81)).unwrap();
    reloaded.restore(&lines.join("\n")).unwrap();
    for index in 0..81 {
        assert_eq!(reloaded.cell(index).value(), field.cell(index).value());
    }
}

#[test]
fn test_load_clips_hopeful_to_puzzle_digits() {
    let mut field = Field::from_string(&"0".repeat(81)).unwrap();
    let snapshot = field.snapshot().unwrap();
    // Smuggle digits outside 1..=9 into one record.
    let patched = snapshot.replacen(
        r#"{"value":0,"position":0,"hopeful":[1,2,3,4,5,6,7,8,9]}"#,
        r#"{"value":0,"position":0,"hopeful":[0,3,5,11]}"#,
        1,
    );
    assert_ne!(patched, snapshot, "patch must hit the first record");

    field.restore(&patched).unwrap();
    assert_eq!(field.cell(0).hopeful().to_vec(), vec![3, 5]);
    assert!(field.cell(0).futile().is_empty());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let mut field = Field::from_string(EASY).unwrap();
    let path = scratch_path("does-not-exist.jsonl");
    assert!(matches!(
        field.load(&path),
        Err(sudoku_deduction::Error::Io(_))
    ));
}
