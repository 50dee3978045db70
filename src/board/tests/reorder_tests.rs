//! Unit tests for the pure reorder operations.

use super::fixtures::{board_with, column_id, order, task_id, todo_done_board};
use crate::board::domain::{
    Column, MoveDelta, Task,
    reorder::{array_move, move_across_columns, move_within_column},
};
use rstest::rstest;

fn column_of(ids: &[&str]) -> Column {
    Column::new(column_id("todo"), "To do").with_task_ids(ids.iter().map(|id| task_id(id)))
}

fn ids(column: &Column) -> Vec<String> {
    column.task_ids().iter().map(ToString::to_string).collect()
}

#[rstest]
#[case(0, 2, vec!["B", "C", "A", "D"])]
#[case(3, 0, vec!["D", "A", "B", "C"])]
#[case(1, 2, vec!["A", "C", "B", "D"])]
#[case(0, 99, vec!["B", "C", "D", "A"])]
#[case(99, 0, vec!["D", "A", "B", "C"])]
fn move_within_column_uses_array_move_semantics(
    #[case] from: usize,
    #[case] to: usize,
    #[case] expected: Vec<&str>,
) {
    let column = column_of(&["A", "B", "C", "D"]);

    let moved = move_within_column(&column, from, to);

    assert_eq!(ids(&moved), expected);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(3)]
fn move_within_column_to_same_index_is_identity(#[case] index: usize) {
    let column = column_of(&["A", "B", "C", "D"]);

    assert_eq!(move_within_column(&column, index, index), column);
}

#[rstest]
fn move_within_empty_column_is_identity() {
    let column = column_of(&[]);

    assert_eq!(move_within_column(&column, 0, 3), column);
}

#[rstest]
fn array_move_reports_out_of_range_source() {
    let mut items = vec![1, 2, 3];

    assert!(!array_move(&mut items, 3, 0));
    assert_eq!(items, vec![1, 2, 3]);
}

#[rstest]
fn move_across_columns_inserts_at_destination_index() {
    let board = board_with(&[("x", &["A", "B"]), ("y", &["C"])]);

    let moved = move_across_columns(&board, &task_id("B"), &column_id("y"), 0)
        .expect("move should succeed");

    assert_eq!(order(&moved, "x"), vec!["A"]);
    assert_eq!(order(&moved, "y"), vec!["B", "C"]);
}

#[rstest]
fn move_across_columns_within_same_column_degenerates_to_array_move() {
    let board = board_with(&[("todo", &["A", "B", "C", "D"])]);

    let moved = move_across_columns(&board, &task_id("A"), &column_id("todo"), 2)
        .expect("move should succeed");

    assert_eq!(order(&moved, "todo"), vec!["B", "C", "A", "D"]);
}

#[rstest]
fn move_across_columns_to_same_position_is_identity() {
    let board = todo_done_board();

    let moved = move_across_columns(&board, &task_id("T2"), &column_id("todo"), 1)
        .expect("move should succeed");

    assert_eq!(moved, board);
}

#[rstest]
fn any_sequence_of_moves_preserves_invariants() {
    let mut board = board_with(&[
        ("todo", &["T1", "T2", "T3", "T4"]),
        ("doing", &["T5", "T6"]),
        ("review", &[]),
        ("done", &["T7"]),
    ]);
    let columns = ["todo", "doing", "review", "done"];
    let tasks = ["T1", "T2", "T3", "T4", "T5", "T6", "T7"];

    // Deterministic linear congruential walk over (task, column, index).
    let mut seed: u64 = 0x2545_f491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let pick = |shift: u32, len: usize| {
            usize::try_from((seed >> shift) & 0xff).unwrap_or_default() % len
        };
        let task = tasks[pick(40, tasks.len())];
        let column = columns[pick(48, columns.len())];
        let index = pick(56, 6);

        board = board
            .with_task_moved(&task_id(task), &column_id(column), index)
            .expect("move of a known task to a known column succeeds");
        board.check_invariants().expect("invariants hold after every move");
    }

    assert_eq!(board.task_count(), tasks.len());
}

fn t2_to_done() -> MoveDelta {
    MoveDelta {
        task_id: task_id("T2"),
        from_column_id: column_id("todo"),
        from_index: 1,
        to_column_id: column_id("done"),
        to_index: 0,
    }
}

#[rstest]
fn revert_undoes_only_the_moved_card() {
    let moved = move_across_columns(&todo_done_board(), &task_id("T2"), &column_id("done"), 0)
        .expect("move succeeds");
    let edited = moved
        .with_task_added(Task::new(task_id("T9"), "Added later"), &column_id("todo"))
        .expect("add succeeds");

    let reverted = t2_to_done().revert(&edited);

    assert_eq!(order(&reverted, "todo"), vec!["T1", "T2", "T3", "T9"]);
    assert!(order(&reverted, "done").is_empty());
    reverted.check_invariants().expect("invariants hold");
}

#[rstest]
fn revert_of_removed_card_leaves_board_unchanged() {
    let moved = move_across_columns(&todo_done_board(), &task_id("T2"), &column_id("done"), 0)
        .expect("move succeeds");
    let edited = moved
        .with_task_removed(&task_id("T2"))
        .expect("remove succeeds");

    assert_eq!(t2_to_done().revert(&edited), edited);
}
