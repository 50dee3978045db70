//! Pure reorder operations.
//!
//! Both operations are total over well-formed input: indices outside the
//! list are clamped rather than rejected, because drag geometry routinely
//! produces boundary positions.

use super::{Board, BoardDomainError, Column, ColumnId, TaskId};

/// Removes the element at `from` and reinserts it at `to`.
///
/// `to` is interpreted against the list *after* removal and clamped to its
/// end, so moving index 0 to index 2 in `[A, B, C, D]` yields `[B, C, A, D]`.
/// Returns `false`, leaving `items` untouched, when `from` is out of range.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let item = items.remove(from);
    let clamped = to.min(items.len());
    items.insert(clamped, item);
    true
}

/// Returns `column` with the task at `from_index` moved to `to_index`.
///
/// An out-of-range `from_index` is clamped to the last task; an empty column
/// is returned unchanged.
#[must_use]
pub fn move_within_column(column: &Column, from_index: usize, to_index: usize) -> Column {
    let mut next = column.clone();
    let Some(last) = column.len().checked_sub(1) else {
        return next;
    };
    array_move(next.task_ids_mut(), from_index.min(last), to_index);
    next
}

/// Moves `task_id` from its current column into `dest_column` at
/// `dest_index`, clamped to `[0, len]` of the destination list.
///
/// When the task already lives in `dest_column` this degenerates to
/// [`move_within_column`].
///
/// # Errors
///
/// Returns [`BoardDomainError::UnknownTask`] when the task is not on the board
/// and [`BoardDomainError::UnknownColumn`] when the destination is unknown.
pub fn move_across_columns(
    board: &Board,
    task_id: &TaskId,
    dest_column: &ColumnId,
    dest_index: usize,
) -> Result<Board, BoardDomainError> {
    let dest_position = board
        .column_position(dest_column)
        .ok_or_else(|| BoardDomainError::UnknownColumn(dest_column.clone()))?;
    let (source_column, from_index) = board
        .locate(task_id)
        .ok_or_else(|| BoardDomainError::UnknownTask(task_id.clone()))?;

    let mut next = board.clone();
    if source_column == dest_column {
        if let Some(column) = next.column_at_mut(dest_position) {
            array_move(column.task_ids_mut(), from_index, dest_index);
        }
        return Ok(next);
    }

    next.detach(task_id);
    next.attach(task_id.clone(), dest_position, dest_index);
    Ok(next)
}
