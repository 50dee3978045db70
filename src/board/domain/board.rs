//! Authoritative board state.
//!
//! A [`Board`] is an ordered sequence of [`Column`]s, each holding an ordered
//! list of task identifiers, plus the content of every card on the board.
//! Ownership of a task is list membership: the cached reverse index is derived
//! from the lists and rebuilt or patched on every mutation.
//!
//! Every mutation returns a new `Board`; the receiver is never modified.

use super::{BoardDomainError, BoardId, ColumnId, Task, TaskId, reorder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One board lane with an ordered list of task identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    label: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: ColumnId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            task_ids: Vec::new(),
        }
    }

    /// Replaces the ordered task list.
    #[must_use]
    pub fn with_task_ids(mut self, task_ids: impl IntoIterator<Item = TaskId>) -> Self {
        self.task_ids = task_ids.into_iter().collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the ordered task identifiers.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns the index of `task_id` within this column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    pub(super) const fn task_ids_mut(&mut self) -> &mut Vec<TaskId> {
        &mut self.task_ids
    }
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted columns in display order.
    pub columns: Vec<Column>,
    /// Persisted card content.
    pub tasks: Vec<Task>,
}

/// Ordered collection of columns together with card content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PersistedBoardData", try_from = "PersistedBoardData")]
pub struct Board {
    id: BoardId,
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
    owners: HashMap<TaskId, ColumnId>,
}

impl Board {
    /// Creates an empty board with no columns.
    #[must_use]
    pub fn new(id: BoardId) -> Self {
        Self {
            id,
            columns: Vec::new(),
            tasks: BTreeMap::new(),
            owners: HashMap::new(),
        }
    }

    /// Reconstructs a board from persisted storage, validating all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when two cards share an
    /// identifier, or any error reported by [`Board::check_invariants`].
    pub fn from_persisted(data: PersistedBoardData) -> Result<Self, BoardDomainError> {
        let mut tasks = BTreeMap::new();
        for task in data.tasks {
            let task_id = task.id().clone();
            if tasks.insert(task_id.clone(), task).is_some() {
                return Err(BoardDomainError::DuplicateTask(task_id));
            }
        }
        let mut board = Self {
            id: data.id,
            columns: data.columns,
            tasks,
            owners: HashMap::new(),
        };
        board.rebuild_owners();
        board.check_invariants()?;
        Ok(board)
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the display position of a column.
    #[must_use]
    pub fn column_position(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == column_id)
    }

    /// Returns the card content for a task.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the column that currently owns `task_id`.
    ///
    /// `None` means the task is not on the board, which signals a caller bug.
    #[must_use]
    pub fn find_column_of(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.owners.get(task_id)
    }

    /// Returns the owning column and index of `task_id`.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        let column_id = self.find_column_of(task_id)?;
        let index = self.column(column_id)?.position_of(task_id)?;
        Some((column_id, index))
    }

    /// Appends a new empty column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] when the identifier is
    /// already used.
    pub fn with_column(
        &self,
        column_id: ColumnId,
        label: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        if self.column_position(&column_id).is_some() {
            return Err(BoardDomainError::DuplicateColumn(column_id));
        }
        let mut next = self.clone();
        next.columns.push(Column::new(column_id, label));
        Ok(next)
    }

    /// Adds a new card to the end of `column_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when the task is already on
    /// the board or [`BoardDomainError::UnknownColumn`] when the column does
    /// not exist.
    pub fn with_task_added(&self, task: Task, column_id: &ColumnId) -> Result<Self, BoardDomainError> {
        if self.tasks.contains_key(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        let position = self
            .column_position(column_id)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;
        let mut next = self.clone();
        let task_id = task.id().clone();
        next.tasks.insert(task_id.clone(), task);
        next.attach(task_id, position, usize::MAX);
        Ok(next)
    }

    /// Replaces the content of an existing card without touching its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] when the task is not on the
    /// board.
    pub fn with_task_updated(&self, task: Task) -> Result<Self, BoardDomainError> {
        if !self.tasks.contains_key(task.id()) {
            return Err(BoardDomainError::UnknownTask(task.id().clone()));
        }
        let mut next = self.clone();
        next.tasks.insert(task.id().clone(), task);
        Ok(next)
    }

    /// Removes a card and its list entry in one step.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] when the task is not on the
    /// board.
    pub fn with_task_removed(&self, task_id: &TaskId) -> Result<Self, BoardDomainError> {
        let mut next = self.clone();
        if next.tasks.remove(task_id).is_none() {
            return Err(BoardDomainError::UnknownTask(task_id.clone()));
        }
        next.detach(task_id);
        Ok(next)
    }

    /// Moves `task_id` into `dest_column` at `dest_index`.
    ///
    /// The index is clamped into `[0, len]` of the destination list. See
    /// [`reorder::move_across_columns`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] or
    /// [`BoardDomainError::UnknownColumn`] when either identifier is not on
    /// the board.
    pub fn with_task_moved(
        &self,
        task_id: &TaskId,
        dest_column: &ColumnId,
        dest_index: usize,
    ) -> Result<Self, BoardDomainError> {
        reorder::move_across_columns(self, task_id, dest_column, dest_index)
    }

    /// Moves the column at `from` to `to` using array-move semantics.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnOutOfRange`] when `from` does not
    /// name a column. `to` is clamped.
    pub fn with_column_moved(&self, from: usize, to: usize) -> Result<Self, BoardDomainError> {
        let mut next = self.clone();
        if !reorder::array_move(&mut next.columns, from, to) {
            return Err(BoardDomainError::ColumnOutOfRange {
                index: from,
                len: self.columns.len(),
            });
        }
        Ok(next)
    }

    /// Verifies unique ownership, absence of duplicates, and index agreement.
    ///
    /// This recomputes everything from the column lists and is intended for
    /// commit-time checks and tests, not per-tick use.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), BoardDomainError> {
        let mut column_ids = HashSet::new();
        let mut seen: HashMap<&TaskId, &ColumnId> = HashMap::new();
        for column in &self.columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardDomainError::DuplicateColumn(column.id().clone()));
            }
            for task_id in column.task_ids() {
                if let Some(owner) = seen.insert(task_id, column.id()) {
                    return Err(BoardDomainError::InvariantViolation(format!(
                        "task {task_id} appears in both {owner} and {}",
                        column.id()
                    )));
                }
                if !self.tasks.contains_key(task_id) {
                    return Err(BoardDomainError::InvariantViolation(format!(
                        "column {} references unknown task {task_id}",
                        column.id()
                    )));
                }
            }
        }
        if let Some(orphan) = self.tasks.keys().find(|id| !seen.contains_key(id)) {
            return Err(BoardDomainError::InvariantViolation(format!(
                "task {orphan} is not in any column"
            )));
        }
        let index_agrees = self.owners.len() == seen.len()
            && seen
                .iter()
                .all(|(task_id, column_id)| self.owners.get(*task_id) == Some(*column_id));
        if !index_agrees {
            return Err(BoardDomainError::InvariantViolation(
                "owner index disagrees with column membership".to_owned(),
            ));
        }
        Ok(())
    }

    pub(super) fn column_at_mut(&mut self, position: usize) -> Option<&mut Column> {
        self.columns.get_mut(position)
    }

    /// Removes `task_id` from its owning list, returning where it was.
    pub(super) fn detach(&mut self, task_id: &TaskId) -> Option<(ColumnId, usize)> {
        let column_id = self.owners.remove(task_id)?;
        let column = self
            .columns
            .iter_mut()
            .find(|column| column.id() == &column_id)?;
        let index = column.position_of(task_id)?;
        column.task_ids_mut().remove(index);
        Some((column_id, index))
    }

    /// Inserts `task_id` into the column at `position`, clamping `index`.
    pub(super) fn attach(&mut self, task_id: TaskId, position: usize, index: usize) {
        let Some(column) = self.columns.get_mut(position) else {
            return;
        };
        let clamped = index.min(column.len());
        self.owners.insert(task_id.clone(), column.id().clone());
        column.task_ids_mut().insert(clamped, task_id);
    }

    fn rebuild_owners(&mut self) {
        self.owners = self
            .columns
            .iter()
            .flat_map(|column| {
                column
                    .task_ids()
                    .iter()
                    .map(|task_id| (task_id.clone(), column.id().clone()))
            })
            .collect();
    }
}

impl From<Board> for PersistedBoardData {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            columns: board.columns,
            tasks: board.tasks.into_values().collect(),
        }
    }
}

impl TryFrom<PersistedBoardData> for Board {
    type Error = BoardDomainError;

    fn try_from(data: PersistedBoardData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
