//! Client-side mirror of the server's lists.
//!
//! The browser client keeps one of these per session and feeds it from API
//! responses: `refresh_*` replaces a whole list after a GET, the
//! `*_created` / `*_updated` / `*_removed` methods apply the single entity a
//! mutation endpoint returned. Nothing here is computed optimistically ahead
//! of the server's confirmation, and nothing here talks to the network; the
//! container is plain state, injected wherever it is needed rather than
//! reached through a global.

use std::collections::HashMap;

use crate::auth::data::UserInfo;
use crate::boards::data::{Board, BoardID};
use crate::notes::data::{Note, NoteID};
use crate::subtasks::data::{Subtask, SubtaskID};
use crate::tasks::data::{Column, Task, TaskID};

#[derive(Debug, Default)]
pub struct Store {
    user: Option<UserInfo>,
    boards: Vec<Board>,
    tasks: Vec<Task>,
    notes: Vec<Note>,
    subtasks: HashMap<TaskID, Vec<Subtask>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn subtasks(&self, task_id: TaskID) -> &[Subtask] {
        self.subtasks.get(&task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_user(&mut self, user: Option<UserInfo>) {
        self.user = user;
    }

    /// Logout: the session user and every mirrored list are dropped.
    pub fn clear(&mut self) {
        *self = Store::default();
    }

    // Refresh points: each replaces one list with the server's answer.

    pub fn refresh_boards(&mut self, boards: Vec<Board>) {
        self.boards = boards;
    }

    pub fn refresh_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn refresh_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    pub fn refresh_subtasks(&mut self, task_id: TaskID, subtasks: Vec<Subtask>) {
        self.subtasks.insert(task_id, subtasks);
    }

    // Single-entity updates from mutation responses. Insert positions follow
    // the server's ordering contract so the mirror stays consistent with the
    // next full refresh.

    pub fn board_created(&mut self, board: Board) {
        // Boards list newest-first.
        self.boards.insert(0, board);
    }

    pub fn board_updated(&mut self, board: Board) {
        if let Some(existing) = self.boards.iter_mut().find(|b| b.id == board.id) {
            *existing = board;
        }
    }

    /// Removing a board prunes its tasks and their subtasks from the mirror,
    /// matching the server-side cascade.
    pub fn board_removed(&mut self, id: BoardID) {
        self.boards.retain(|board| board.id != id);

        let removed: Vec<TaskID> = self
            .tasks
            .iter()
            .filter(|task| task.board_id == id)
            .map(|task| task.id)
            .collect();

        self.tasks.retain(|task| task.board_id != id);
        for task_id in removed {
            self.subtasks.remove(&task_id);
        }
    }

    pub fn task_created(&mut self, task: Task) {
        // Tasks list newest-first.
        self.tasks.insert(0, task);
    }

    pub fn task_updated(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        }
    }

    pub fn task_removed(&mut self, id: TaskID) {
        self.tasks.retain(|task| task.id != id);
        self.subtasks.remove(&id);
    }

    pub fn subtask_created(&mut self, subtask: Subtask) {
        // Subtasks list oldest-first.
        self.subtasks.entry(subtask.task_id).or_default().push(subtask);
    }

    pub fn subtask_updated(&mut self, subtask: Subtask) {
        if let Some(list) = self.subtasks.get_mut(&subtask.task_id) {
            if let Some(existing) = list.iter_mut().find(|s| s.id == subtask.id) {
                *existing = subtask;
            }
        }
    }

    pub fn subtask_removed(&mut self, id: SubtaskID, task_id: TaskID) {
        if let Some(list) = self.subtasks.get_mut(&task_id) {
            list.retain(|subtask| subtask.id != id);
        }
    }

    pub fn note_created(&mut self, note: Note) {
        // Notes list most-recently-edited first.
        self.notes.insert(0, note);
    }

    pub fn note_updated(&mut self, note: Note) {
        // An edit bumps the note to the front, mirroring the updated_at sort.
        self.notes.retain(|n| n.id != note.id);
        self.notes.insert(0, note);
    }

    pub fn note_removed(&mut self, id: NoteID) {
        self.notes.retain(|note| note.id != id);
    }

    /// Tasks of one board in one column, in list order. This is what a
    /// Kanban column renders.
    pub fn column_tasks(&self, board_id: BoardID, column: Column) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.board_id == board_id && task.column == column)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::data::Priority;

    fn board(id: BoardID) -> Board {
        Board {
            id,
            owner_id: 1,
            name: format!("board {}", id),
            description: String::new(),
            created_at: String::from("2026-01-01T00:00:00.000000Z"),
            updated_at: String::from("2026-01-01T00:00:00.000000Z"),
        }
    }

    fn task(id: TaskID, board_id: BoardID, column: Column) -> Task {
        Task {
            id,
            board_id,
            owner_id: 1,
            title: format!("task {}", id),
            description: String::new(),
            priority: Priority::Medium,
            column,
            checklist: vec![],
            created_at: String::from("2026-01-01T00:00:00.000000Z"),
            updated_at: String::from("2026-01-01T00:00:00.000000Z"),
        }
    }

    fn subtask(id: SubtaskID, task_id: TaskID) -> Subtask {
        Subtask {
            id,
            task_id,
            title: format!("subtask {}", id),
            completed: false,
            created_at: String::from("2026-01-01T00:00:00.000000Z"),
            updated_at: String::from("2026-01-01T00:00:00.000000Z"),
        }
    }

    #[test]
    fn created_entities_take_list_front() {
        let mut store = Store::new();
        store.board_created(board(1));
        store.board_created(board(2));

        let ids: Vec<BoardID> = store.boards().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn board_removal_prunes_tasks_and_subtasks() {
        let mut store = Store::new();
        store.refresh_boards(vec![board(1), board(2)]);
        store.refresh_tasks(vec![
            task(10, 1, Column::Todo),
            task(11, 1, Column::Done),
            task(20, 2, Column::Todo),
        ]);
        store.refresh_subtasks(10, vec![subtask(100, 10)]);
        store.refresh_subtasks(20, vec![subtask(200, 20)]);

        store.board_removed(1);

        assert_eq!(store.boards().len(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, 20);
        assert!(store.subtasks(10).is_empty());
        assert_eq!(store.subtasks(20).len(), 1);
    }

    #[test]
    fn task_update_replaces_in_place() {
        let mut store = Store::new();
        store.refresh_tasks(vec![task(1, 1, Column::Todo), task(2, 1, Column::Todo)]);

        store.task_updated(task(1, 1, Column::Done));

        assert_eq!(store.tasks()[0].column, Column::Done);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn note_edit_bumps_to_front() {
        let mut store = Store::new();
        let note = |id: NoteID| Note {
            id,
            owner_id: 1,
            title: format!("note {}", id),
            content: String::new(),
            checklist: vec![],
            created_at: String::from("2026-01-01T00:00:00.000000Z"),
            updated_at: String::from("2026-01-01T00:00:00.000000Z"),
        };

        store.refresh_notes(vec![note(1), note(2), note(3)]);
        store.note_updated(note(3));

        let ids: Vec<NoteID> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn column_tasks_filters_by_board_and_column() {
        let mut store = Store::new();
        store.refresh_tasks(vec![
            task(1, 1, Column::Todo),
            task(2, 1, Column::Done),
            task(3, 2, Column::Todo),
        ]);

        let todo: Vec<TaskID> = store
            .column_tasks(1, Column::Todo)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(todo, vec![1]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut store = Store::new();
        store.set_user(Some(UserInfo {
            id: 1,
            email: String::from("a@b.c"),
            name: String::from("a"),
        }));
        store.refresh_boards(vec![board(1)]);
        store.refresh_subtasks(10, vec![subtask(100, 10)]);

        store.clear();

        assert!(store.user().is_none());
        assert!(store.boards().is_empty());
        assert!(store.subtasks(10).is_empty());
    }
}
