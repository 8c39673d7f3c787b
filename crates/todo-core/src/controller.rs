//! Task List Controller
//!
//! Owns the task list, filter, theme and drag session. Every mutation runs
//! the same cycle to completion: mutate, persist, re-render, reapply the
//! filter. Invalid references are logged and ignored.

use crate::drag::{DragPhase, DragSession};
use crate::error::{TodoError, TodoResult};
use crate::persistence::PersistenceAdapter;
use crate::render::{visibility, ViewRenderer};
use crate::task::{Filter, Task, TaskId, Theme};

pub struct TaskListController<P, R> {
    tasks: Vec<Task>,
    /// Session-only; resets to `All` on every load
    filter: Filter,
    theme: Theme,
    /// Lives from `begin_drag` until a drop or `end_drag`
    drag: Option<DragSession>,
    next_id: u32,
    persistence: P,
    renderer: R,
}

impl<P: PersistenceAdapter, R: ViewRenderer> TaskListController<P, R> {
    /// Hydrate from storage and paint the initial view
    pub fn load(persistence: P, renderer: R) -> Self {
        let (stored, theme) = persistence.load();
        let mut controller = Self {
            tasks: Vec::with_capacity(stored.len()),
            filter: Filter::All,
            theme,
            drag: None,
            next_id: 1,
            persistence,
            renderer,
        };
        for entry in stored {
            let id = controller.allocate_id();
            controller.tasks.push(Task {
                id,
                text: entry.text,
                completed: entry.completed,
            });
        }
        controller.renderer.set_theme_icon(theme);
        controller.render();
        controller
    }

    // ========================
    // Accessors
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of tasks not yet completed
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Current position of `id`, if it is still in the list
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a task; whitespace-only text is rejected
    pub fn create(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(error = %TodoError::EmptyText, "create ignored");
            return None;
        }
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text));
        tracing::debug!(%id, "task created");
        self.commit();
        Some(id)
    }

    pub fn toggle_complete(&mut self, index: usize) -> bool {
        match self.checked(index) {
            Ok(index) => {
                let task = &mut self.tasks[index];
                task.completed = !task.completed;
                tracing::debug!(index, completed = task.completed, "task toggled");
                self.commit();
                true
            }
            Err(e) => Self::ignored("toggle", e),
        }
    }

    pub fn toggle_by_id(&mut self, id: TaskId) -> bool {
        match self.resolve(id) {
            Ok(index) => self.toggle_complete(index),
            Err(e) => Self::ignored("toggle", e),
        }
    }

    pub fn delete(&mut self, index: usize) -> bool {
        match self.checked(index) {
            Ok(index) => {
                let removed = self.tasks.remove(index);
                if self.drag.is_some_and(|d| d.source == removed.id) {
                    self.drag = None;
                }
                tracing::debug!(index, id = %removed.id, "task deleted");
                self.commit();
                true
            }
            Err(e) => Self::ignored("delete", e),
        }
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> bool {
        match self.resolve(id) {
            Ok(index) => self.delete(index),
            Err(e) => Self::ignored("delete", e),
        }
    }

    /// Move the task at `from` so it lands at `to`
    ///
    /// `to` is clamped to the end of the list once the task is taken out.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        match self.checked(from) {
            Ok(from) => {
                let task = self.tasks.remove(from);
                let to = to.min(self.tasks.len());
                self.tasks.insert(to, task);
                tracing::debug!(from, to, "task moved");
                self.commit();
                true
            }
            Err(e) => Self::ignored("reorder", e),
        }
    }

    /// Drop only incomplete tasks; returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if self
            .drag
            .is_some_and(|d| !self.tasks.iter().any(|t| t.id == d.source))
        {
            self.drag = None;
        }
        tracing::debug!(removed, "cleared completed tasks");
        self.commit();
        removed
    }

    /// Change which rows are visible without rebuilding them
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.apply_filter();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.renderer.set_theme_icon(self.theme);
        self.persist();
        self.theme
    }

    // ========================
    // Drag lifecycle
    // ========================

    /// Start dragging `id`; replaces any stale session
    pub fn begin_drag(&mut self, id: TaskId) -> bool {
        if let Err(e) = self.resolve(id) {
            return Self::ignored("drag", e);
        }
        self.drag = Some(DragSession::lifted(id));
        self.renderer.set_drag_state(self.drag);
        true
    }

    /// The drag image has been taken; hide the source row
    pub fn drag_hidden(&mut self, id: TaskId) {
        match self.drag.as_mut() {
            Some(session) if session.source == id => {
                session.phase = DragPhase::Hidden;
                self.renderer.set_drag_state(self.drag);
            }
            // Gesture already finished before the hide step ran
            _ => tracing::debug!(%id, "stale drag hide ignored"),
        }
    }

    /// Drop the dragged task onto the row of `target`
    ///
    /// Both positions are resolved now; the target position counts every
    /// rendered row, including ones the filter hides.
    pub fn drop_on(&mut self, target: TaskId) -> bool {
        let Some(session) = self.drag.take() else {
            tracing::debug!(%target, "drop without an active drag");
            return false;
        };
        let resolved = self
            .resolve(session.source)
            .and_then(|from| self.resolve(target).map(|to| (from, to)));
        let moved = match resolved {
            Ok((from, to)) => self.reorder(from, to),
            Err(e) => Self::ignored("drop", e),
        };
        self.renderer.set_drag_state(None);
        moved
    }

    /// Gesture over (dropped elsewhere or cancelled)
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.renderer.set_drag_state(None);
        }
    }

    // ========================
    // Internals
    // ========================

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn checked(&self, index: usize) -> TodoResult<usize> {
        if index < self.tasks.len() {
            Ok(index)
        } else {
            Err(TodoError::InvalidIndex {
                index,
                len: self.tasks.len(),
            })
        }
    }

    fn resolve(&self, id: TaskId) -> TodoResult<usize> {
        self.index_of(id).ok_or(TodoError::UnknownTask(id))
    }

    fn ignored(op: &str, error: TodoError) -> bool {
        tracing::warn!(op, error = %error, "operation ignored");
        false
    }

    fn commit(&mut self) {
        self.persist();
        self.render();
    }

    fn persist(&mut self) {
        self.persistence.save(&self.tasks, self.theme);
    }

    fn render(&mut self) {
        self.renderer.render_all(&self.tasks, self.filter);
        self.renderer.update_count(self.active_count());
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.renderer.mark_filter_selected(self.filter);
        self.renderer.apply_visibility(&visibility(&self.tasks, self.filter));
    }
}
