//! Store-backed Renderer
//!
//! Paints controller state into the reactive view store. Leptos turns the
//! store writes into DOM updates.

use leptos::prelude::*;
use todo_core::{DragSession, Filter, Task, Theme, ViewRenderer};

use crate::store::{Row, ViewStateStoreFields, ViewStore};

/// Body class carried while the light theme is active
const LIGHT_MODE_CLASS: &str = "light-mode";

pub struct StoreRenderer {
    store: ViewStore,
}

impl StoreRenderer {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }
}

impl ViewRenderer for StoreRenderer {
    fn render_all(&mut self, tasks: &[Task], filter: Filter) {
        let rows = tasks
            .iter()
            .map(|task| Row {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
                visible: task.is_visible(filter),
            })
            .collect();
        *self.store.rows().write() = rows;
    }

    fn apply_visibility(&mut self, visible: &[bool]) {
        let rows = self.store.rows();
        rows.update(|rows| set_row_visibility(rows, visible));
    }

    fn update_count(&mut self, active: usize) {
        *self.store.active_count().write() = active;
    }

    fn set_theme_icon(&mut self, theme: Theme) {
        *self.store.theme().write() = theme;
        set_body_theme(theme);
    }

    fn mark_filter_selected(&mut self, filter: Filter) {
        *self.store.filter().write() = filter;
    }

    fn set_drag_state(&mut self, session: Option<DragSession>) {
        *self.store.drag().write() = session;
    }
}

/// Show/hide rows by position; extra flags on either side are ignored
fn set_row_visibility(rows: &mut [Row], visible: &[bool]) {
    for (row, shown) in rows.iter_mut().zip(visible) {
        row.visible = *shown;
    }
}

/// Toggle the light-mode class on <body>
fn set_body_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body());
    if let Some(body) = body {
        let light = theme == Theme::Light;
        if let Err(e) = body.class_list().toggle_with_force(LIGHT_MODE_CLASS, light) {
            tracing::warn!(error = ?e, "failed to apply theme class");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::TaskId;

    fn row(id: u32, completed: bool) -> Row {
        Row {
            id: TaskId(id),
            text: format!("Task {}", id),
            completed,
            visible: true,
        }
    }

    #[test]
    fn test_set_row_visibility_by_position() {
        let mut rows = vec![row(1, true), row(2, false), row(3, true)];
        set_row_visibility(&mut rows, &[true, false, true]);

        let shown: Vec<_> = rows.iter().map(|r| r.visible).collect();
        assert_eq!(shown, vec![true, false, true]);
        // Same pass twice leaves the same rows shown
        set_row_visibility(&mut rows, &[true, false, true]);
        assert_eq!(rows.iter().map(|r| r.visible).collect::<Vec<_>>(), shown);
    }

    #[test]
    fn test_set_row_visibility_short_flags() {
        let mut rows = vec![row(1, false), row(2, false)];
        set_row_visibility(&mut rows, &[false]);
        assert!(!rows[0].visible);
        assert!(rows[1].visible);
    }
}
