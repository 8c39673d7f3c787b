//! View Renderer Contract
//!
//! The controller paints through this trait after every change. Rows are
//! rebuilt from scratch on each `render_all`; filter changes only go
//! through the lighter `apply_visibility` pass.

use crate::drag::DragSession;
use crate::task::{Filter, Task, Theme};

pub trait ViewRenderer {
    /// Rebuild every row from `tasks`, hiding rows `filter` excludes
    fn render_all(&mut self, tasks: &[Task], filter: Filter);

    /// Show/hide already-rendered rows, by position
    fn apply_visibility(&mut self, visible: &[bool]);

    /// Refresh the active-task counter
    fn update_count(&mut self, active: usize);

    fn set_theme_icon(&mut self, theme: Theme);

    /// Mark exactly one filter control as selected
    fn mark_filter_selected(&mut self, filter: Filter);

    /// Reflect the current drag session (dragging class, hidden row)
    fn set_drag_state(&mut self, _session: Option<DragSession>) {}
}

/// Per-row visibility for `filter`, in list order
pub fn visibility(tasks: &[Task], filter: Filter) -> Vec<bool> {
    tasks.iter().map(|t| t.is_visible(filter)).collect()
}
