//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The controller's renderer is the only writer; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{DragSession, Filter, TaskId, Theme};

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Passes the active filter
    pub visible: bool,
}

/// Everything the widget paints, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in list order, hidden ones included
    pub rows: Vec<Row>,
    /// Incomplete task counter
    pub active_count: usize,
    pub theme: Theme,
    /// Selected filter control
    pub filter: Filter,
    /// Drag in progress, if any
    pub drag: Option<DragSession>,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Whether the row passes the filter
pub fn store_row_visible(store: &ViewStore, id: TaskId) -> bool {
    store
        .rows()
        .with(|rows| rows.iter().find(|row| row.id == id).is_some_and(|row| row.visible))
}

/// Whether the row is the source of the current drag
pub fn store_is_dragging(store: &ViewStore, id: TaskId) -> bool {
    store.drag().with(|drag| drag.is_some_and(|session| session.source == id))
}

/// Whether the row has been taken out of the flow for the drag
pub fn store_is_drag_hidden(store: &ViewStore, id: TaskId) -> bool {
    store
        .drag()
        .with(|drag| drag.is_some_and(|session| session.source == id && session.is_hidden()))
}
