//! Task List View Component
//!
//! Displays every task row with drag-and-drop reordering.
//! Uses leptos-dragdrop; drops are resolved by the controller.

use leptos::prelude::*;
use leptos_dragdrop::*;
use todo_core::TaskId;

use crate::components::TaskRow;
use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

/// Task list component with DnD support
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    let callbacks = DragCallbacks {
        on_start: Callback::new(move |id: u32| ctx.begin_drag(TaskId(id))),
        on_hidden: Callback::new(move |id: u32| ctx.drag_hidden(TaskId(id))),
        on_drop: Callback::new(move |target_id: u32| {
            tracing::debug!(target_id, "drop on row");
            ctx.drop_on(TaskId(target_id));
        }),
        on_end: Callback::new(move |_: ()| ctx.end_drag()),
    };

    view! {
        <ul id="listContainer" class="task-list">
            <For
                each=move || store.rows().get()
                // Rebuild a row whenever its content changes
                key=|row| (row.id, row.text.clone(), row.completed)
                children=move |row| {
                    view! { <TaskRow row=row dnd=dnd callbacks=callbacks /> }
                }
            />
        </ul>
    }
}
