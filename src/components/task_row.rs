//! Task Row Component
//!
//! A single draggable task with checkbox and delete affordances.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::store::{
    store_is_drag_hidden, store_is_dragging, store_row_visible, use_view_store, Row,
};

/// A single task row
#[component]
pub fn TaskRow(row: Row, dnd: DndSignals, callbacks: DragCallbacks) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    let id = row.id;
    let raw_id = id.0;
    let completed = row.completed;

    let row_class = move || {
        let mut c = String::from("task");
        if completed {
            c.push_str(" checked");
        }
        if store_is_dragging(&store, id) {
            c.push_str(" dragging");
        }
        if dnd.over_id_read.get() == Some(raw_id) {
            c.push_str(" drop-target");
        }
        c
    };

    // Filtered-out rows stay in the list, just not displayed
    let display = move || {
        if store_row_visible(&store, id) && !store_is_drag_hidden(&store, id) {
            "flex"
        } else {
            "none"
        }
    };

    view! {
        <li
            class=row_class
            style:display=display
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, callbacks, raw_id)
            on:dragover=make_on_dragover(dnd, raw_id)
            on:dragleave=make_on_dragleave(dnd, raw_id)
            on:drop=make_on_drop(dnd, callbacks, raw_id)
            on:dragend=make_on_dragend(dnd, callbacks)
        >
            <div class="checkbox" on:click=move |_| ctx.toggle(id)>
                <img src="images/icon-check.svg" alt="check" />
            </div>
            <p>{row.text}</p>
            <img
                class="cross"
                src="images/icon-cross.svg"
                alt="delete"
                on:click=move |_| ctx.delete(id)
            />
        </li>
    }
}
