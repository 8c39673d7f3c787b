//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for reorderable Leptos lists.
//! Rows are keyed by `u32` ids; what a drop means is up to the caller.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row currently being dragged
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Row the pointer is over (drop highlight)
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
}

/// What the list does at each step of a drag
#[derive(Clone, Copy)]
pub struct DragCallbacks {
    /// Drag started on a row
    pub on_start: Callback<u32>,
    /// Drag image captured; the source row may now leave the flow
    pub on_hidden: Callback<u32>,
    /// Dragged row released over the row with this id
    pub on_drop: Callback<u32>,
    /// Gesture finished, dropped or not
    pub on_end: Callback<()>,
}

const DRAG_MIME: &str = "text/plain";

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
}

/// Yield to the browser once so it can snapshot the drag image
pub async fn next_tick() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}

/// Create dragstart handler for a row
///
/// The hide step is awaited after one tick and skipped if the gesture
/// already ended.
pub fn make_on_dragstart(
    dnd: DndSignals,
    callbacks: DragCallbacks,
    item_id: u32,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox won't start a drag without data
            let _ = dt.set_data(DRAG_MIME, &item_id.to_string());
        }
        dnd.dragging_id_write.set(Some(item_id));
        callbacks.on_start.run(item_id);

        spawn_local(async move {
            next_tick().await;
            if dnd.dragging_id_read.get_untracked() == Some(item_id) {
                callbacks.on_hidden.run(item_id);
            }
        });
    }
}

/// Create dragover handler; preventing default marks the row droppable
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.dragging_id_read.get_untracked().is_some()
            && dnd.over_id_read.get_untracked() != Some(item_id)
        {
            dnd.over_id_write.set(Some(item_id));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.over_id_read.get_untracked() == Some(item_id) {
            dnd.over_id_write.set(None);
        }
    }
}

/// Create drop handler for a row
pub fn make_on_drop(
    dnd: DndSignals,
    callbacks: DragCallbacks,
    item_id: u32,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragging = dnd.dragging_id_read.get_untracked();
        // dragend may never reach a source row the drop re-rendered away
        end_drag(&dnd);
        // Drags from outside the list carry no id
        if dragging.is_some() {
            callbacks.on_drop.run(item_id);
        }
    }
}

/// Create dragend handler; fires on the source row after drop or cancel
pub fn make_on_dragend(
    dnd: DndSignals,
    callbacks: DragCallbacks,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
        callbacks.on_end.run(());
    }
}
