//! Todo Widget App
//!
//! Builds the controller once at startup and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{JsonPersistence, TaskListController};

use crate::components::{ListFooter, NewTaskInput, TaskListView, ThemeToggle};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::ViewState;
use crate::view::StoreRenderer;

#[component]
pub fn App() -> impl IntoView {
    // View state, written only by the controller's renderer
    let store = Store::new(ViewState::default());
    provide_context(store);

    // Hydrate from localStorage and paint the first frame
    let persistence = JsonPersistence::new(BrowserStorage::open());
    let controller = TaskListController::load(persistence, StoreRenderer::new(store));
    tracing::info!(tasks = controller.tasks().len(), "todo list loaded");
    provide_context(AppContext::new(controller));

    view! {
        <div class="container">
            <header class="header">
                <h1>"TODO"</h1>
                <ThemeToggle />
            </header>

            <NewTaskInput />

            <div class="list-card">
                <TaskListView />
                <ListFooter />
            </div>

            <p class="hint">"Drag and drop to reorder list"</p>
        </div>
    }
}
