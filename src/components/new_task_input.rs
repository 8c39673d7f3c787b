//! New Task Input Component
//!
//! Text input that creates a task on Enter.

use leptos::prelude::*;

use crate::context::AppContext;

/// Input for creating new tasks
#[component]
pub fn NewTaskInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        // Whitespace-only input never reaches the controller
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        if ctx.create(&text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="new-task">
            <span class="checkbox placeholder"></span>
            <input
                id="inputBox"
                type="text"
                placeholder="Create a new todo..."
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
