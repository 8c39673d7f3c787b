//! List Footer Component
//!
//! Active counter, filter selector and clear-completed control.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    view! {
        <div class="list-footer">
            <p class="item-count">
                <span id="itemCount">{move || store.active_count().get()}</span>
                " items left"
            </p>
            <FilterBar />
            <button id="clear" class="clear-btn" on:click=move |_| ctx.clear_completed()>
                "Clear Completed"
            </button>
        </div>
    }
}
