//! Filter Bar Component
//!
//! All / Active / Completed selector.

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    view! {
        <div class="toggle">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        id=filter.as_str()
                        class=move || if is_selected() { "selected" } else { "" }
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
