//! Theme Toggle Component

use leptos::prelude::*;
use todo_core::Theme;

use crate::context::AppContext;
use crate::store::{use_view_store, ViewStateStoreFields};

/// Light/dark switch; the icon shows the theme you would switch away from
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_view_store();

    view! {
        <button id="theme" class="theme-btn" on:click=move |_| ctx.toggle_theme()>
            {move || match store.theme().get() {
                Theme::Light => view! {
                    <img src="images/moon-solid-full.svg" alt="Light Mode" />
                }.into_any(),
                Theme::Dark => view! {
                    <img src="images/icon-sun.svg" alt="Dark Mode" />
                }.into_any(),
            }}
        </button>
    }
}
