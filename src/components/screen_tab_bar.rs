//! Screen Tab Bar Component
//!
//! Top navigation between the main screens, with the signed-in user and logout.

use leptos::prelude::*;

use crate::hooks::use_auth;
use crate::store::{use_app_store, AppStateStoreFields, Screen};

#[component]
pub fn ScreenTabBar() -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();
    let username = move || store.session().with(|s| s.as_ref().map(|s| s.username.clone()).unwrap_or_default());

    view! {
        <nav class="screen-tab-bar">
            <span class="brand">"Estate Admin"</span>
            {Screen::ALL
                .into_iter()
                .map(|screen| {
                    let tab_class = move || {
                        if store.screen().get() == screen { "screen-tab active" } else { "screen-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| store.screen().set(screen)>
                            {screen.label()}
                        </button>
                    }
                })
                .collect_view()}
            <div class="session">
                <span class="username">{username}</span>
                <button class="logout-btn" on:click=move |_| auth.logout()>"Log out"</button>
            </div>
        </nav>
    }
}
