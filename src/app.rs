//! Estate Admin App
//!
//! Root component: provides the shared services and switches between the
//! login form and the main screens.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityPanel, ApartmentsTable, FeesTable, LoginForm, ProfileForm, ResidentsTable, ScreenTabBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Screen};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));
    let store = Store::new(AppState::default());
    provide_context(store);

    let signed_in = move || store.session().with(Option::is_some);

    view! {
        <Show when=signed_in fallback=|| view! { <LoginForm /> }>
            <div class="app-layout">
                <ScreenTabBar />
                <main class="main-content">
                    {move || match store.screen().get() {
                        Screen::Fees => view! { <FeesTable /> }.into_any(),
                        Screen::Residents => view! { <ResidentsTable /> }.into_any(),
                        Screen::Apartments => view! { <ApartmentsTable /> }.into_any(),
                        Screen::Profile => view! { <ProfileForm /> }.into_any(),
                    }}
                </main>
                <ActivityPanel />
            </div>
        </Show>
    }
}
