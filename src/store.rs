//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Session;

/// Top-level screens; there is no URL router, the store decides what is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Fees,
    Residents,
    Apartments,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Fees, Screen::Residents, Screen::Apartments, Screen::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Fees => "Fees",
            Screen::Residents => "Residents",
            Screen::Apartments => "Apartments",
            Screen::Profile => "Profile",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Login payload, `None` until the user signs in
    pub session: Option<Session>,
    pub screen: Screen,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a session and go to the default screen
pub fn store_sign_in(store: &AppStore, session: Session) {
    store.session().set(Some(session));
    store.screen().set(Screen::default());
}

pub fn store_sign_out(store: &AppStore) {
    store.session().set(None);
    store.screen().set(Screen::default());
}

/// Rename the signed-in user after a profile update
pub fn store_rename_user(store: &AppStore, username: &str) {
    if let Some(session) = store.session().write().as_mut() {
        session.username = username.to_string();
    }
}
