use leptos::prelude::*;

use super::Mutation;
use crate::api::{self, ApiClient};
use crate::context::use_app_context;
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, Session, UpdateUserRequest};
use crate::store::{store_rename_user, store_sign_in, store_sign_out, use_app_store, AppStateStoreFields, AppStore};

/// Login, logout and profile update
#[derive(Clone, Copy)]
pub struct Auth {
    pub logging_in: Mutation,
    pub updating: Mutation,
    /// Message of the last failed login
    pub error: RwSignal<Option<String>>,
    store: AppStore,
    api: StoredValue<ApiClient>,
}

pub fn use_auth() -> Auth {
    Auth {
        logging_in: Mutation::new(),
        updating: Mutation::new(),
        error: RwSignal::new(None),
        store: use_app_store(),
        api: use_app_context().api,
    }
}

impl Auth {
    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    /// Returns whether the user is now signed in
    pub async fn login(self, request: LoginRequest) -> bool {
        self.error.set(None);
        let api = self.api.get_value();
        let result = self
            .logging_in
            .track(async { api::login(&api, &request.username, &request.password).await })
            .await;
        match result {
            Ok(payload) => {
                tracing::info!(target: "activity", "User Login: {}", request.username);
                store_sign_in(
                    &self.store,
                    Session {
                        username: request.username,
                        payload,
                    },
                );
                true
            }
            Err(e) => {
                tracing::error!("Login failed for {}: {}", request.username, e);
                self.error.set(Some(e.to_string()));
                false
            }
        }
    }

    pub fn logout(&self) {
        if let Some(session) = self.session() {
            tracing::info!(target: "activity", "User Logout: {}", session.username);
        }
        store_sign_out(&self.store);
    }

    /// `PUT /users/{id}` for the signed-in user
    pub async fn update_user(self, request: UpdateUserRequest) -> ApiResult<()> {
        let user_id = self
            .session()
            .and_then(|s| s.user_id())
            .ok_or_else(|| ApiError::Status {
                status: 401,
                message: "No signed-in user to update".to_string(),
            })?;
        let api = self.api.get_value();
        let action = format!("User #{} updated", user_id);
        self.updating
            .run(action, async { api::update_user(&api, user_id, &request).await })
            .await?;
        store_rename_user(&self.store, &request.username);
        Ok(())
    }
}
