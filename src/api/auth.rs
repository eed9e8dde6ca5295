//! User Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{LoginRequest, UpdateUserRequest};

/// `POST /users/login`; the session payload is returned untouched
pub async fn login(api: &ApiClient, username: &str, password: &str) -> ApiResult<serde_json::Value> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let resp = api.post("users/login", &body).await?;
    Ok(resp.json::<serde_json::Value>().await?)
}

pub async fn update_user(api: &ApiClient, user_id: i64, request: &UpdateUserRequest) -> ApiResult<()> {
    api.put(&format!("users/{}", user_id), request).await?;
    Ok(())
}
