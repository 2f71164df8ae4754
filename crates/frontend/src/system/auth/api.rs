use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::AuthError;
use crate::shared::api_utils::api_url;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, AuthError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| AuthError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    read_json(response).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)
        .map_err(|e| AuthError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    read_json(response).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)
        .map_err(|e| AuthError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, AuthError> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    read_json(response).await
}
