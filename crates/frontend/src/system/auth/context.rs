use std::sync::Arc;

use async_trait::async_trait;
use contracts::system::auth::{UserInfo, UserSession};
use leptos::prelude::*;

use super::{api, storage, AuthError};

/// Session surface the header depends on
#[async_trait(?Send)]
pub trait AuthProvider: Send + Sync {
    /// Current session, tracked when read inside a reactive closure
    fn session(&self) -> Option<UserSession>;

    /// Ends the session. On error the session is left as it was.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

pub type SharedAuth = Arc<dyn AuthProvider>;

/// Hook to access the auth provider
pub fn use_auth() -> SharedAuth {
    use_context::<SharedAuth>().expect("Auth provider not found in component tree")
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Token-backed auth store talking to the storefront auth API
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Restores a session saved in localStorage, refreshing the access token once if needed
    pub async fn restore(&self) {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };

        match api::get_current_user(&access_token).await {
            Ok(user_info) => self.set_signed_in(access_token, user_info),
            Err(e) => {
                log::debug!("Stored access token rejected ({}), trying refresh", e);
                let Some(refresh_token) = storage::get_refresh_token() else {
                    storage::clear_tokens();
                    return;
                };
                match api::refresh_token(refresh_token).await {
                    Ok(response) => {
                        storage::save_access_token(&response.access_token);
                        match api::get_current_user(&response.access_token).await {
                            Ok(user_info) => self.set_signed_in(response.access_token, user_info),
                            Err(e) => log::warn!("Could not load user after refresh: {}", e),
                        }
                    }
                    Err(e) => {
                        log::info!("Session refresh failed, clearing tokens: {}", e);
                        storage::clear_tokens();
                    }
                }
            }
        }
    }

    pub async fn sign_in(&self, username: String, password: String) -> Result<(), AuthError> {
        let response = api::login(username, password).await?;

        storage::save_tokens(&response.access_token, &response.refresh_token);
        self.set_signed_in(response.access_token, response.user);

        Ok(())
    }

    fn set_signed_in(&self, access_token: String, user_info: UserInfo) {
        log::info!("Signed in as {}", user_info.username);
        self.state.set(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
        });
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthProvider for AuthStore {
    fn session(&self) -> Option<UserSession> {
        self.state
            .with(|state| state.user_info.as_ref().map(UserSession::from))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(refresh_token) = storage::get_refresh_token() {
            api::logout(refresh_token)
                .await
                .map_err(|e| AuthError::SessionTermination(e.to_string()))?;
        }

        storage::clear_tokens();
        self.state.set(AuthState::default());

        Ok(())
    }
}
