use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Body of both the refresh and the logout calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// What the storefront shows about the signed-in shopper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub display_name: String,
    pub email: String,
}

impl From<&UserInfo> for UserSession {
    fn from(user: &UserInfo) -> Self {
        Self {
            display_name: user
                .full_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| user.username.clone()),
            email: user.email.clone().unwrap_or_default(),
        }
    }
}
