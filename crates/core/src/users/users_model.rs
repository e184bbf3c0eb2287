//! User and admin identity models, matching the backend DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ADMIN_ROLE;

/// Platform investor account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_balance: Option<Decimal>,
}

impl User {
    /// Whether the role list returned at login contains `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_ref()
            .map(|roles| roles.iter().any(|r| r == role))
            .unwrap_or(false)
    }

    /// Whether the UI should unlock the admin console for this user.
    ///
    /// This reads a claim the client received and can be forged by whoever
    /// controls the client. It gates screens only; the API must authorize every
    /// admin request on its own.
    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    /// Wallet balance as last reported by the API, zero when unknown.
    pub fn available_balance(&self) -> Decimal {
        self.wallet_balance.unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    Admin,
}

/// Admin console identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: AdminRole,
}

impl From<&User> for Admin {
    fn from(user: &User) -> Self {
        Admin {
            id: user.id.clone(),
            full_name: user.name.clone(),
            email: user.email.clone(),
            role: AdminRole::Admin,
        }
    }
}

pub type AdminLoginRequest = LoginRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: Admin,
}
