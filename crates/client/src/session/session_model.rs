use std::fmt;

use serde::{Deserialize, Serialize};

use urbanroof_core::users::{Admin, User};

/// Which login a session belongs to. User and admin sessions are stored apart
/// and can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionKind {
    User,
    Admin,
}

/// Identity the session was issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "profile", rename_all = "camelCase")]
pub enum Principal {
    User(User),
    Admin(Admin),
}

impl Principal {
    pub fn kind(&self) -> SessionKind {
        match self {
            Principal::User(_) => SessionKind::User,
            Principal::Admin(_) => SessionKind::Admin,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Principal::User(user) => &user.id,
            Principal::Admin(admin) => &admin.id,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub principal: Principal,
}

impl Session {
    pub fn kind(&self) -> SessionKind {
        self.principal.kind()
    }

    pub fn user(&self) -> Option<&User> {
        match &self.principal {
            Principal::User(user) => Some(user),
            Principal::Admin(_) => None,
        }
    }

    pub fn admin(&self) -> Option<&Admin> {
        match &self.principal {
            Principal::Admin(admin) => Some(admin),
            Principal::User(_) => None,
        }
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("principal", &self.principal)
            .finish()
    }
}
