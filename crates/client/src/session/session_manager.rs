//! Sign-in state for one client process.
//!
//! The manager owns the current user and admin sessions, mirrors every change
//! into its `SessionStore`, and hands out authenticated API clients.

use log::{debug, info, warn};
use rust_decimal::Decimal;

use urbanroof_core::errors::{Error, Result};
use urbanroof_core::users::{Admin, LoginRequest, RegisterRequest, User};

use super::{Principal, Session, SessionKind, SessionStore};
use crate::api::AuthApi;
use crate::client::UrbanRoofClient;

pub const ADMIN_ACCESS_DENIED_MESSAGE: &str = "Access denied. Admin privileges required.";

/// How an admin signs in.
///
/// Deployments differ: some expose `/admin/login`, others only the user login
/// whose response lists roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminLoginStrategy {
    /// `POST /v1/users/login`, then require the `ADMIN` role on the returned user.
    #[default]
    UserLoginWithRoleCheck,
    /// `POST /admin/login`.
    DedicatedEndpoint,
}

pub struct SessionManager<S: SessionStore> {
    store: S,
    user: Option<Session>,
    admin: Option<Session>,
}

impl<S: SessionStore> SessionManager<S> {
    /// Creates a signed-out manager. Call `init` to restore persisted sessions.
    pub fn new(store: S) -> Self {
        Self {
            store,
            user: None,
            admin: None,
        }
    }

    /// Loads persisted sessions. A session whose principal does not match its
    /// slot is discarded.
    pub fn init(&mut self) -> Result<()> {
        self.user = self
            .store
            .load(SessionKind::User)?
            .filter(|s| s.kind() == SessionKind::User);
        self.admin = self
            .store
            .load(SessionKind::Admin)?
            .filter(|s| s.kind() == SessionKind::Admin);
        debug!(
            "Restored sessions: user={}, admin={}",
            self.user.is_some(),
            self.admin.is_some()
        );
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The signed-in investor session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref().and_then(Session::user)
    }

    pub fn admin_session(&self) -> Option<&Session> {
        self.admin.as_ref()
    }

    pub fn current_admin(&self) -> Option<&Admin> {
        self.admin.as_ref().and_then(Session::admin)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    pub fn is_admin_authenticated(&self) -> bool {
        self.admin.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    pub async fn login<A>(&mut self, api: &A, email: &str, password: &str) -> Result<Session>
    where
        A: AuthApi + ?Sized,
    {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = api.login(&request).await?;
        let session = Session {
            token: response.token,
            refresh_token: Some(response.refresh_token).filter(|t| !t.is_empty()),
            principal: Principal::User(response.user),
        };
        self.store.save(&session)?;
        info!("Signed in user {}", session.principal.id());
        self.user = Some(session.clone());
        Ok(session)
    }

    /// Registers the account, then signs in with the same credentials.
    pub async fn register<A>(&mut self, api: &A, request: &RegisterRequest) -> Result<Session>
    where
        A: AuthApi + ?Sized,
    {
        let user = api.register(request).await?;
        debug!("Registered user {}", user.id);
        self.login(api, &request.email, &request.password).await
    }

    /// Signs in to the admin console.
    ///
    /// On any failure the admin slot ends up empty, including a session left
    /// over from an earlier sign-in.
    pub async fn admin_login<A>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
        strategy: AdminLoginStrategy,
    ) -> Result<Session>
    where
        A: AuthApi + ?Sized,
    {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let attempt = match strategy {
            AdminLoginStrategy::UserLoginWithRoleCheck => {
                api.login(&request).await.and_then(|response| {
                    // UI gating only; the API still authorizes every admin call.
                    if !response.user.is_admin() {
                        return Err(Error::Forbidden(ADMIN_ACCESS_DENIED_MESSAGE.to_string()));
                    }
                    Ok(Session {
                        token: response.token,
                        refresh_token: Some(response.refresh_token).filter(|t| !t.is_empty()),
                        principal: Principal::Admin(Admin::from(&response.user)),
                    })
                })
            }
            AdminLoginStrategy::DedicatedEndpoint => {
                api.admin_login(&request).await.map(|response| Session {
                    token: response.token,
                    refresh_token: None,
                    principal: Principal::Admin(response.admin),
                })
            }
        };

        match attempt {
            Ok(session) => {
                self.store.save(&session)?;
                info!("Signed in admin {}", session.principal.id());
                self.admin = Some(session.clone());
                Ok(session)
            }
            Err(err) => {
                warn!("Admin sign-in failed: {}", err);
                self.admin = None;
                if let Err(clear_err) = self.store.clear(SessionKind::Admin) {
                    warn!("Failed to clear admin session: {}", clear_err);
                }
                Err(err)
            }
        }
    }

    /// Signs the investor out.
    pub fn clear(&mut self) -> Result<()> {
        self.user = None;
        self.store.clear(SessionKind::User)?;
        info!("Signed out user");
        Ok(())
    }

    pub fn clear_admin(&mut self) -> Result<()> {
        self.admin = None;
        self.store.clear(SessionKind::Admin)?;
        info!("Signed out admin");
        Ok(())
    }

    /// Records the wallet balance reported by the latest wallet call.
    pub fn update_wallet_balance(&mut self, balance: Decimal) -> Result<()> {
        let Some(session) = self.user.as_mut() else {
            return Err(Error::Unauthorized("Not signed in".to_string()));
        };
        if let Principal::User(user) = &mut session.principal {
            user.wallet_balance = Some(balance);
        }
        self.store.save(session)
    }

    /// Client carrying the investor's bearer token.
    pub fn user_client(&self, base: &UrbanRoofClient) -> Result<UrbanRoofClient> {
        let session = self
            .user
            .as_ref()
            .ok_or_else(|| Error::Unauthorized("Not signed in".to_string()))?;
        base.with_token(&session.token)
    }

    /// Client carrying the admin's bearer token.
    pub fn admin_client(&self, base: &UrbanRoofClient) -> Result<UrbanRoofClient> {
        let session = self
            .admin
            .as_ref()
            .ok_or_else(|| Error::Unauthorized("Admin not signed in".to_string()))?;
        base.with_token(&session.token)
    }
}
