//! Session module - persisted sign-in state for users and admins.

mod session_manager;
mod session_model;
mod session_store;

pub use session_manager::{AdminLoginStrategy, SessionManager, ADMIN_ACCESS_DENIED_MESSAGE};
pub use session_model::{Principal, Session, SessionKind};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
