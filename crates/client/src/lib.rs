//! Urban Roof client - HTTP gateway, sessions and screen flows.
//!
//! `UrbanRoofClient` speaks the backend's JSON envelope protocol and implements
//! one trait per service (`api`). `session` keeps user and admin sign-ins
//! apart and persists them; `flows` combines calls the way the investor
//! screens do.

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod flows;
pub mod session;

pub use client::UrbanRoofClient;
pub use config::ClientConfig;
pub use envelope::ApiEnvelope;
pub use session::{
    AdminLoginStrategy, FileSessionStore, MemorySessionStore, Session, SessionManager,
    SessionStore,
};
