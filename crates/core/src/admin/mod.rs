//! Admin module - admin console read models.

mod admin_model;

pub use admin_model::DashboardMetrics;
