//! HTTP handlers for site-service.

pub mod contact;
pub mod content;
pub mod health;

pub use health::{health_check, liveness, metrics, readiness_check};
