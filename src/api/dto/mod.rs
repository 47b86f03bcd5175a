//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep tracking parameters as raw strings; parsing belongs to
//! the validation layer so every violation is reported at once.

pub mod affiliates;
pub mod health;
pub mod tracking;
