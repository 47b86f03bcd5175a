//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`AffiliateRepository`] - Read-only affiliate access
//! - [`ClickRepository`] - Idempotent click registration and lookups
//! - [`ConversionRepository`] - Conversion attribution and lookups

pub mod affiliate_repository;
pub mod click_repository;
pub mod conversion_repository;

pub use affiliate_repository::AffiliateRepository;
pub use click_repository::ClickRepository;
pub use conversion_repository::ConversionRepository;

#[cfg(test)]
pub use affiliate_repository::MockAffiliateRepository;
#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use conversion_repository::MockConversionRepository;
