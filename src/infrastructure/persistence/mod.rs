//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits over a shared
//! `sqlx::PgPool`, using the runtime query API with bound parameters.
//!
//! # Repositories
//!
//! - [`PgAffiliateRepository`] - Affiliate reads
//! - [`PgClickRepository`] - Click registration and lookups
//! - [`PgConversionRepository`] - Conversion attribution and lookups

pub mod pg_affiliate_repository;
pub mod pg_click_repository;
pub mod pg_conversion_repository;

pub use pg_affiliate_repository::PgAffiliateRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_conversion_repository::PgConversionRepository;
