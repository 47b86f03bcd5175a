//! Affiliate entity.

/// A partner whose traffic is tracked.
///
/// Affiliates are provisioned out-of-band (seed data or admin tooling) and are
/// immutable once created; the service only reads them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Affiliate {
    pub id: i64,
    pub name: String,
}
