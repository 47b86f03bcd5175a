//! Campaign entity.

/// A marketing campaign that clicks are attributed to.
///
/// Like affiliates, campaigns are seed/admin data and never mutated by the
/// service.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
}
