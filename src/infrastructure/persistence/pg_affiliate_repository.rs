//! PostgreSQL implementation of the affiliate repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Affiliate;
use crate::domain::repositories::AffiliateRepository;
use crate::error::AppError;

/// PostgreSQL repository for affiliate reads.
pub struct PgAffiliateRepository {
    pool: Arc<PgPool>,
}

impl PgAffiliateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AffiliateRepository for PgAffiliateRepository {
    async fn list_all(&self) -> Result<Vec<Affiliate>, AppError> {
        let rows = sqlx::query_as::<_, Affiliate>(
            "SELECT id, name FROM affiliates ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
