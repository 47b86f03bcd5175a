//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, ClickWithCampaign, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for click storage and retrieval.
///
/// Uses the runtime query API with bound parameters; idempotency of
/// registration comes from the `(affiliate_id, click_token)` unique
/// constraint plus `ON CONFLICT DO NOTHING`.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert_if_absent(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO clicks (affiliate_id, campaign_id, click_token)
            VALUES ($1, $2, $3)
            ON CONFLICT (affiliate_id, click_token) DO NOTHING
            "#,
        )
        .bind(new_click.affiliate_id)
        .bind(new_click.campaign_id)
        .bind(&new_click.click_token)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_token(
        &self,
        affiliate_id: i64,
        click_token: &str,
    ) -> Result<Option<Click>, AppError> {
        let row = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, affiliate_id, campaign_id, click_token, created_at
            FROM clicks
            WHERE affiliate_id = $1 AND click_token = $2
            "#,
        )
        .bind(affiliate_id)
        .bind(click_token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ClickWithCampaign>, AppError> {
        let rows = sqlx::query_as::<_, ClickWithCampaign>(
            r#"
            SELECT c.id, c.affiliate_id, c.campaign_id, cam.name AS campaign_name,
                   c.click_token, c.created_at
            FROM clicks c
            JOIN campaigns cam ON c.campaign_id = cam.id
            WHERE c.affiliate_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
