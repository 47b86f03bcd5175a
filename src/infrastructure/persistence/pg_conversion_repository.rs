//! PostgreSQL implementation of the conversion repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Conversion, ConversionWithClick, NewConversion};
use crate::domain::repositories::ConversionRepository;
use crate::error::AppError;

/// PostgreSQL repository for conversion storage and retrieval.
///
/// The `conversions_click_id_key` unique constraint is the transactional
/// guard against two concurrent postbacks converting the same click; a
/// violation is translated to [`AppError::DuplicateConversion`] by the
/// error mapping.
pub struct PgConversionRepository {
    pool: Arc<PgPool>,
}

impl PgConversionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversionRepository for PgConversionRepository {
    async fn exists_for_click(&self, click_id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM conversions WHERE click_id = $1)",
        )
        .bind(click_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError> {
        let row = sqlx::query_as::<_, Conversion>(
            r#"
            INSERT INTO conversions (click_id, amount, currency)
            VALUES ($1, $2, $3)
            RETURNING id, click_id, amount, currency, created_at
            "#,
        )
        .bind(new_conversion.click_id)
        .bind(new_conversion.amount)
        .bind(&new_conversion.currency)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ConversionWithClick>, AppError> {
        let rows = sqlx::query_as::<_, ConversionWithClick>(
            r#"
            SELECT conv.id, conv.click_id, conv.amount, conv.currency, conv.created_at,
                   c.click_token, cam.name AS campaign_name
            FROM conversions conv
            JOIN clicks c ON conv.click_id = c.id
            JOIN campaigns cam ON c.campaign_id = cam.id
            WHERE c.affiliate_id = $1
            ORDER BY conv.created_at DESC, conv.id DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
