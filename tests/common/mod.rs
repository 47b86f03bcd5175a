#![allow(dead_code)]

//! Shared test fixtures: an in-memory store implementing the repository
//! traits, and helpers to build a test server around it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;

use affiliate_tracker::application::services::{QueryService, TrackingService};
use affiliate_tracker::domain::entities::{
    Affiliate, Campaign, Click, ClickWithCampaign, Conversion, ConversionWithClick, NewClick,
    NewConversion,
};
use affiliate_tracker::domain::repositories::{
    AffiliateRepository, ClickRepository, ConversionRepository,
};
use affiliate_tracker::error::AppError;
use affiliate_tracker::routes::app_router;
use affiliate_tracker::state::AppState;

#[derive(Default)]
struct Inner {
    affiliates: Vec<Affiliate>,
    campaigns: Vec<Campaign>,
    clicks: Vec<Click>,
    conversions: Vec<Conversion>,
    next_click_id: i64,
    next_conversion_id: i64,
}

/// In-memory store mirroring the PostgreSQL constraints: unique
/// (affiliate, token) on clicks, unique click reference on conversions, and
/// foreign keys from clicks to affiliates and campaigns.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self {
            inner: Mutex::new(Inner {
                affiliates: vec![
                    Affiliate {
                        id: 1,
                        name: "BrightClicks".to_string(),
                    },
                    Affiliate {
                        id: 2,
                        name: "Acme Media".to_string(),
                    },
                ],
                campaigns: vec![
                    Campaign {
                        id: 1,
                        name: "Summer Sale".to_string(),
                    },
                    Campaign {
                        id: 2,
                        name: "Holiday Promo".to_string(),
                    },
                ],
                clicks: Vec::new(),
                conversions: Vec::new(),
                next_click_id: 1,
                next_conversion_id: 1,
            }),
        }
    }

    pub fn click_count(&self) -> usize {
        self.inner.lock().unwrap().clicks.len()
    }

    pub fn conversion_count(&self) -> usize {
        self.inner.lock().unwrap().conversions.len()
    }

    fn campaign_name(inner: &Inner, campaign_id: i64) -> String {
        inner
            .campaigns
            .iter()
            .find(|c| c.id == campaign_id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AffiliateRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Affiliate>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut affiliates = inner.affiliates.clone();
        affiliates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(affiliates)
    }
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn insert_if_absent(&self, new_click: NewClick) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        // Foreign keys, as in the real schema.
        if !inner.affiliates.iter().any(|a| a.id == new_click.affiliate_id)
            || !inner.campaigns.iter().any(|c| c.id == new_click.campaign_id)
        {
            return Err(AppError::InvalidReference);
        }
        let exists = inner.clicks.iter().any(|c| {
            c.affiliate_id == new_click.affiliate_id && c.click_token == new_click.click_token
        });
        if !exists {
            let id = inner.next_click_id;
            inner.next_click_id += 1;
            inner.clicks.push(Click {
                id,
                affiliate_id: new_click.affiliate_id,
                campaign_id: new_click.campaign_id,
                click_token: new_click.click_token,
                created_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn find_by_token(
        &self,
        affiliate_id: i64,
        click_token: &str,
    ) -> Result<Option<Click>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .clicks
            .iter()
            .find(|c| c.affiliate_id == affiliate_id && c.click_token == click_token)
            .cloned())
    }

    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ClickWithCampaign>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<ClickWithCampaign> = inner
            .clicks
            .iter()
            .filter(|c| c.affiliate_id == affiliate_id)
            .map(|c| ClickWithCampaign {
                id: c.id,
                affiliate_id: c.affiliate_id,
                campaign_id: c.campaign_id,
                campaign_name: Self::campaign_name(&inner, c.campaign_id),
                click_token: c.click_token.clone(),
                created_at: c.created_at,
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

#[async_trait]
impl ConversionRepository for MemoryStore {
    async fn exists_for_click(&self, click_id: i64) -> Result<bool, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.conversions.iter().any(|c| c.click_id == click_id))
    }

    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError> {
        let mut inner = self.inner.lock().unwrap();
        // Unique constraint on the click reference, as in the real schema.
        if inner
            .conversions
            .iter()
            .any(|c| c.click_id == new_conversion.click_id)
        {
            return Err(AppError::DuplicateConversion);
        }
        let id = inner.next_conversion_id;
        inner.next_conversion_id += 1;
        let conversion = Conversion {
            id,
            click_id: new_conversion.click_id,
            amount: new_conversion.amount,
            currency: new_conversion.currency,
            created_at: Utc::now(),
        };
        inner.conversions.push(conversion.clone());
        Ok(conversion)
    }

    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ConversionWithClick>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<ConversionWithClick> = inner
            .conversions
            .iter()
            .filter_map(|conv| {
                let click = inner
                    .clicks
                    .iter()
                    .find(|c| c.id == conv.click_id && c.affiliate_id == affiliate_id)?;
                Some(ConversionWithClick {
                    id: conv.id,
                    click_id: conv.click_id,
                    amount: conv.amount,
                    currency: conv.currency.clone(),
                    created_at: conv.created_at,
                    click_token: click.click_token.clone(),
                    campaign_name: Self::campaign_name(&inner, click.campaign_id),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

/// Builds application state over a shared in-memory store.
pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    let tracking_service = Arc::new(TrackingService::new(store.clone(), store.clone()));
    let query_service = Arc::new(QueryService::new(store.clone(), store.clone(), store));
    AppState::new(tracking_service, query_service)
}

/// Spins up a test server with a freshly seeded store.
pub fn test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    let server = TestServer::new(app_router(test_state(store.clone()))).unwrap();
    (server, store)
}
