use async_trait::async_trait;
use contracts::domain::a006_banner::aggregate::{Banner, ReorderRequest};
use contracts::domain::common::CatalogEntity;
use gloo_net::http::Request;

use crate::shared::admin::HttpResourceApi;
use crate::shared::api_utils::api_url;
use crate::shared::http::{authorized, ensure_ok, read_json, ApiError};

/// Active banners for the storefront carousel (`GET /api/banners`)
pub async fn fetch_active_banners() -> Result<Vec<Banner>, ApiError> {
    let response = authorized(Request::get(&api_url(&Banner::endpoint())))
        .send()
        .await?;
    read_json(response).await
}

/// Persists a new carousel order
#[async_trait(?Send)]
pub trait RankApi {
    async fn reorder(&self, request: &ReorderRequest) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl RankApi for HttpResourceApi<Banner> {
    async fn reorder(&self, request: &ReorderRequest) -> Result<(), ApiError> {
        let url = api_url(&format!("{}/reordenar", Banner::endpoint()));
        let response = authorized(Request::put(&url)).json(request)?.send().await?;
        ensure_ok(response).map(|_| ())
    }
}
