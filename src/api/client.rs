use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::FetchError;
use crate::models::Response;

/// Client for the transactions backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Url, token: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            token,
        }
    }

    /// URL of the transactions collection. A base without a trailing slash
    /// still keeps its last path segment (`/api` → `/api/transactions`).
    pub fn transactions_url(&self) -> Result<Url, FetchError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("transactions")?)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Ignoring unusable API token: {e}"),
            }
        }
        headers
    }

    /// `GET transactions`, once. No retries and no timeout at this layer.
    pub async fn fetch_transactions(&self) -> Result<Response, FetchError> {
        let url = self.transactions_url()?;
        debug!(%url, "fetching transactions");

        let response = self
            .http_client
            .get(url)
            .headers(self.headers())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Backend returned {}: {}", status.as_u16(), body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Response::from_json(&body).map_err(|e| {
            warn!("Rejected transactions payload: {e}");
            FetchError::InvalidPayload(e)
        })
    }
}
