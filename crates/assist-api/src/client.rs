use crate::ApiError;
use assist_core::{decode_records, Account, ApiEnvelope, Config, EmailSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Page size the backend applies when `limit` is omitted.
pub const DEFAULT_EMAIL_LIMIT: u32 = 20;

/// The three read endpoints the dashboard consumes.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_config(&self) -> Result<Config, ApiError>;
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError>;
    async fn fetch_emails(&self, processed: bool) -> Result<Vec<EmailSummary>, ApiError>;
}

#[derive(Clone)]
pub struct HttpDashboardApi {
    base: Url,
    email_limit: u32,
    http: reqwest::Client,
}

impl HttpDashboardApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            email_limit: DEFAULT_EMAIL_LIMIT,
            http: reqwest::Client::new(),
        })
    }

    pub fn with_email_limit(mut self, limit: u32) -> Self {
        self.email_limit = limit;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn config_url(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("api/config")?)
    }

    pub fn accounts_url(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("api/accounts")?)
    }

    pub fn emails_url(&self, processed: bool) -> Result<Url, ApiError> {
        let mut url = self.base.join("api/emails")?;
        url.query_pairs_mut()
            .append_pair("processed", if processed { "true" } else { "false" })
            .append_pair("limit", &self.email_limit.to_string());
        Ok(url)
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, ApiError> {
        tracing::debug!(%url, "requesting dashboard data");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The backend reports failures as HTTP 500 with a regular envelope,
        // so the body is decoded before the status is consulted.
        let envelope: ApiEnvelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(ApiError::Status(status.as_u16())),
            Err(err) => return Err(err.into()),
        };

        envelope.into_result().map_err(ApiError::Server)
    }

    async fn get_records<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ApiError> {
        let values: Vec<Value> = self.get_envelope(url.clone()).await?.unwrap_or_default();
        let (records, skipped) = decode_records(values);
        if skipped > 0 {
            tracing::warn!(%url, skipped, "dropped malformed records");
        }
        Ok(records)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_config(&self) -> Result<Config, ApiError> {
        let url = self.config_url()?;
        Ok(self.get_envelope(url).await?.unwrap_or_default())
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let url = self.accounts_url()?;
        self.get_records(url).await
    }

    async fn fetch_emails(&self, processed: bool) -> Result<Vec<EmailSummary>, ApiError> {
        let url = self.emails_url(processed)?;
        self.get_records(url).await
    }
}
