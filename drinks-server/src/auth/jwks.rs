//! Trusted signing keys
//!
//! [`RemoteKeySource`] fetches the issuer's JWKS document. Responses are
//! optionally cached for a fixed TTL; every token is still verified against
//! whatever key set is current.

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Error)]
pub enum KeySourceError {
    #[error("key set request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("key set is not valid JWKS: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies the key set tokens are verified against
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_set(&self) -> Result<Arc<JwkSet>, KeySourceError>;
}

/// Fixed key set, for tests and for deployments with pinned keys
#[derive(Debug, Clone)]
pub struct StaticKeySource {
    keys: Arc<JwkSet>,
}

impl StaticKeySource {
    pub fn new(keys: JwkSet) -> Self {
        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, KeySourceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    async fn key_set(&self) -> Result<Arc<JwkSet>, KeySourceError> {
        Ok(self.keys.clone())
    }
}

struct CachedKeys {
    keys: Arc<JwkSet>,
    expires_at: Instant,
}

/// Key set fetched from the issuer's well-known endpoint
#[derive(Clone)]
pub struct RemoteKeySource {
    client: reqwest::Client,
    url: String,
    /// `None` fetches on every call
    ttl: Option<Duration>,
    cache: Arc<RwLock<Option<CachedKeys>>>,
}

impl RemoteKeySource {
    pub fn new(url: impl Into<String>, ttl: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            ttl,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    async fn fetch(&self) -> Result<JwkSet, KeySourceError> {
        let keys = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;
        tracing::debug!(url = %self.url, count = keys.keys.len(), "Fetched signing keys");
        Ok(keys)
    }
}

#[async_trait]
impl KeySource for RemoteKeySource {
    async fn key_set(&self) -> Result<Arc<JwkSet>, KeySourceError> {
        let Some(ttl) = self.ttl else {
            return Ok(Arc::new(self.fetch().await?));
        };

        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.as_ref()
                && entry.expires_at > Instant::now()
            {
                return Ok(entry.keys.clone());
            }
        }

        let keys = Arc::new(self.fetch().await?);
        *self.cache.write().await = Some(CachedKeys {
            keys: keys.clone(),
            expires_at: Instant::now() + ttl,
        });
        Ok(keys)
    }
}
