//! Shared application state

use std::sync::Arc;

use crate::auth::{RemoteKeySource, TokenVerifier};
use crate::config::Config;
use crate::db::{DrinkStore, PgDrinkStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Cloned into every handler and middleware
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DrinkStore>,
    verifier: TokenVerifier,
}

impl AppState {
    /// Connect to PostgreSQL and wire the issuer's key set
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store = PgDrinkStore::connect(&config.database_url, config.db_max_connections).await?;
        if config.reset_database {
            store.reset().await?;
        }

        let keys = RemoteKeySource::new(config.jwks_url(), config.jwks_cache_ttl);
        let verifier = TokenVerifier::new(Arc::new(keys), &config.api_audience, config.issuer());

        tracing::info!(
            issuer = %verifier.issuer(),
            audience = %verifier.audience(),
            "Token verifier ready"
        );

        Ok(Self::with_parts(Arc::new(store), verifier))
    }

    pub fn with_parts(store: Arc<dyn DrinkStore>, verifier: TokenVerifier) -> Self {
        Self { store, verifier }
    }

    pub fn store(&self) -> &dyn DrinkStore {
        self.store.as_ref()
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
