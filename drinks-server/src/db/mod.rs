//! Drink storage
//!
//! [`DrinkStore`] is the only way handlers touch persistence.
//! - [`PgDrinkStore`]: PostgreSQL via sqlx
//! - [`MemoryDrinkStore`]: in-process, for tests and local runs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use shared::AppError;
use shared::models::{Drink, DrinkUpdate, Ingredient, NewDrink, Recipe};
use thiserror::Error;

pub use memory::MemoryDrinkStore;
pub use postgres::PgDrinkStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("drink {0} not found")]
    NotFound(i64),

    #[error("drink title already exists: {0}")]
    DuplicateTitle(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored recipe is not valid: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound,
            StoreError::DuplicateTitle(title) => {
                AppError::unprocessable(format!("duplicate title {title}"))
            }
            other => AppError::internal(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DrinkStore: Send + Sync {
    /// All drinks ordered by id
    async fn list(&self) -> StoreResult<Vec<Drink>>;

    async fn create(&self, drink: NewDrink) -> StoreResult<Drink>;

    /// Apply the present fields of `update` in one write
    async fn update(&self, id: i64, update: &DrinkUpdate) -> StoreResult<Drink>;

    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Remove every drink, restart ids and insert [`default_drink`]
    async fn reset(&self) -> StoreResult<()>;

    /// Health probe
    async fn ping(&self) -> bool;
}

/// The drink a freshly reset database starts with
pub fn default_drink() -> NewDrink {
    NewDrink {
        title: "water".to_string(),
        recipe: Recipe::Many(vec![Ingredient {
            name: "water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }]),
    }
}
