//! PostgreSQL drink store

use async_trait::async_trait;
use shared::models::{Drink, DrinkUpdate, NewDrink, Recipe};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::{DrinkStore, StoreError, StoreResult, default_drink};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, sqlx::FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: String,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = StoreError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        Ok(Drink {
            id: row.id,
            title: row.title,
            recipe: Recipe::from_stored(&row.recipe)?,
        })
    }
}

/// Map a unique violation on `title` to [`StoreError::DuplicateTitle`]
fn map_write_error(e: sqlx::Error, title: Option<&str>) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::DuplicateTitle(title.unwrap_or_default().to_string())
        }
        _ => StoreError::Database(e),
    }
}

#[derive(Clone)]
pub struct PgDrinkStore {
    pool: PgPool,
}

impl PgDrinkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run embedded migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await?;

        tracing::info!("Connected to PostgreSQL");

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DrinkStore for PgDrinkStore {
    async fn list(&self) -> StoreResult<Vec<Drink>> {
        let rows: Vec<DrinkRow> =
            sqlx::query_as("SELECT id, title, recipe FROM drinks ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Drink::try_from).collect()
    }

    async fn create(&self, drink: NewDrink) -> StoreResult<Drink> {
        let recipe = drink.recipe.to_stored()?;
        let row: DrinkRow = sqlx::query_as(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING id, title, recipe",
        )
        .bind(&drink.title)
        .bind(&recipe)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Some(drink.title.as_str())))?;
        Drink::try_from(row)
    }

    async fn update(&self, id: i64, update: &DrinkUpdate) -> StoreResult<Drink> {
        let recipe = update.recipe.as_ref().map(Recipe::to_stored).transpose()?;
        let row: Option<DrinkRow> = sqlx::query_as(
            r#"
            UPDATE drinks
            SET title = COALESCE($1, title), recipe = COALESCE($2, recipe)
            WHERE id = $3
            RETURNING id, title, recipe
            "#,
        )
        .bind(&update.title)
        .bind(&recipe)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, update.title.as_deref()))?;

        row.ok_or(StoreError::NotFound(id))?.try_into()
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let rows = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn reset(&self) -> StoreResult<()> {
        let seed = default_drink();
        let recipe = seed.recipe.to_stored()?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("TRUNCATE drinks RESTART IDENTITY")
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO drinks (title, recipe) VALUES ($1, $2)")
            .bind(&seed.title)
            .bind(&recipe)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::warn!("Drinks table reset to the default drink");
        Ok(())
    }

    async fn ping(&self) -> bool {
        self.pool.acquire().await.is_ok()
    }
}
