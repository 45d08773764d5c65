//! In-memory drink store

use async_trait::async_trait;
use shared::models::{Drink, DrinkUpdate, NewDrink};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{DrinkStore, StoreError, StoreResult, default_drink};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    drinks: BTreeMap<i64, Drink>,
}

impl Inner {
    fn title_taken(&self, title: &str, except: Option<i64>) -> bool {
        self.drinks
            .values()
            .any(|d| d.title == title && Some(d.id) != except)
    }

    fn insert(&mut self, drink: NewDrink) -> StoreResult<Drink> {
        if self.title_taken(&drink.title, None) {
            return Err(StoreError::DuplicateTitle(drink.title));
        }
        self.next_id += 1;
        let drink = Drink {
            id: self.next_id,
            title: drink.title,
            recipe: drink.recipe,
        };
        self.drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }
}

/// Same contract as the PostgreSQL store, held in a `BTreeMap`
#[derive(Debug, Default)]
pub struct MemoryDrinkStore {
    inner: RwLock<Inner>,
}

impl MemoryDrinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `drinks`, ids assigned in order
    pub fn with_drinks(drinks: impl IntoIterator<Item = NewDrink>) -> StoreResult<Self> {
        let mut inner = Inner::default();
        for drink in drinks {
            inner.insert(drink)?;
        }
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }
}

#[async_trait]
impl DrinkStore for MemoryDrinkStore {
    async fn list(&self) -> StoreResult<Vec<Drink>> {
        Ok(self.inner.read().await.drinks.values().cloned().collect())
    }

    async fn create(&self, drink: NewDrink) -> StoreResult<Drink> {
        self.inner.write().await.insert(drink)
    }

    async fn update(&self, id: i64, update: &DrinkUpdate) -> StoreResult<Drink> {
        let mut inner = self.inner.write().await;
        if !inner.drinks.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        if let Some(title) = &update.title
            && inner.title_taken(title, Some(id))
        {
            return Err(StoreError::DuplicateTitle(title.clone()));
        }
        let drink = inner.drinks.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        update.apply_to(drink);
        Ok(drink.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .drinks
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn reset(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        *inner = Inner::default();
        inner.insert(default_drink())?;
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}
