//! Drinks Server - coffee shop menu API
//!
//! Public menu reads plus barista/manager writes guarded by bearer tokens
//! from an external identity provider.
//!
//! ```text
//! drinks-server/src/
//! ├── api/       # routes, handlers, extractors
//! ├── auth/      # token validation, key source, permission gate
//! ├── db/        # drink store (PostgreSQL, in-memory)
//! ├── config.rs  # environment configuration
//! └── state.rs   # shared application state
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;

pub use api::router;
pub use auth::{TokenClaims, TokenVerifier};
pub use config::Config;
pub use db::{DrinkStore, MemoryDrinkStore, PgDrinkStore, StoreError};
pub use state::AppState;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
