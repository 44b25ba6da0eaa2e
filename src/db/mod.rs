//! Database module: models, schema and the entity store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and their wire forms
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: `EntityStore`, the typed CRUD surface over the pool

pub mod models;
pub mod schema;
pub mod sqlite;

use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub use models::{FavPeople, FavPlanet, People, Planet, User, UserFavorites, UserPublic};
pub use schema::SQLITE_INIT;
pub use sqlite::{EntityStore, SqlitePool};

/// Open (creating if missing) the SQLite database at `database_url` and
/// return a schema-initialized store.
pub async fn connect(database_url: &str) -> Result<EntityStore, ApiError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    let store = EntityStore::new(pool);
    store.init_schema().await?;
    Ok(store)
}
