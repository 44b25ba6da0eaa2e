//! SQL DDL for initializing the entity tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on every table
/// - unique columns mirror the entity contract (`user.email`, `planet.name`,
///   every `people` column)
/// - favorite rows carry real foreign keys; deleting a user or a target row
///   cascades into its favorites
/// - `fav_*.name`/`description` are never written by the API but kept for
///   wire compatibility
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS planet (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE,
    description TEXT UNIQUE,
    race TEXT UNIQUE
);

CREATE TABLE IF NOT EXISTS fav_planet (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
    planet_id INTEGER NOT NULL REFERENCES planet(id) ON DELETE CASCADE,
    name TEXT NULL,
    description TEXT NULL
);

CREATE TABLE IF NOT EXISTS fav_people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES user(id) ON DELETE CASCADE,
    people_id INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
    name TEXT NULL,
    description TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_fav_planet_user_id ON fav_planet(user_id);
CREATE INDEX IF NOT EXISTS idx_fav_people_user_id ON fav_people(user_id);
"#;
