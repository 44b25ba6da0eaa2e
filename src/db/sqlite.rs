use crate::db::models::{
    FavPeople, FavPlanet, FavoriteRef, People, Planet, User, UserFavorites,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;
use sqlx::{Pool, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

/// Typed CRUD surface over the entity tables.
///
/// Every method is one query or one short transaction on the shared pool, so
/// a clone of the store can be used from any number of concurrent requests.
#[derive(Clone)]
pub struct EntityStore {
    pool: SqlitePool,
}

impl EntityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute statements one by one (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // --- users ---

    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let res = sqlx::query("INSERT INTO user (name, email, password) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(password)
            .execute(&self.pool)
            .await
            .map_err(ApiError::from_write)?;
        Ok(User {
            id: res.last_insert_rowid(),
            name: Some(name.to_string()),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, ApiError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM user WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM user ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Returns false when no such row existed. Favorites cascade.
    pub async fn delete_user(&self, id: i64) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM user WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    // --- planets ---

    pub async fn insert_planet(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Planet, ApiError> {
        let res = sqlx::query("INSERT INTO planet (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(ApiError::from_write)?;
        Ok(Planet {
            id: res.last_insert_rowid(),
            name: name.to_string(),
            description: Some(description.to_string()),
        })
    }

    pub async fn get_planet(&self, id: i64) -> Result<Option<Planet>, ApiError> {
        let row = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description FROM planet WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_planets(&self) -> Result<Vec<Planet>, ApiError> {
        let rows = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description FROM planet ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_planet(&self, id: i64) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM planet WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    // --- people ---

    pub async fn insert_people(
        &self,
        name: &str,
        description: &str,
        race: &str,
    ) -> Result<People, ApiError> {
        let res = sqlx::query("INSERT INTO people (name, description, race) VALUES (?, ?, ?)")
            .bind(name)
            .bind(description)
            .bind(race)
            .execute(&self.pool)
            .await
            .map_err(ApiError::from_write)?;
        Ok(People {
            id: res.last_insert_rowid(),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            race: Some(race.to_string()),
        })
    }

    pub async fn get_people(&self, id: i64) -> Result<Option<People>, ApiError> {
        let row = sqlx::query_as::<_, People>(
            "SELECT id, name, description, race FROM people WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_people(&self) -> Result<Vec<People>, ApiError> {
        let rows = sqlx::query_as::<_, People>(
            "SELECT id, name, description, race FROM people ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_people(&self, id: i64) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    // --- favorites ---

    /// Link a planet to a user. Both rows are verified inside the same
    /// transaction, so a not-found outcome persists nothing.
    pub async fn insert_fav_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<FavPlanet, ApiError> {
        let mut tx = self.pool.begin().await?;

        let user: Option<(i64,)> = sqlx::query_as("SELECT id FROM user WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if user.is_none() {
            return Err(ApiError::NotFound("User"));
        }
        let planet: Option<(i64,)> = sqlx::query_as("SELECT id FROM planet WHERE id = ?")
            .bind(planet_id)
            .fetch_optional(&mut *tx)
            .await?;
        if planet.is_none() {
            return Err(ApiError::NotFound("Planet"));
        }

        let res = sqlx::query("INSERT INTO fav_planet (user_id, planet_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(planet_id)
            .execute(&mut *tx)
            .await
            .map_err(ApiError::from_write)?;
        let id = res.last_insert_rowid();
        tx.commit().await?;

        Ok(FavPlanet {
            id,
            user_id,
            planet_id,
            name: None,
            description: None,
        })
    }

    pub async fn insert_fav_people(
        &self,
        user_id: i64,
        people_id: i64,
    ) -> Result<FavPeople, ApiError> {
        let mut tx = self.pool.begin().await?;

        let user: Option<(i64,)> = sqlx::query_as("SELECT id FROM user WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if user.is_none() {
            return Err(ApiError::NotFound("User"));
        }
        let people: Option<(i64,)> = sqlx::query_as("SELECT id FROM people WHERE id = ?")
            .bind(people_id)
            .fetch_optional(&mut *tx)
            .await?;
        if people.is_none() {
            return Err(ApiError::NotFound("People"));
        }

        let res = sqlx::query("INSERT INTO fav_people (user_id, people_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(people_id)
            .execute(&mut *tx)
            .await
            .map_err(ApiError::from_write)?;
        let id = res.last_insert_rowid();
        tx.commit().await?;

        Ok(FavPeople {
            id,
            user_id,
            people_id,
            name: None,
            description: None,
        })
    }

    /// Duplicate (user_id, planet_id) pairs are allowed; takes the oldest row.
    pub async fn find_fav_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<Option<FavPlanet>, ApiError> {
        let row = sqlx::query_as::<_, FavPlanet>(
            r#"SELECT id, user_id, planet_id, name, description
               FROM fav_planet WHERE user_id = ? AND planet_id = ?
               ORDER BY id LIMIT 1"#,
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_fav_people(
        &self,
        user_id: i64,
        people_id: i64,
    ) -> Result<Option<FavPeople>, ApiError> {
        let row = sqlx::query_as::<_, FavPeople>(
            r#"SELECT id, user_id, people_id, name, description
               FROM fav_people WHERE user_id = ? AND people_id = ?
               ORDER BY id LIMIT 1"#,
        )
        .bind(user_id)
        .bind(people_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Remove the oldest matching favorite-planet row, if any.
    pub async fn delete_fav_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<bool, ApiError> {
        let Some(fav) = self.find_fav_planet(user_id, planet_id).await? else {
            return Ok(false);
        };
        let res = sqlx::query("DELETE FROM fav_planet WHERE id = ?")
            .bind(fav.id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete_fav_people(
        &self,
        user_id: i64,
        people_id: i64,
    ) -> Result<bool, ApiError> {
        let Some(fav) = self.find_fav_people(user_id, people_id).await? else {
            return Ok(false);
        };
        let res = sqlx::query("DELETE FROM fav_people WHERE id = ?")
            .bind(fav.id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Favorites of one user, joined to the target rows for their names.
    /// Returns `None` when the user itself does not exist.
    pub async fn list_favorites(
        &self,
        user_id: i64,
    ) -> Result<Option<UserFavorites>, ApiError> {
        let user: Option<(i64,)> = sqlx::query_as("SELECT id FROM user WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if user.is_none() {
            return Ok(None);
        }

        let favorite_planets = sqlx::query_as::<_, FavoriteRef>(
            r#"SELECT f.planet_id AS id, p.name AS name
               FROM fav_planet f JOIN planet p ON p.id = f.planet_id
               WHERE f.user_id = ? ORDER BY f.id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let favorite_people = sqlx::query_as::<_, FavoriteRef>(
            r#"SELECT f.people_id AS id, p.name AS name
               FROM fav_people f JOIN people p ON p.id = f.people_id
               WHERE f.user_id = ? ORDER BY f.id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(UserFavorites {
            favorite_planets,
            favorite_people,
        }))
    }
}
