use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `user` row. `password` is stored as provided and never serialized;
/// responses go through [`UserPublic`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// The wire form of a user: everything except the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct People {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub race: Option<String>,
}

/// One user's favorite-planet link. `name`/`description` are legacy columns,
/// always NULL for rows created through the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct FavPlanet {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct FavPeople {
    pub id: i64,
    pub user_id: i64,
    pub people_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A favorite joined to its target: `id` is the TARGET's id
/// (planet or people), `name` the target's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct FavoriteRef {
    pub id: i64,
    pub name: Option<String>,
}

/// Response shape of `GET /user/favs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserFavorites {
    pub favorite_planets: Vec<FavoriteRef>,
    pub favorite_people: Vec<FavoriteRef>,
}
