use crate::db::EntityStore;
use crate::handlers::{favorites, people, planets, users};
use axum::{
    Router,
    routing::{get, post},
};

#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
}

impl AppState {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }
}

/// Build the full route table. `/user/favs` must be registered alongside
/// `/user/{id}`; axum prefers the literal segment, so both coexist.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/user", post(users::add_user))
        .route("/user/favs", get(favorites::get_user_favs))
        .route(
            "/user/{id}",
            get(users::get_user).delete(users::delete_user),
        )
        .route(
            "/planet",
            get(planets::list_planets).post(planets::add_planet),
        )
        .route(
            "/planet/{id}",
            get(planets::get_planet).delete(planets::delete_planet),
        )
        .route(
            "/people",
            get(people::list_people).post(people::add_people),
        )
        .route(
            "/people/{id}",
            get(people::get_people).delete(people::delete_people),
        )
        .route(
            "/fav/planet/{planet_id}",
            post(favorites::add_fav_planet).delete(favorites::delete_fav_planet),
        )
        .route(
            "/fav/people/{people_id}",
            post(favorites::add_fav_people).delete(favorites::delete_fav_people),
        )
        .with_state(state)
}
