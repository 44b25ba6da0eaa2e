//! Request handlers, one module per resource.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
