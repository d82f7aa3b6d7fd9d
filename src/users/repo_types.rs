use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,          // assigned by sqlite on insert
    pub username: String,
    pub email: String,
    pub password: String, // stored as given
}
