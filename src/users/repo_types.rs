use sqlx::FromRow;
use time::Date;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String, // Argon2 PHC string
    pub name: Option<String>,
    pub birth_date: Option<Date>,
}

/// Values for a user that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub birth_date: Option<Date>,
}
