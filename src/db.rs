use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqliteConnection, SqlitePool, Transaction,
};
use tracing::{debug, info};

use crate::config::AppConfig;

/// Open the pool behind `DATABASE_URL`, creating the database file if missing.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse database url {}", config.database_url))?
        .create_if_missing(true);
    let db = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Create the `user` table if it does not exist yet. Safe to call repeatedly.
pub async fn initialize(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            id       INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            email    TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create user table")?;
    info!("schema ready");
    Ok(())
}

/// One pooled connection inside a transaction, scoped to a single request.
///
/// Work done through the session only becomes visible after [`Session::commit`].
/// Dropping it on any other path rolls back and hands the connection back
/// to the pool.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

pub async fn open_session(db: &SqlitePool) -> Result<Session, sqlx::Error> {
    let tx = db.begin().await?;
    debug!("session opened");
    Ok(Session { tx })
}

impl Session {
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await?;
        debug!("session committed");
        Ok(())
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.tx
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tx
    }
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // A single long-lived connection: every new `:memory:` connection is a fresh database.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    initialize(&db).await.expect("schema");
    db
}
