use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::initialize(&db).await?;
        Ok(Self { db, config })
    }

    #[cfg(test)]
    pub async fn fake() -> Self {
        let db = db::memory_pool().await;
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
        });
        Self { db, config }
    }
}
