use std::{sync::Arc, time::Instant};

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();

        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        Ok(DatabaseHealthStatus {
            healthy: true,
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn test_readness_pings_shared_connection() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let repository = PostgresHealthCheckRepository::new(Arc::clone(&db)).clone();

        let status = repository.readness().await.unwrap();

        assert!(status.healthy);
        assert_eq!(Arc::strong_count(&db), 2);
    }
}
