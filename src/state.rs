use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::DomainQueryService;
use crate::infrastructure::persistence::SqliteDomainRecordRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub query_service: Arc<DomainQueryService<SqliteDomainRecordRepository>>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let repository = Arc::new(SqliteDomainRecordRepository::new(db.clone()));
        Self {
            db,
            query_service: Arc::new(DomainQueryService::new(repository)),
        }
    }
}
