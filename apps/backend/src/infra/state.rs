use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    runtime_env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            runtime_env: RuntimeEnv::Prod,
            db_kind: None,
        }
    }

    pub fn with_env(mut self, runtime_env: RuntimeEnv) -> Self {
        self.runtime_env = runtime_env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            Some(db_kind) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(self.runtime_env, db_kind).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_memory_db_runs_migrations() {
        let state = build_state()
            .with_env(RuntimeEnv::Test)
            .with_db(DbKind::SqliteMemory)
            .build()
            .await
            .unwrap();
        let db = state.db().unwrap();
        let version = migration::get_latest_migration_version(db).await.unwrap();
        assert!(version.is_some());
    }
}
