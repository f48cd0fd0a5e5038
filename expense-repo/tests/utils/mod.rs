use expense_repo::expense_repo::ExpenseRepo;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use tracing::warn;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Builds the repo under test. The SQLx repo needs a `config_test.toml` pointing at a
/// PostgreSQL database; without one the case is skipped by returning `None`.
pub async fn build_repo(repo_type: RepoType) -> Option<Arc<dyn ExpenseRepo>> {
    match repo_type {
        RepoType::SQLx => {
            let Ok(config) = fs::read_to_string("config_test.toml") else {
                warn!("config_test.toml not found, skipping SQLx repo test");
                return None;
            };
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            let repo = expense_repo::sqlx_repo::create_repo(&config.database_url, 1)
                .await
                .unwrap();
            Some(repo)
        }
        RepoType::Mem => Some(expense_repo::mem_repo::create_repo()),
    }
}
