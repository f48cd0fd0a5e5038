use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use expense_repo::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};

pub const BROKEN_REPO_CAUSE: &str = "connection refused";

/// Repo whose every call fails the way a lost database connection would.
pub struct BrokenRepo;

impl BrokenRepo {
    pub fn create() -> Arc<dyn ExpenseRepo> {
        Arc::new(BrokenRepo)
    }

    fn error(operation: &str) -> ExpenseRepoError {
        ExpenseRepoError::Other(anyhow!(BROKEN_REPO_CAUSE).context(operation.to_owned()))
    }
}

#[async_trait]
impl ExpenseRepo for BrokenRepo {
    async fn create_expense(&self, _new_expense: NewExpense) -> Result<i32, ExpenseRepoError> {
        Err(Self::error("Unable to insert expense"))
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        Err(Self::error("Unable to get expenses"))
    }

    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        Err(Self::error(&format!("Unable to get expense {}", expense_id)))
    }

    async fn update_expense(
        &self,
        expense_id: i32,
        _updated_expense: NewExpense,
    ) -> Result<(), ExpenseRepoError> {
        Err(Self::error(&format!("Unable to update expense {}", expense_id)))
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<(), ExpenseRepoError> {
        Err(Self::error(&format!("Unable to delete expense {}", expense_id)))
    }
}
