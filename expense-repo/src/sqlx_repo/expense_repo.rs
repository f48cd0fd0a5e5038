use crate::expense_repo::ExpenseRepoError::ExpenseNotFound;
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{query, query_as, query_scalar};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct ExpenseEntry {
    id: i32,
    title: Option<String>,
    amount: Option<Decimal>,
    note: Option<String>,
    tags: Option<Vec<String>>,
}

// Columns are nullable in the table, rows written by this service always fill them.
impl From<ExpenseEntry> for Expense {
    fn from(value: ExpenseEntry) -> Self {
        Expense::new(
            value.id,
            value.title.unwrap_or_default(),
            value.amount.unwrap_or(Decimal::ZERO),
            value.note,
            value.tags.unwrap_or_default(),
        )
    }
}

#[async_trait]
impl ExpenseRepo for SQLxRepo {
    #[instrument(skip(self, new_expense))]
    async fn create_expense(&self, new_expense: NewExpense) -> Result<i32, ExpenseRepoError> {
        let id: i32 = query_scalar(
            "INSERT INTO expenses (title, amount, note, tags) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_expense.title)
        .bind(new_expense.amount)
        .bind(&new_expense.note)
        .bind(new_expense.tags.as_slice())
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert expense")?;
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let expenses = query_as::<_, ExpenseEntry>(
            "SELECT id, title, amount, note, tags FROM expenses",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to get expenses")?
        .into_iter()
        .map(|expense_entry| expense_entry.into())
        .collect();
        Ok(expenses)
    }

    #[instrument(skip(self))]
    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        let expense_entry: Option<ExpenseEntry> =
            query_as("SELECT id, title, amount, note, tags FROM expenses WHERE id = $1")
                .bind(expense_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get expense {}", expense_id))?;
        expense_entry
            .map(|e| e.into())
            .ok_or(ExpenseNotFound(expense_id))
    }

    #[instrument(skip(self, updated_expense))]
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<(), ExpenseRepoError> {
        query("UPDATE expenses SET title = $2, amount = $3, note = $4, tags = $5 WHERE id = $1")
            .bind(expense_id)
            .bind(&updated_expense.title)
            .bind(updated_expense.amount)
            .bind(&updated_expense.note)
            .bind(updated_expense.tags.as_slice())
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update expense {}", expense_id))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_expense(&self, expense_id: i32) -> Result<(), ExpenseRepoError> {
        query("DELETE FROM expenses WHERE id = $1")
            .bind(expense_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete expense {}", expense_id))?;
        Ok(())
    }
}
