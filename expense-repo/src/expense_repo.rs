use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[async_trait]
pub trait ExpenseRepo: Sync + Send {
    /// Inserts a new expense and returns the id assigned by the store.
    async fn create_expense(&self, new_expense: NewExpense) -> Result<i32, ExpenseRepoError>;

    /// Returns every stored expense. Order is whatever the store yields.
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError>;

    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError>;

    /// Replaces every field except the id. Updating an id that does not exist is not an error.
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<(), ExpenseRepoError>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_expense(&self, expense_id: i32) -> Result<(), ExpenseRepoError>;
}

#[derive(Error, Debug)]
pub enum ExpenseRepoError {
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

impl Expense {
    pub const fn new(
        id: i32,
        title: String,
        amount: Decimal,
        note: Option<String>,
        tags: Vec<String>,
    ) -> Expense {
        Expense {
            id,
            title,
            amount,
            note,
            tags,
        }
    }
}

/// Incoming body for create and update. Only the JSON types are checked: absent
/// fields bind to their zero value and a `null` tag list binds to an empty one.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NewExpense {
    #[serde(default)]
    pub title: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewExpense {
    pub const fn new(
        title: String,
        amount: Decimal,
        note: Option<String>,
        tags: Vec<String>,
    ) -> NewExpense {
        NewExpense {
            title,
            amount,
            note,
            tags,
        }
    }

    pub fn to_expense(self, id: i32) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            note: self.note,
            tags: self.tags,
        }
    }
}
