use crate::expense_repo::ExpenseRepo;
use std::sync::Arc;

mod expense_repo;

pub use expense_repo::MemExpenseRepo;

pub fn create_repo() -> Arc<dyn ExpenseRepo> {
    Arc::new(MemExpenseRepo::new())
}
