use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use expense_repo::expense_repo::{ExpenseRepo, NewExpense};
use tracing::info;

use crate::error::HandlerError;

#[post("")]
pub async fn create_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    new_expense: web::Json<NewExpense>,
) -> Result<impl Responder, HandlerError> {
    let expense_id = expense_repo
        .create_expense(new_expense.into_inner())
        .await?;
    info!(expense_id, "created expense");
    Ok(HttpResponse::Created().json(expense_id))
}

/// Only reachable through the [crate::auth::AccessGate].
pub async fn get_all_expenses(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
) -> Result<impl Responder, HandlerError> {
    let expenses = expense_repo.get_all_expenses().await?;
    Ok(HttpResponse::Ok().json(expenses))
}

#[get("/{expense_id}")]
pub async fn get_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let expense = expense_repo.get_expense(expense_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(expense))
}

#[put("/{expense_id}")]
pub async fn update_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<i32>,
    updated_expense: web::Json<NewExpense>,
) -> Result<impl Responder, HandlerError> {
    let expense_id = expense_id.into_inner();
    expense_repo
        .update_expense(expense_id, updated_expense.into_inner())
        .await?;
    info!(expense_id, "updated expense");
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{expense_id}")]
pub async fn delete_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<i32>,
) -> Result<impl Responder, HandlerError> {
    let expense_id = expense_id.into_inner();
    expense_repo.delete_expense(expense_id).await?;
    info!(expense_id, "deleted expense");
    Ok(HttpResponse::NoContent().finish())
}
