#[macro_use]
extern crate actix_web;

use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{HttpResponse, Responder};
use expense_repo::expense_repo::ExpenseRepo;

use auth::Credentials;

pub mod auth;
pub mod config;
pub mod error;
pub mod expense;
pub mod tracing;

pub const GREETING: &str = "Hello, World!";

#[get("/")]
pub async fn greeting() -> impl Responder {
    HttpResponse::Ok().json(GREETING)
}

/// Registers the store handle, the request decoding configuration and every route. The
/// credentials only guard listing all expenses.
pub fn app_config_func(
    expense_repo: Arc<dyn ExpenseRepo>,
    credentials: Credentials,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(expense_repo))
            .app_data(error::json_config())
            .app_data(error::path_config())
            .service(greeting)
            .service(expense::expense_service(credentials));
    }
}
