use std::sync::Arc;

use base64::Engine;
use expense_lib::auth::Credentials;
use expense_repo::expense_repo::ExpenseRepo;
use rstest::*;
use tracing::info;
use tracing::Level;

pub mod mock;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "hunter2";

macro_rules! build_app {
    ($expense_repo:expr) => {{
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(
                $expense_repo,
                crate::utils::credentials(),
            ));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_expense {
    (&$service:ident, $new_expense:ident) => {{
        let request = TestRequest::post()
            .uri("/expenses")
            .set_json(&$new_expense)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::CREATED,
            "Got {} response when creating expense",
            response.status()
        );
        let expense_id: i32 = test::read_body_json(response).await;
        expense_id
    }};
}

pub fn credentials() -> Credentials {
    Credentials::new(USERNAME, PASSWORD)
}

pub fn basic_auth(username: &str, password: &str) -> String {
    let engine = base64::engine::general_purpose::STANDARD;
    format!("Basic {}", engine.encode(format!("{}:{}", username, password)))
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn ExpenseRepo> {
    expense_repo::mem_repo::create_repo()
}
