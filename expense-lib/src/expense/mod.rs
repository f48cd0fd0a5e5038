use actix_web::{guard, web, Scope};

use crate::auth::{AccessGate, Credentials};

mod handlers;

pub fn expense_service(credentials: Credentials) -> Scope {
    web::scope("/expenses")
        .service(handlers::create_expense)
        .service(
            web::resource("")
                .guard(guard::Get())
                .wrap(AccessGate::new(credentials))
                .to(handlers::get_all_expenses),
        )
        .service(handlers::get_expense)
        .service(handlers::update_expense)
        .service(handlers::delete_expense)
}
