//! Static credential gate.
//!
//! This is a toy gate, not a security mechanism: one username and password, supplied through
//! configuration, compared against HTTP Basic credentials in plain text.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, Header};
use actix_web::{Error, HttpMessage, HttpResponse};
use actix_web_httpauth::headers::authorization::{Authorization, Basic};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use tracing::warn;
use tracing_actix_web::RootSpan;

use crate::error::ErrorMessage;

pub const UNAUTHORIZED_MESSAGE: &str = "Username/Password incorrect.";

#[derive(Deserialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username when the request carries matching Basic credentials.
    fn validate(&self, req: &ServiceRequest) -> Option<String> {
        let authorization = Authorization::<Basic>::parse(req).ok()?;
        let basic = authorization.into_scheme();
        let user_id = basic.user_id().to_string();
        let password = basic
            .password()
            .map(|p| p.to_string())
            .unwrap_or_default();

        if user_id == self.username && password == self.password {
            Some(user_id)
        } else {
            None
        }
    }
}

fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, r#"Basic realm="expenses""#))
        .json(ErrorMessage::new(UNAUTHORIZED_MESSAGE))
}

/// Middleware rejecting requests without the configured Basic credentials. On success the
/// username is recorded into the [RootSpan].
pub struct AccessGate {
    credentials: Arc<Credentials>,
}

impl AccessGate {
    pub fn new(credentials: Credentials) -> Self {
        AccessGate {
            credentials: Arc::new(credentials),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service,
            credentials: self.credentials.clone(),
        }))
    }
}

pub struct AccessGateMiddleware<S> {
    service: S,
    credentials: Arc<Credentials>,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(username) = self.credentials.validate(&req) else {
            warn!(req_path = req.path(), "missing or invalid credentials");
            let response = req.into_response(unauthorized_response());
            return Box::pin(async move { Ok(response.map_into_right_body()) });
        };

        if let Some(root_span) = req.extensions().get::<RootSpan>() {
            root_span.record("auth_user", &username.as_str());
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
