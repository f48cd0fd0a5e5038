use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use expense_repo::expense_repo::ExpenseRepoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorMessage {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    ExpenseRepoError(#[from] ExpenseRepoError),
}

impl HandlerError {
    fn message(&self) -> String {
        match self {
            HandlerError::ExpenseRepoError(ExpenseRepoError::Other(e)) => format!("{:#}", e),
            HandlerError::ExpenseRepoError(e) => e.to_string(),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::ExpenseRepoError(ExpenseRepoError::ExpenseNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::ExpenseRepoError(ExpenseRepoError::Other(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.message()))
    }
}

/// Body decoding failures become `{"message": ...}` responses. The handler never runs.
/// The body is read as JSON whatever the request's content type says.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, req| {
            error!(req_path = req.path(), %err);
            let response =
                HttpResponse::build(err.status_code()).json(ErrorMessage::new(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// A path segment that is not a valid id is a client error.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req| {
        error!(req_path = req.path(), %err);
        let response = HttpResponse::BadRequest().json(ErrorMessage::new(format!(
            "Invalid expense id: {}",
            err
        )));
        InternalError::from_response(err, response).into()
    })
}
