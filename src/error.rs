use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => AppError::NotFound("Car not found".to_string()),
            RepositoryError::Conflict(_) => {
                AppError::Conflict("Car with that id already exists".to_string())
            }
            RepositoryError::Database(e) => AppError::Database(e),
        }
    }
}

/// Field name to messages, falling back to the rule code when a rule has no
/// message of its own.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, fields) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                    None,
                )
            }
            AppError::Body(rejection) => {
                tracing::warn!("Invalid request body: {}", rejection);
                (rejection.status(), rejection.body_text(), None)
            }
            AppError::Validation(errors) => {
                tracing::warn!("Validation error: {}", errors);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation failed".to_string(),
                    Some(field_messages(&errors)),
                )
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None)
            }
            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg, None)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {}", e),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn repository_errors_map_to_short_messages() {
        let not_found = AppError::from(RepositoryError::NotFound(7));
        assert!(matches!(&not_found, AppError::NotFound(msg) if msg == "Car not found"));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conflict = AppError::from(RepositoryError::Conflict(7));
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_errors_list_each_field() {
        let mut errors = ValidationErrors::new();
        let mut price = ValidationError::new("range");
        price.message = Some("price must not be negative".into());
        errors.add("price", price);
        errors.add("make", ValidationError::new("length"));

        let fields = field_messages(&errors);
        assert_eq!(fields["price"], vec!["price must not be negative".to_string()]);
        assert_eq!(fields["make"], vec!["length".to_string()]);

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_errors_are_500() {
        let response = AppError::from(anyhow::anyhow!("frontend missing")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
