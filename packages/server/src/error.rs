use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::backend::BackendError;
use serde::Serialize;

use crate::form::FormError;
use crate::task::TaskError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `INVALID_TASK`,
    /// `NOT_FOUND`, `INTERNAL_ERROR`.
    #[schema(example = "INVALID_TASK")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "The submitted task is incomplete")]
    pub message: String,
    /// Per-field messages for `INVALID_TASK`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!({"vendor": "Please specify the vendor"}))]
    pub fields: Option<BTreeMap<String, String>>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// The task was built but misses required values.
    InvalidTask(BTreeMap<String, String>),
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                    fields: None,
                },
            ),
            AppError::InvalidTask(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "INVALID_TASK",
                    message: "The submitted task is incomplete".into(),
                    fields: Some(fields),
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                    fields: None,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                        fields: None,
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::MissingUid => {
                let mut fields = BTreeMap::new();
                fields.insert("uid".to_string(), "Please specify the uid".to_string());
                AppError::InvalidTask(fields)
            }
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound(uid) => {
                tracing::warn!(uid = %uid, "Firmware not found");
                AppError::NotFound(format!("Firmware '{uid}' not found"))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
