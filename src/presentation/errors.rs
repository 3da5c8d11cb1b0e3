// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::repositories::article_repository::RepositoryError;
use crate::domain::services::article_service::ArticleServiceError;

/// 应用错误类型
///
/// 封装增删改查处理器的错误，按底层错误类型映射HTTP状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if let Some(e) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(e);
        }

        if let Some(e) = self.0.downcast_ref::<ArticleServiceError>() {
            return match e {
                ArticleServiceError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
                ArticleServiceError::Repository(inner) => repository_status(inner),
            };
        }

        if self.0.downcast_ref::<ValidationErrors>().is_some()
            || self.0.downcast_ref::<JsonRejection>().is_some()
            || self.0.downcast_ref::<QueryRejection>().is_some()
            || self.0.downcast_ref::<PathRejection>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!(error = %error_message, "Request failed");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
