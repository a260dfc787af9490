use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Message shown to clients for any failure we don't want to describe.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing PSQL configuration (PSQL_HOST or PSQL_PORT)")]
    MissingPostgres,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("no quotes found for {}", describe_category(.category))]
    NotFound { category: Option<String> },

    #[error("error fetching quote: {0}")]
    Internal(#[from] sqlx::Error),
}

fn describe_category(category: &Option<String>) -> String {
    match category {
        Some(category) => format!("category: {}", category),
        None => "any category".to_string(),
    }
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("error parsing fixture ({source_name}): {source}")]
    Parse {
        source_name: String,
        source: serde_json::Error,
    },

    #[error("invalid record #{index} in fixture ({source_name}): author and message must be non-empty")]
    InvalidRecord { source_name: String, index: usize },

    #[error("error inserting data from fixture ({source_name}): {source}")]
    Insert {
        source_name: String,
        source: sqlx::Error,
    },
}

/// Errors surfaced at the HTTP handler boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The part of the error that is safe to show to a client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(message) => *message,
            AppError::Internal(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(message) => tracing::warn!("Rejected request: {}", message),
            AppError::Internal(e) => tracing::error!("Request failed: {:#}", e),
        }

        let body = format!(
            r#"<div class="text-red-600 font-semibold">{}</div>"#,
            self.public_message()
        );
        (self.status(), Html(body)).into_response()
    }
}
