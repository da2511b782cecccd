use crate::db::errors::DbError;
use crate::views;
use axum_extra::extract::FormRejection;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested resource not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// Submitted form data could not be accepted
    #[error("{message}")]
    Validation { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// A view failed to render
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Error::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. } => StatusCode::CONFLICT,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Template(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe detail line, without leaking internal implementation details.
    /// `None` for server-side failures, where only the page's fixed message is shown.
    pub fn user_detail(&self) -> Option<String> {
        match self {
            Error::NotFound { resource, id } => Some(format!("{resource} with ID {id} not found")),
            Error::Validation { message } => Some(message.clone()),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => Some("Record not found".to_string()),
                DbError::UniqueViolation { .. } => Some("A record with these values already exists".to_string()),
                DbError::ForeignKeyViolation { .. } => {
                    Some("The record refers to, or is still referred to by, another record".to_string())
                }
                DbError::CheckViolation { .. } => Some("Invalid data provided".to_string()),
                DbError::Other(_) => None,
            },
            Error::Template(_) | Error::Other(_) => None,
        }
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        Error::validation(rejection.to_string())
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err.into())
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

/// A failed page request: the fixed message shown to the user plus the underlying cause.
///
/// Every HTML handler returns this as its error type, so there is exactly one place where
/// failures are logged and turned into the error view.
#[derive(Debug)]
pub struct PageError {
    pub message: &'static str,
    pub source: Error,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Attach a page's fixed error message to a failing result.
pub trait ResultExt<T> {
    fn or_page(self, message: &'static str) -> std::result::Result<T, PageError>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn or_page(self, message: &'static str) -> std::result::Result<T, PageError> {
        self.map_err(|e| PageError {
            message,
            source: e.into(),
        })
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self.source {
            Error::Database(db_err) if db_err.is_constraint_violation() => {
                tracing::warn!("{}: database constraint error: {}", self.message, self.source);
            }
            Error::NotFound { .. } | Error::Validation { .. } | Error::Database(DbError::NotFound) => {
                tracing::debug!("{}: client error: {}", self.message, self.source);
            }
            _ => {
                tracing::error!("{}: {:#}", self.message, self.source);
            }
        }

        let status = self.source.status_code();
        let detail = self.source.user_detail();

        match views::render_error(self.message, detail.as_deref()) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error view: {:#}", e);
                (status, self.message).into_response()
            }
        }
    }
}
