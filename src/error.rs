use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

pub type Result<T> = std::result::Result<T, Error>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure of a single data access operation, tagged by the step that failed.
///
/// Every variant keeps the driver error untouched so its text reaches the
/// client as-is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Query(#[source] sqlx::Error),

    #[error("{0}")]
    Scan(#[source] sqlx::Error),

    #[error("{0}")]
    NotFound(#[source] sqlx::Error),

    #[error("{0}")]
    Insert(#[source] sqlx::Error),

    #[error("{0}")]
    Update(#[source] sqlx::Error),

    #[error("{0}")]
    Delete(#[source] sqlx::Error),
}

impl StoreError {
    /// Classifies a failed read: a missing row becomes `NotFound`, a column
    /// that could not be decoded becomes `Scan`, anything else is `Query`.
    pub fn from_read(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound(sqlx::Error::RowNotFound),
            decode @ (sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)) => StoreError::Scan(decode),
            other => StoreError::Query(other),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Query(_) => "query",
            StoreError::Scan(_) => "scan",
            StoreError::NotFound(_) => "not_found",
            StoreError::Insert(_) => "insert",
            StoreError::Update(_) => "update",
            StoreError::Delete(_) => "delete",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            // A delete that cannot complete is reported as a missing row.
            Error::Store(StoreError::NotFound(_)) | Error::Store(StoreError::Delete(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_string())).into_response()
    }
}
