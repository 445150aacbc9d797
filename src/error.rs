use crate::relay::RelayError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error parsing form: {0}")]
    Form(#[from] MultipartError),

    #[error("Error retrieving file")]
    MissingImage,

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("Error saving file")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading image")]
    RelaySource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error contacting vision API")]
    Relay(#[from] RelayError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Form(err) => err.status(),
            AppError::MissingImage | AppError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
            AppError::Storage { .. } | AppError::RelaySource { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Relay(RelayError::Header(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Relay(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Storage { path, source } | AppError::RelaySource { path, source } => {
                log::error!("{}: {}: {}", self, path.display(), source);
            }
            AppError::Relay(err) => log::error!("{}", err),
            _ => log::debug!("rejected request: {}", self),
        }

        (status, format!("{}\n", self)).into_response()
    }
}
