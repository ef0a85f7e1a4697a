use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

const STATUS_UNPROCESSABLE: u16 = 422;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_CONFLICT: u16 = 409;
const STATUS_INTERNAL: u16 = 500;

/// Transport-neutral error body a caller can serialize as `application/problem+json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: u16,
    },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Internal { detail, .. }
            | AppError::Config { detail } => detail,
        }
    }

    /// HTTP-style status a transport layer should report for this error.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound { .. } => STATUS_NOT_FOUND,
            AppError::Conflict { .. } => STATUS_CONFLICT,
            AppError::Internal { .. } | AppError::Config { .. } => STATUS_INTERNAL,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: STATUS_UNPROCESSABLE,
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn problem_details(&self) -> ProblemDetails {
        let code = self.code();
        ProblemDetails {
            type_: format!("https://dots.invalid/errors/{}", code.as_str()),
            title: humanize_code(code.as_str()),
            status: self.status(),
            detail: self.detail().to_string(),
            code: code.as_str().to_string(),
        }
    }
}

fn humanize_code(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::GameNotStarted => ErrorCode::GameNotStarted,
                    ValidationKind::NotPlayersTurn => ErrorCode::NotPlayersTurn,
                    ValidationKind::CellIncrement => ErrorCode::CellIncrementError,
                    ValidationKind::CellOutOfBounds => ErrorCode::CellOutOfBounds,
                    ValidationKind::InvalidBoardSize => ErrorCode::InvalidBoardSize,
                    ValidationKind::NoPlayers => ErrorCode::NoPlayers,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                let status = match code {
                    ErrorCode::GameNotStarted | ErrorCode::NotPlayersTurn => STATUS_CONFLICT,
                    _ => STATUS_UNPROCESSABLE,
                };
                AppError::Validation {
                    code,
                    detail,
                    status,
                }
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::GameAlreadyStarted => ErrorCode::GameAlreadyStarted,
                    ConflictKind::GameComplete => ErrorCode::GameComplete,
                    ConflictKind::PlayerAlreadyInGame => ErrorCode::PlayerAlreadyInGame,
                    ConflictKind::JoinCodeConflict => ErrorCode::JoinCodeConflict,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::GameState => ErrorCode::NoGameStateFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::DataCorruption => ErrorCode::MalformedBoardData,
                    InfraErrorKind::CodeGenerationExhausted => {
                        ErrorCode::CodeGenerationExhausted
                    }
                    InfraErrorKind::StorageUnavailable => ErrorCode::StorageError,
                    InfraErrorKind::Other(_) => ErrorCode::Internal,
                };
                AppError::internal(code, detail)
            }
        }
    }
}
