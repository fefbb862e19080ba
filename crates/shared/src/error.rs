use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    Upstream,
}

/// A failure a resolver turns into a user-visible error page.
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Upstream, message)
    }

    pub fn status(&self) -> PageStatus {
        match self.code {
            ErrorCode::NotFound => PageStatus::NotFound,
            ErrorCode::Upstream => PageStatus::InternalError,
        }
    }
}

/// HTTP status of a resolved page, kept free of any web framework type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
    InternalError,
}

impl PageStatus {
    pub fn as_u16(self) -> u16 {
        match self {
            PageStatus::Ok => 200,
            PageStatus::NotFound => 404,
            PageStatus::InternalError => 500,
        }
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
