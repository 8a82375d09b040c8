use serde_json::Value;
use thiserror::Error;

use crate::backend::BackendError;
use crate::forms::FormError;

pub mod booking;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("booking service responded with status {status}: {details}")]
    Downstream { status: u16, details: Value },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("invalid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
