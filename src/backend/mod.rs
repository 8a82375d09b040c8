//! Access to the remote booking service.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::booking::LockSlotPayload;
use crate::dto::booking::AvailableSlotsQuery;

pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpBookingBackend;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("booking service request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Status and raw body of a booking service response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Operations exposed by the remote booking service.
///
/// Implementations report any HTTP response as `Ok`, whatever its status;
/// only failures to obtain a response are errors.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn available_slots(&self, query: &AvailableSlotsQuery) -> BackendResult<BackendReply>;

    async fn lock_available_slot(&self, payload: &LockSlotPayload) -> BackendResult<BackendReply>;
}
