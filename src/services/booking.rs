use serde_json::{Value, json};

use crate::backend::{BackendReply, BookingBackend};
use crate::dto::booking::AvailableSlotsQuery;
use crate::forms::booking::LockSlotForm;
use crate::services::{ServiceError, ServiceResult};

/// Fetches available slots and returns the booking service body untouched.
pub async fn list_available_slots<B>(
    backend: &B,
    query: &AvailableSlotsQuery,
) -> ServiceResult<Value>
where
    B: BookingBackend + ?Sized,
{
    let reply = backend.available_slots(query).await?;

    if !reply.is_success() {
        return Err(downstream_error(&reply));
    }

    Ok(reply.json()?)
}

/// Validates a raw lock request body and forwards it to the booking service.
pub async fn lock_available_slot<B>(backend: &B, body: &[u8]) -> ServiceResult<Value>
where
    B: BookingBackend + ?Sized,
{
    let payload = LockSlotForm::from_slice(body)?.into_payload()?;

    let reply = backend.lock_available_slot(&payload).await?;

    if !reply.is_success() {
        return Err(downstream_error(&reply));
    }

    Ok(reply.json()?)
}

/// Error bodies that are not JSON are reported as an empty object.
fn downstream_error(reply: &BackendReply) -> ServiceError {
    ServiceError::Downstream {
        status: reply.status,
        details: reply.json().unwrap_or_else(|_| json!({})),
    }
}
