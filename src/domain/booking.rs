//! Booking payloads forwarded to the remote booking service.

use serde::Serialize;
use serde_json::Value;

/// Body sent to `POST /booking/lock_available_slot`.
///
/// Identifier fields are kept as opaque JSON values so they reach the remote
/// service exactly as the caller sent them. Contact fields that were not
/// provided are left out of the serialized body entirely.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LockSlotPayload {
    pub shop_id: Value,
    pub specialist_id: Value,
    pub user_id: Value,
    pub booking_date_time: Value,
    pub services_id: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_phone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_email: Option<Value>,
}
