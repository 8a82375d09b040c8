//! Mock booking backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::{BackendReply, BackendResult, BookingBackend};
use crate::domain::booking::LockSlotPayload;
use crate::dto::booking::AvailableSlotsQuery;

mock! {
    pub Backend {}

    #[async_trait]
    impl BookingBackend for Backend {
        async fn available_slots(&self, query: &AvailableSlotsQuery) -> BackendResult<BackendReply>;
        async fn lock_available_slot(&self, payload: &LockSlotPayload) -> BackendResult<BackendReply>;
    }
}
