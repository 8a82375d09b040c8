use std::time::Duration;

use async_trait::async_trait;

use crate::backend::{BackendReply, BackendResult, BookingBackend};
use crate::domain::booking::LockSlotPayload;
use crate::dto::booking::AvailableSlotsQuery;
use crate::models::config::ServerConfig;

const AVAILABLE_SLOTS_PATH: &str = "booking/available_slots";
const LOCK_SLOT_PATH: &str = "booking/lock_available_slot";

/// [`BookingBackend`] talking to the remote service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBookingBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookingBackend {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> BackendResult<Self> {
        Self::new(
            config.booking_api_url.as_str(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn into_reply(response: reqwest::Response) -> BackendResult<BackendReply> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        log::debug!("Booking service responded with status {status}");
        Ok(BackendReply::new(status, body.to_vec()))
    }
}

#[async_trait]
impl BookingBackend for HttpBookingBackend {
    async fn available_slots(&self, query: &AvailableSlotsQuery) -> BackendResult<BackendReply> {
        let response = self
            .client
            .get(self.endpoint(AVAILABLE_SLOTS_PATH))
            .query(query)
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn lock_available_slot(&self, payload: &LockSlotPayload) -> BackendResult<BackendReply> {
        let response = self
            .client
            .post(self.endpoint(LOCK_SLOT_PATH))
            .json(payload)
            .send()
            .await?;

        Self::into_reply(response).await
    }
}
