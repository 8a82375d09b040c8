//! Bridge call lifecycle driven by the demo page.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};

use crate::bridge::notifications::NotificationStore;
use crate::bridge::{BridgeError, BridgeHost, HandlerCall};
use crate::domain::notification::NotificationCategory;

pub const MOUNTED_MESSAGE: &str = "Page loaded, waiting for platform readiness";

/// Progress of a single bridge call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallState {
    Idle,
    WaitingForHost,
    Calling,
    Succeeded,
    Failed,
}

/// Everything one call needs; cloned into each spawned lifecycle.
#[derive(Clone)]
pub struct CallLifecycle {
    host: Arc<dyn BridgeHost>,
    notifications: NotificationStore,
    call: HandlerCall,
    timeout: Duration,
}

impl CallLifecycle {
    pub fn new(
        host: Arc<dyn BridgeHost>,
        notifications: NotificationStore,
        call: HandlerCall,
        timeout: Duration,
    ) -> Self {
        Self {
            host,
            notifications,
            call,
            timeout,
        }
    }

    /// Waits for the host once, performs the call and reports every step as
    /// a notification. Returns the terminal state.
    pub async fn run(&self) -> CallState {
        let handler = self.call.handler.as_str();

        self.enter(CallState::WaitingForHost);
        self.host.wait_ready().await;

        self.enter(CallState::Calling);
        self.notifications
            .push(format!("Calling {handler}"), NotificationCategory::Info);

        if !self.host.is_available() {
            log::warn!("Bridge is not available, {handler} was not called");
            self.notifications.push(
                format!("{}: {handler} was not called", BridgeError::Unavailable),
                NotificationCategory::Error,
            );
            return self.enter(CallState::Failed);
        }

        let outcome = tokio::time::timeout(
            self.timeout,
            self.host.call_handler(handler, &self.call.args),
        )
        .await
        .unwrap_or(Err(BridgeError::Timeout(self.timeout)));

        match outcome {
            Ok(result) => {
                log::info!("{handler} returned {result}");
                self.notifications.push(
                    format!("{handler} succeeded: {result}"),
                    NotificationCategory::Success,
                );
                self.enter(CallState::Succeeded)
            }
            Err(err) => {
                log::error!("{handler} failed: {err}");
                self.notifications
                    .push(format!("{handler} failed: {err}"), NotificationCategory::Error);
                self.enter(CallState::Failed)
            }
        }
    }

    fn enter(&self, state: CallState) -> CallState {
        log::debug!("{}: {state:?}", self.call.handler);
        state
    }
}

/// The demo page: one automatic call on mount plus any number of manual ones.
///
/// Every lifecycle waits for readiness exactly once, so repeated triggers
/// never stack up extra calls behind a single readiness signal.
pub struct DemoPage {
    lifecycle: CallLifecycle,
    running: Mutex<Vec<AbortHandle>>,
}

impl DemoPage {
    pub fn new(
        host: Arc<dyn BridgeHost>,
        notifications: NotificationStore,
        call_timeout: Duration,
    ) -> Self {
        Self::with_call(
            host,
            notifications,
            HandlerCall::insider_purchase_demo(),
            call_timeout,
        )
    }

    pub fn with_call(
        host: Arc<dyn BridgeHost>,
        notifications: NotificationStore,
        call: HandlerCall,
        call_timeout: Duration,
    ) -> Self {
        Self {
            lifecycle: CallLifecycle::new(host, notifications, call, call_timeout),
            running: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.lifecycle.notifications
    }

    /// Announces the page and starts the automatic call.
    ///
    /// Returns `None` once the page has been disposed.
    pub fn mount(&self) -> Option<JoinHandle<CallState>> {
        self.lifecycle.enter(CallState::Idle);
        self.lifecycle
            .notifications
            .push(MOUNTED_MESSAGE, NotificationCategory::Info);
        self.spawn_lifecycle()
    }

    /// Starts another call alongside any that are still running.
    ///
    /// Returns `None` once the page has been disposed.
    pub fn trigger_manual(&self) -> Option<JoinHandle<CallState>> {
        self.spawn_lifecycle()
    }

    /// Cancels unfinished calls and tears down the notification store.
    pub fn dispose(&self) {
        let mut running = self
            .running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for handle in running.drain(..) {
            handle.abort();
        }
        self.lifecycle.notifications.dispose();
    }

    fn spawn_lifecycle(&self) -> Option<JoinHandle<CallState>> {
        // `dispose` holds this lock while tearing down the store.
        let mut running = self
            .running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.lifecycle.notifications.is_disposed() {
            log::debug!("{}: page disposed, call skipped", self.lifecycle.call.handler);
            return None;
        }

        let lifecycle = self.lifecycle.clone();
        let handle = tokio::spawn(async move { lifecycle.run().await });

        running.retain(|handle| !handle.is_finished());
        running.push(handle.abort_handle());

        Some(handle)
    }
}
