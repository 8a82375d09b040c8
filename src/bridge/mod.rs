//! Host bridge consumed by the demo page.
//!
//! The embedded web view host injects a bridge object and announces when it
//! is usable. [`BridgeHost`] captures that capability so the call lifecycle
//! in [`demo`] can run against the real host or a test double.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::sync::watch;

pub mod demo;
pub mod notifications;

/// Handler invoked by the demo page.
pub const DEMO_HANDLER: &str = "handlerInsiderPurchaseEvent";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BridgeError {
    #[error("bridge unavailable")]
    Unavailable,

    #[error("handler rejected the call: {0}")]
    Rejected(Value),

    #[error("handler did not settle within {0:?}")]
    Timeout(Duration),
}

/// Capability provided by the embedded web view host.
#[async_trait]
pub trait BridgeHost: Send + Sync {
    /// Resolves once the host has signalled readiness; immediately if it
    /// already has.
    async fn wait_ready(&self);

    /// Whether the bridge object is present.
    fn is_available(&self) -> bool;

    async fn call_handler(&self, handler: &str, args: &[Value]) -> Result<Value, BridgeError>;
}

/// A handler name with its positional arguments.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HandlerCall {
    pub handler: String,
    pub args: Vec<Value>,
}

impl HandlerCall {
    pub fn new(handler: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            handler: handler.into(),
            args,
        }
    }

    /// The fixed purchase event sent by the demo page.
    pub fn insider_purchase_demo() -> Self {
        Self::new(
            DEMO_HANDLER,
            vec![
                json!(1),
                json!(true),
                json!(["bar", 5]),
                json!({"item_name": "baz", "price": "RM 24.00"}),
            ],
        )
    }

    /// Arguments as a JSON array literal, for embedding in the page script.
    pub fn args_json(&self) -> String {
        Value::Array(self.args.clone()).to_string()
    }
}

/// One-way readiness latch for [`BridgeHost::wait_ready`] implementations.
///
/// Waiters registered before or after [`ReadySignal::signal`] all resolve;
/// signalling again has no further effect.
#[derive(Clone, Debug)]
pub struct ReadySignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ReadySignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn signal(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}
