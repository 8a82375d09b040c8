//! Ordered, self-expiring notification list backing the demo page.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::notification::{Notification, NotificationCategory, NotificationId};

#[derive(Default)]
struct StoreState {
    next_id: NotificationId,
    entries: Vec<Notification>,
    timers: HashMap<NotificationId, JoinHandle<()>>,
    disposed: bool,
}

/// Shared handle to the notification list.
///
/// Each pushed notification is removed after `ttl` unless it was dismissed
/// first. Expiry timers belong to the store and are aborted by
/// [`NotificationStore::dispose`]. Pushing requires a Tokio runtime.
#[derive(Clone)]
pub struct NotificationStore {
    state: Arc<Mutex<StoreState>>,
    ttl: Duration,
}

impl NotificationStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
            ttl,
        }
    }

    /// Appends a notification and schedules its expiry.
    ///
    /// Returns `None` once the store has been disposed.
    pub fn push(
        &self,
        message: impl Into<String>,
        category: NotificationCategory,
    ) -> Option<NotificationId> {
        let mut state = lock(&self.state);
        if state.disposed {
            return None;
        }

        state.next_id += 1;
        let id = state.next_id;
        state
            .entries
            .push(Notification::new(id, message.into(), category));

        let timer = tokio::spawn(expire_after(Arc::downgrade(&self.state), id, self.ttl));
        state.timers.insert(id, timer);

        Some(id)
    }

    /// Removes the notification immediately. Returns whether it was present.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut state = lock(&self.state);
        if let Some(timer) = state.timers.remove(&id) {
            timer.abort();
        }
        remove_entry(&mut state, id)
    }

    /// Removes every notification currently shown.
    pub fn dismiss_all(&self) {
        clear(&mut lock(&self.state));
    }

    /// Snapshot of the notifications in display order.
    pub fn list(&self) -> Vec<Notification> {
        lock(&self.state).entries.clone()
    }

    pub fn pending_expiries(&self) -> usize {
        lock(&self.state).timers.len()
    }

    /// Aborts all pending expiry timers and stops accepting notifications.
    pub fn dispose(&self) {
        let mut state = lock(&self.state);
        clear(&mut state);
        state.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        lock(&self.state).disposed
    }
}

async fn expire_after(state: Weak<Mutex<StoreState>>, id: NotificationId, ttl: Duration) {
    tokio::time::sleep(ttl).await;

    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = lock(&state);
    state.timers.remove(&id);
    if remove_entry(&mut state, id) {
        log::debug!("Notification {id} expired");
    }
}

fn clear(state: &mut StoreState) {
    for (_, timer) in state.timers.drain() {
        timer.abort();
    }
    state.entries.clear();
}

fn remove_entry(state: &mut StoreState, id: NotificationId) -> bool {
    let before = state.entries.len();
    state.entries.retain(|entry| entry.id != id);
    state.entries.len() != before
}

fn lock(state: &Mutex<StoreState>) -> MutexGuard<'_, StoreState> {
    state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
