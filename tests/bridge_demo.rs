use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use booking_bridge::bridge::demo::{CallState, DemoPage, MOUNTED_MESSAGE};
use booking_bridge::bridge::notifications::NotificationStore;
use booking_bridge::bridge::{BridgeError, BridgeHost, ReadySignal};
use booking_bridge::domain::notification::NotificationCategory;

const TTL: Duration = Duration::from_secs(5);
const CALL_TIMEOUT: Duration = Duration::from_secs(2);

enum Reply {
    Resolve(Value),
    Reject(Value),
    Hang,
}

struct FakeHost {
    ready: ReadySignal,
    available: AtomicBool,
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeHost {
    fn new(available: bool, reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            ready: ReadySignal::new(),
            available: AtomicBool::new(available),
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BridgeHost for FakeHost {
    async fn wait_ready(&self) {
        self.ready.wait().await;
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn call_handler(&self, handler: &str, args: &[Value]) -> Result<Value, BridgeError> {
        assert_eq!(handler, "handlerInsiderPurchaseEvent");
        assert_eq!(args.len(), 4);
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Resolve(value) => Ok(value.clone()),
            Reply::Reject(value) => Err(BridgeError::Rejected(value.clone())),
            Reply::Hang => std::future::pending().await,
        }
    }
}

fn page_for(host: &Arc<FakeHost>) -> DemoPage {
    DemoPage::new(host.clone(), NotificationStore::new(TTL), CALL_TIMEOUT)
}

fn shown(page: &DemoPage) -> Vec<(NotificationCategory, String)> {
    page.notifications()
        .list()
        .into_iter()
        .map(|n| (n.category, n.message))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn successful_call_reports_each_step() {
    let host = FakeHost::new(true, Reply::Resolve(json!({"status": "ok"})));
    let page = page_for(&host);

    let lifecycle = page.mount().expect("page is live");
    host.ready.signal();

    assert_eq!(lifecycle.await.expect("lifecycle"), CallState::Succeeded);
    assert_eq!(host.calls(), 1);
    assert_eq!(
        shown(&page),
        vec![
            (NotificationCategory::Info, MOUNTED_MESSAGE.to_string()),
            (
                NotificationCategory::Info,
                "Calling handlerInsiderPurchaseEvent".to_string()
            ),
            (
                NotificationCategory::Success,
                r#"handlerInsiderPurchaseEvent succeeded: {"status":"ok"}"#.to_string()
            ),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn call_waits_for_host_readiness() {
    let host = FakeHost::new(true, Reply::Resolve(json!(true)));
    let page = page_for(&host);

    let lifecycle = page.mount().expect("page is live");
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(host.calls(), 0);
    assert_eq!(page.notifications().list().len(), 1);

    host.ready.signal();
    assert_eq!(lifecycle.await.expect("lifecycle"), CallState::Succeeded);
    assert_eq!(host.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn missing_bridge_produces_single_failure_and_no_call() {
    let host = FakeHost::new(false, Reply::Resolve(json!(null)));
    let page = page_for(&host);

    let lifecycle = page.mount().expect("page is live");
    host.ready.signal();

    assert_eq!(lifecycle.await.expect("lifecycle"), CallState::Failed);
    assert_eq!(host.calls(), 0);

    let failures: Vec<_> = shown(&page)
        .into_iter()
        .filter(|(category, _)| *category == NotificationCategory::Error)
        .collect();
    assert_eq!(
        failures,
        vec![(
            NotificationCategory::Error,
            "bridge unavailable: handlerInsiderPurchaseEvent was not called".to_string()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn rejection_is_reported_with_serialized_error() {
    let host = FakeHost::new(true, Reply::Reject(json!({"code": "E_PURCHASE"})));
    let page = page_for(&host);

    let lifecycle = page.mount().expect("page is live");
    host.ready.signal();

    assert_eq!(lifecycle.await.expect("lifecycle"), CallState::Failed);
    let (category, message) = shown(&page).pop().expect("notification");
    assert_eq!(category, NotificationCategory::Error);
    assert_eq!(
        message,
        r#"handlerInsiderPurchaseEvent failed: handler rejected the call: {"code":"E_PURCHASE"}"#
    );
}

#[tokio::test(start_paused = true)]
async fn hanging_call_times_out() {
    let host = FakeHost::new(true, Reply::Hang);
    let page = page_for(&host);

    host.ready.signal();
    let lifecycle = page.mount().expect("page is live");

    assert_eq!(lifecycle.await.expect("lifecycle"), CallState::Failed);
    let (category, message) = shown(&page).pop().expect("notification");
    assert_eq!(category, NotificationCategory::Error);
    assert!(message.contains("did not settle within 2s"), "{message}");
}

#[tokio::test(start_paused = true)]
async fn manual_trigger_runs_alongside_automatic_call() {
    let host = FakeHost::new(true, Reply::Resolve(json!("done")));
    let page = page_for(&host);

    let automatic = page.mount().expect("page is live");
    let manual = page.trigger_manual().expect("page is live");
    host.ready.signal();

    assert_eq!(automatic.await.expect("automatic"), CallState::Succeeded);
    assert_eq!(manual.await.expect("manual"), CallState::Succeeded);
    assert_eq!(host.calls(), 2);

    let again = page.trigger_manual().expect("page is live");
    assert_eq!(again.await.expect("manual"), CallState::Succeeded);
    assert_eq!(host.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn notifications_expire_after_ttl() {
    let host = FakeHost::new(true, Reply::Resolve(json!(1)));
    let page = page_for(&host);

    host.ready.signal();
    page.mount()
        .expect("page is live")
        .await
        .expect("lifecycle");
    assert_eq!(page.notifications().list().len(), 3);

    tokio::time::sleep(TTL + Duration::from_millis(1)).await;

    assert!(page.notifications().list().is_empty());
    assert_eq!(page.notifications().pending_expiries(), 0);
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_calls_and_timers() {
    let host = FakeHost::new(true, Reply::Resolve(json!(1)));
    let page = page_for(&host);

    let lifecycle = page.mount().expect("page is live");
    page.dispose();
    host.ready.signal();

    let result = lifecycle.await;
    assert!(result.expect_err("aborted").is_cancelled());
    assert_eq!(host.calls(), 0);
    assert!(page.notifications().is_disposed());
    assert_eq!(page.notifications().pending_expiries(), 0);
}

#[tokio::test(start_paused = true)]
async fn disposed_page_starts_no_new_calls() {
    let host = FakeHost::new(true, Reply::Resolve(json!(1)));
    let page = page_for(&host);
    host.ready.signal();

    page.dispose();

    assert!(page.trigger_manual().is_none());
    assert!(page.mount().is_none());
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(host.calls(), 0);
    assert!(page.notifications().list().is_empty());
}
