//! Navigation tests: history, deferred views and stale-load discarding

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use driveview_router::*;
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

/// Lazy view whose loads are counted and, optionally, held until released
fn gated_view(name: &'static str, calls: Arc<AtomicUsize>, gate: Option<Arc<Notify>>) -> ViewRef {
    ViewRef::lazy(move || {
        let calls = Arc::clone(&calls);
        let gate = gate.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = gate {
                gate.notified().await;
            }
            Ok(View::new(name))
        }
    })
}

fn navigator(table: RouteTable) -> Navigator<MemoryHistory> {
    Navigator::new(Arc::new(table), BasePath::root(), MemoryHistory::default())
}

fn pending(navigation: Navigation) -> PendingView {
    match navigation.view {
        ViewState::Pending(pending) => pending,
        ViewState::Ready(view) => panic!("expected pending view, got {view}"),
    }
}

#[test]
fn test_eager_views_are_ready() {
    let mut nav = navigator(routes::file_browser(false).unwrap());
    let navigation = nav.start();
    assert!(matches!(navigation.view, ViewState::Ready(ref v) if v.component() == "FolderView"));

    let navigation = nav.push("/video/clip1");
    assert!(matches!(navigation.view, ViewState::Ready(ref v) if v.component() == "VideoView"));
}

#[test]
fn test_resolution_does_not_start_loads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let table = RouteTable::builder()
        .route("home", "/", ViewRef::eager("FolderView"))
        .route("not-found", "/*rest", gated_view("NotFoundView", Arc::clone(&calls), None))
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let navigation = nav.push("/missing");
    assert_eq!(navigation.matched.name, "not-found");
    assert!(navigation.view.is_pending());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_current_load_resolves_and_is_memoized() {
    let calls = Arc::new(AtomicUsize::new(0));
    let table = RouteTable::builder()
        .route("home", "/", ViewRef::eager("FolderView"))
        .route("not-found", "/*rest", gated_view("NotFoundView", Arc::clone(&calls), None))
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let view = pending(nav.push("/missing"));
    assert_eq!(view.route(), "not-found");
    assert_eq!(
        view.resolve().await.unwrap(),
        ViewOutcome::Ready(View::new("NotFoundView"))
    );

    // second visit renders straight away
    let navigation = nav.push("/still/missing");
    assert!(matches!(navigation.view, ViewState::Ready(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_stale_handle_skips_load() {
    let calls = Arc::new(AtomicUsize::new(0));
    let table = RouteTable::builder()
        .route("home", "/", ViewRef::eager("FolderView"))
        .route("not-found", "/*rest", gated_view("NotFoundView", Arc::clone(&calls), None))
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let stale = pending(nav.push("/missing"));
    nav.push("/");
    assert!(stale.is_stale());

    assert_eq!(stale.resolve().await.unwrap(), ViewOutcome::Superseded);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_in_flight_load_is_discarded_after_newer_navigation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let table = RouteTable::builder()
        .route("home", "/", ViewRef::eager("FolderView"))
        .route(
            "not-found",
            "/*rest",
            gated_view("NotFoundView", Arc::clone(&calls), Some(Arc::clone(&gate))),
        )
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let first = pending(nav.push("/missing"));
    let first_generation = first.generation();
    let in_flight = tokio::spawn(first.resolve());
    tokio::task::yield_now().await;

    let latest = nav.push("/");
    assert!(latest.generation > first_generation);
    gate.notify_one();

    assert_eq!(in_flight.await.unwrap().unwrap(), ViewOutcome::Superseded);
    assert_eq!(nav.current().map(|m| m.name.as_str()), Some("home"));
}

#[tokio::test]
async fn test_latest_navigation_wins_between_two_lazy_views() {
    let slow_calls = Arc::new(AtomicUsize::new(0));
    let fast_calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Notify::new());
    let table = RouteTable::builder()
        .route(
            "video",
            "/video/:p*",
            gated_view("VideoView", Arc::clone(&slow_calls), Some(Arc::clone(&gate))),
        )
        .route("not-found", "/*rest", gated_view("NotFoundView", Arc::clone(&fast_calls), None))
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let slow = pending(nav.push("/video/clip1"));
    let slow = tokio::spawn(slow.resolve());
    tokio::task::yield_now().await;

    let fast = pending(nav.push("/elsewhere"));
    assert_eq!(
        fast.resolve().await.unwrap(),
        ViewOutcome::Ready(View::new("NotFoundView"))
    );

    gate.notify_one();
    assert_eq!(slow.await.unwrap().unwrap(), ViewOutcome::Superseded);
}

#[tokio::test]
async fn test_load_failure_is_surfaced_and_retried() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let flaky = ViewRef::lazy(move || {
        let counter = Arc::clone(&counter);
        async move {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(LoadError::new("NotFoundView", "network error"))
            } else {
                Ok(View::new("NotFoundView"))
            }
        }
    });
    let table = RouteTable::builder()
        .route("home", "/", ViewRef::eager("FolderView"))
        .route("not-found", "/*rest", flaky)
        .build()
        .unwrap();
    let mut nav = navigator(table);

    let err = pending(nav.push("/missing")).resolve().await.unwrap_err();
    assert_eq!(err, LoadError::new("NotFoundView", "network error"));

    let retry = pending(nav.push("/missing"));
    assert_eq!(
        retry.resolve().await.unwrap(),
        ViewOutcome::Ready(View::new("NotFoundView"))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_base_path_round_trip() {
    let table = Arc::new(routes::file_browser(false).unwrap());
    let base = BasePath::new("/drive/");
    let mut nav = Navigator::new(table, base.clone(), MemoryHistory::new("/drive/list/Music"));

    let start = nav.start();
    assert_eq!(start.matched.name, "list");
    assert_eq!(start.location.path, "/list/Music");

    nav.push("/video/Music/song.mp4#t=30");
    assert_eq!(nav.history().location(), "/drive/video/Music/song.mp4#t=30");

    let back = nav.back().unwrap();
    assert_eq!(back.matched.param("p"), Some(&ParamValue::from(vec!["Music"])));
    assert_eq!(base.prepend(&back.location.path), "/drive/list/Music");
}

#[test]
fn test_generations_increase_per_navigation() {
    let mut nav = navigator(routes::file_browser(false).unwrap());
    assert_eq!(nav.generation(), 0);
    let a = nav.start();
    let b = nav.push("/list");
    let c = nav.replace("/video/x");
    assert_eq!((a.generation, b.generation, c.generation), (1, 2, 3));
    assert_eq!(nav.generation(), 3);
}
