//! End-to-end runtime smoke test (headless).
//!
//! Runs `appstore::app::run` with `APPSTORE_TEST_HEADLESS=1` so raw TTY
//! setup/restore is bypassed; the runtime draws one off-screen frame and returns.

use appstore::catalog::Catalog;
use appstore::logic::FilterState;
use appstore::state::AppState;

#[test]
fn runtime_smoke_headless_runs_without_panic() {
    unsafe {
        std::env::set_var("APPSTORE_TEST_HEADLESS", "1");
    }
    let mut app = AppState::new(Catalog::builtin().expect("builtin catalog"));
    app.set_filter(FilterState {
        person: "Julia".into(),
        ..FilterState::default()
    });
    assert_eq!(app.results.len(), 4);
    if let Err(e) = appstore::app::run(app) {
        panic!("app::run returned error: {e:?}");
    }
}
