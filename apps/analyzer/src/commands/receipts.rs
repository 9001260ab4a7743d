//! # Receipt Commands
//!
//! List refresh and selection, independent of any submission.

use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Reloads the receipt list, statistics, and default selection.
///
/// Clears the banner first (a new attempt overwrites the previous
/// message); a failure lands back on the banner and the cached values
/// keep their previous state.
pub async fn reload(state: &AppState) -> Result<(), ApiError> {
    debug!("reload command");
    state.reporter.clear();
    if let Err(err) = state.store.refresh().await {
        state.reporter.report(err.to_string());
        return Err(err.into());
    }
    Ok(())
}

/// Selects one receipt from the list.
///
/// Non-fatal: a failed detail fetch is reported but the previous
/// selection stays.
pub async fn select_receipt(state: &AppState, receipt_id: &str) -> Result<(), ApiError> {
    debug!(receipt_id, "select_receipt command");
    if let Err(err) = state.store.select_receipt(receipt_id).await {
        state.reporter.report(err.to_string());
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{detail, stats, summary, FakeBackend};
    use crate::AppState;
    use std::sync::Arc;

    fn app() -> (Arc<FakeBackend>, AppState) {
        let backend = Arc::new(FakeBackend::new());
        let state = AppState::for_tests(Arc::clone(&backend));
        (backend, state)
    }

    #[tokio::test]
    async fn test_reload_populates_views_and_clears_banner() {
        let (backend, state) = app();
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        backend.set_stats(stats(&[("food", 10.5)]));

        state.reporter.report("stale failure");
        reload(&state).await.unwrap();

        assert_eq!(state.reporter.banner(), None);
        assert_eq!(state.store.receipts().len(), 1);
        assert_eq!(state.store.selected().unwrap().receipt_id(), "MP1");
    }

    #[tokio::test]
    async fn test_reload_failure_lands_on_banner() {
        let (backend, state) = app();
        backend.fail_list("list endpoint down");

        reload(&state).await.unwrap_err();
        assert_eq!(state.reporter.banner().as_deref(), Some("list endpoint down"));
    }

    #[tokio::test]
    async fn test_select_failure_is_reported_and_keeps_selection() {
        let (backend, state) = app();
        backend.set_receipts(vec![summary("MP1")]);
        backend.insert_detail(detail("MP1"));
        reload(&state).await.unwrap();

        select_receipt(&state, "MISSING").await.unwrap_err();

        assert_eq!(state.store.selected().unwrap().receipt_id(), "MP1");
        assert!(state.reporter.banner().is_some());
    }
}
