//! Controller Actions
//!
//! Async operations that talk to the location store. State is only touched
//! through [`StateHandle`] and never borrowed across an `.await`.

use std::cell::RefCell;

use futures::future::try_join;

use super::state::{LoadOutcome, LocationListState, StarWriteOutcome};
use crate::api::LocationApi;
use crate::error::DashboardError;

/// Owner of the dashboard state.
///
/// Returns `None` once the owner has been disposed, which ends the action
/// without applying anything.
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&mut LocationListState) -> R) -> Option<R>;
}

impl StateHandle for RefCell<LocationListState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut LocationListState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch locations and the starred-id set concurrently and join them.
///
/// Either read failing fails the load as a unit.
pub async fn load<A, S>(api: &A, state: &S, debounced_search: String) -> Option<LoadOutcome>
where
    A: LocationApi + ?Sized,
    S: StateHandle,
{
    let request = state.with_state(|s| s.begin_load(debounced_search))?;
    log::debug!(
        "[LOAD] {:?} search={:?} starred={}",
        request.ticket,
        request.query.search,
        request.query.starred
    );

    let result = try_join(api.fetch_locations(&request.query), api.fetch_starred_ids())
        .await
        .map(|(page, starred_ids)| (page.locations, starred_ids))
        .map_err(DashboardError::FetchFailure);

    let outcome = state.with_state(|s| s.finish_load(request.ticket, result))?;
    match &outcome {
        LoadOutcome::Applied { count } => log::info!("[LOAD] Loaded {} locations", count),
        LoadOutcome::Stale => log::debug!("[LOAD] Discarded stale response {:?}", request.ticket),
        LoadOutcome::Failed(err) => log::warn!("[LOAD] {}", err),
    }
    Some(outcome)
}

/// Optimistically toggle a star and replace the remote set.
///
/// `notify` is called for every failed write, whether or not the row could
/// be restored.
pub async fn toggle_star<A, S>(
    api: &A,
    state: &S,
    location_id: u32,
    notify: impl FnOnce(&DashboardError),
) -> Option<StarWriteOutcome>
where
    A: LocationApi + ?Sized,
    S: StateHandle,
{
    let write = state.with_state(|s| s.toggle_star(location_id)).flatten()?;
    log::debug!(
        "[STAR] Location {} -> {} (write {}), sending {:?}",
        location_id,
        !write.snapshot.starred,
        write.generation,
        write.starred_ids
    );

    let result = api.replace_starred_ids(&write.starred_ids).await;
    let outcome = state.with_state(|s| s.finish_star_write(&write, result))?;
    match &outcome {
        StarWriteOutcome::Confirmed => log::debug!("[STAR] Write {} confirmed", write.generation),
        StarWriteOutcome::Reverted(err) => log::error!("[STAR] {}; reverted", err),
        StarWriteOutcome::Failed(err) => log::error!("[STAR] {}; newer state kept", err),
    }
    if let Some(err) = outcome.error() {
        notify(err);
    }
    Some(outcome)
}
