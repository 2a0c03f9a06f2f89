use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;
use leptos_debounce::Debouncer;

use super::actions::{load, toggle_star};
use super::state::{LoadOutcome, LocationListState, StarWriteOutcome};
use crate::api::{LocationApi, MockLocationStore};
use crate::error::{ApiError, ApiResult, DashboardError};
use crate::models::{LocationFilter, LocationQuery, LocationsResponse, RemoteLocation, Robot};

/// Mock store that counts calls and can fail the location read.
struct CountingApi {
    store: MockLocationStore,
    fetches: Cell<usize>,
    fail_reads: Cell<bool>,
    queries: RefCell<Vec<LocationQuery>>,
}

impl CountingApi {
    fn new(store: MockLocationStore) -> Self {
        Self {
            store,
            fetches: Cell::new(0),
            fail_reads: Cell::new(false),
            queries: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl LocationApi for CountingApi {
    async fn fetch_locations(&self, query: &LocationQuery) -> ApiResult<LocationsResponse> {
        self.fetches.set(self.fetches.get() + 1);
        self.queries.borrow_mut().push(query.clone());
        if self.fail_reads.get() {
            return Err(ApiError::Request("connection reset".into()));
        }
        self.store.fetch_locations(query).await
    }

    async fn fetch_starred_ids(&self) -> ApiResult<Vec<u32>> {
        self.store.fetch_starred_ids().await
    }

    async fn replace_starred_ids(&self, ids: &[u32]) -> ApiResult<()> {
        self.store.replace_starred_ids(ids).await
    }
}

fn remote(id: u32, name: &str, location_type: Option<&str>, robot: Option<&str>) -> RemoteLocation {
    RemoteLocation {
        id,
        name: name.to_string(),
        location_type: location_type.map(str::to_string),
        robot: robot.map(|id| Robot {
            id: id.to_string(),
            is_online: false,
        }),
    }
}

fn small_store() -> MockLocationStore {
    MockLocationStore::new(vec![
        remote(1, "Lobby", Some("Serving"), Some("R2D2")),
        remote(2, "Kitchen", Some("Serving"), None),
        remote(3, "Ward", Some("Disinfection"), Some("C3PO")),
        remote(4, "Shed", None, None),
    ])
}

fn loaded_state(api: &dyn LocationApi) -> RefCell<LocationListState> {
    let state = RefCell::new(LocationListState::new(6));
    let outcome = block_on(load(api, &state, String::new()));
    assert!(matches!(outcome, Some(LoadOutcome::Applied { .. })));
    state
}

// ========================
// Load
// ========================

#[test]
fn test_load_joins_starred_ids_and_resets_active() {
    let api = CountingApi::new(small_store().with_starred(&[1, 3]));
    let state = loaded_state(&api);

    state.borrow_mut().toggle_active_all();
    block_on(load(&api, &state, String::new()));

    let state = state.borrow();
    assert!(!state.loading);
    assert_eq!(state.locations.len(), 4);
    for location in &state.locations {
        assert_eq!(location.starred, [1, 3].contains(&location.id));
        assert!(!location.is_active);
    }
    assert_eq!(state.locations[3].location_type, "Unknown");
}

#[test]
fn test_failed_load_keeps_rows_and_stops_loading() {
    let api = CountingApi::new(small_store());
    let state = loaded_state(&api);
    let before = state.borrow().locations.clone();

    api.fail_reads.set(true);
    let outcome = block_on(load(&api, &state, "kit".to_string()));

    assert!(matches!(
        outcome,
        Some(LoadOutcome::Failed(DashboardError::FetchFailure(_)))
    ));
    let state = state.borrow();
    assert_eq!(state.locations, before);
    assert!(!state.loading);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Could not load locations. Please try again.")
    );
}

#[test]
fn test_stale_load_response_is_discarded() {
    let mut state = LocationListState::new(6);
    let first = state.begin_load("lo".to_string());
    let second = state.begin_load("lobby".to_string());

    let stale = state.finish_load(first.ticket, Ok((vec![remote(9, "Old", None, None)], vec![])));
    assert_eq!(stale, LoadOutcome::Stale);
    assert!(state.loading);
    assert!(state.locations.is_empty());

    let applied = state.finish_load(second.ticket, Ok((vec![remote(1, "Lobby", None, None)], vec![1])));
    assert_eq!(applied, LoadOutcome::Applied { count: 1 });
    assert!(!state.loading);
    assert!(state.locations[0].starred);
}

#[test]
fn test_starred_filter_queries_store_for_starred_rows() {
    let api = CountingApi::new(small_store().with_starred(&[2]));
    let state = RefCell::new(LocationListState::new(6));
    state.borrow_mut().set_filter(LocationFilter::Starred);

    block_on(load(&api, &state, String::new()));

    assert!(api.queries.borrow()[0].starred);
    let view = state.borrow().page_view();
    assert_eq!(view.rows.len(), 1);
    assert!(view.rows.iter().all(|row| row.starred));
}

// ========================
// Starring
// ========================

#[test]
fn test_star_write_sends_full_set() {
    let api = CountingApi::new(small_store().with_starred(&[3]));
    let state = loaded_state(&api);

    let mut notified = Vec::new();
    let outcome = block_on(toggle_star(&api, &state, 1, |err| notified.push(err.clone())));

    assert_eq!(outcome, Some(StarWriteOutcome::Confirmed));
    assert!(notified.is_empty());
    assert_eq!(api.store.starred_ids(), vec![1, 3]);
    assert!(!state.borrow().is_star_pending(1));
}

#[test]
fn test_failed_star_write_restores_previous_state() {
    let api = CountingApi::new(small_store().with_starred(&[3]));
    let state = loaded_state(&api);
    let before = state.borrow().clone();

    api.store.set_fail_writes(true);
    let mut notified = Vec::new();
    let outcome = block_on(toggle_star(&api, &state, 2, |err| notified.push(err.clone())));

    assert!(matches!(outcome, Some(StarWriteOutcome::Reverted(_))));
    assert_eq!(state.borrow().locations, before.locations);
    assert!(state.borrow().pending_star_writes.is_empty());
    assert_eq!(notified.len(), 1);
    assert!(matches!(
        notified[0],
        DashboardError::StarWriteFailure { location_id: 2, .. }
    ));
    assert_eq!(api.store.starred_ids(), vec![3]);
}

#[test]
fn test_stale_star_failure_keeps_newer_toggle() {
    let mut state = LocationListState::new(6);
    let ticket = state.begin_load(String::new()).ticket;
    state.finish_load(ticket, Ok((vec![remote(1, "Lobby", None, None)], vec![])));

    let first = state.toggle_star(1).unwrap();
    let second = state.toggle_star(1).unwrap();
    assert!(!state.locations[0].starred);

    let failure = ApiError::Status { status: 500, message: "boom".into() };
    let outcome = state.finish_star_write(&first, Err(failure));
    assert!(matches!(outcome, StarWriteOutcome::Failed(_)));
    assert!(!state.locations[0].starred);
    assert!(state.is_star_pending(1));

    assert_eq!(state.finish_star_write(&second, Ok(())), StarWriteOutcome::Confirmed);
    assert!(!state.is_star_pending(1));
}

#[test]
fn test_star_failure_after_reload_does_not_revert() {
    let mut state = LocationListState::new(6);
    let ticket = state.begin_load(String::new()).ticket;
    state.finish_load(ticket, Ok((vec![remote(1, "Lobby", None, None)], vec![])));

    let write = state.toggle_star(1).unwrap();
    let ticket = state.begin_load(String::new()).ticket;
    state.finish_load(ticket, Ok((vec![remote(1, "Lobby", None, None)], vec![1])));

    let outcome = state.finish_star_write(&write, Err(ApiError::Request("offline".into())));
    assert!(matches!(outcome, StarWriteOutcome::Failed(_)));
    assert!(state.locations[0].starred);
}

#[test]
fn test_star_unknown_location_issues_no_write() {
    let api = CountingApi::new(small_store());
    let state = loaded_state(&api);

    let outcome = block_on(toggle_star(&api, &state, 42, |_| panic!("no write expected")));
    assert_eq!(outcome, None);
    assert_eq!(api.store.write_count(), 0);
}

#[test]
fn test_star_under_search_keeps_stars_outside_loaded_rows() {
    let api = CountingApi::new(small_store().with_starred(&[3]));
    let state = RefCell::new(LocationListState::new(6));
    block_on(load(&api, &state, "lob".to_string()));
    assert_eq!(state.borrow().locations.len(), 1);

    let outcome = block_on(toggle_star(&api, &state, 1, |_| panic!("write should succeed")));
    assert_eq!(outcome, Some(StarWriteOutcome::Confirmed));
    assert_eq!(api.store.starred_ids(), vec![1, 3]);
    assert!(state.borrow().remote_starred.contains(&1));

    block_on(toggle_star(&api, &state, 1, |_| panic!("write should succeed")));
    assert_eq!(api.store.starred_ids(), vec![3]);
}

#[test]
fn test_unstar_under_starred_filter_keeps_other_stars() {
    let api = CountingApi::new(small_store().with_starred(&[2, 3]));
    let state = RefCell::new(LocationListState::new(6));
    state.borrow_mut().set_filter(LocationFilter::Starred);
    block_on(load(&api, &state, "kit".to_string()));

    let ids: Vec<u32> = state.borrow().locations.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2]);

    block_on(toggle_star(&api, &state, 2, |_| panic!("write should succeed")));
    assert_eq!(api.store.starred_ids(), vec![3]);
}

// ========================
// Activation, filter and paging
// ========================

#[test]
fn test_toggle_active_all_with_mixed_set_activates_all() {
    let api = CountingApi::new(small_store());
    let state = loaded_state(&api);
    let mut state = state.borrow_mut();

    state.toggle_active(2);
    assert!(!state.all_active());
    state.toggle_active_all();
    assert!(state.locations.iter().all(|l| l.is_active));

    state.toggle_active_all();
    assert!(state.locations.iter().all(|l| !l.is_active));
}

#[test]
fn test_filter_and_search_reset_page() {
    let mut state = LocationListState::new(1);
    let ticket = state.begin_load(String::new()).ticket;
    let rows = (1..=4).map(|id| remote(id, "Site", Some("Serving"), None)).collect();
    state.finish_load(ticket, Ok((rows, vec![])));

    state.set_page(3);
    assert_eq!(state.current_page, 3);
    state.set_search_query("s".to_string());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.debounced_search_query, "");

    state.set_page(2);
    state.set_filter(LocationFilter::Serving);
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_set_page_clamps_to_page_count() {
    let mut state = LocationListState::new(6);
    state.set_page(5);
    assert_eq!(state.current_page, 1);

    let ticket = state.begin_load(String::new()).ticket;
    let rows = (1..=13).map(|id| remote(id, "Site", None, None)).collect();
    state.finish_load(ticket, Ok((rows, vec![])));

    state.set_page(9);
    assert_eq!(state.current_page, 3);
    assert_eq!(state.page_view().rows.len(), 1);
    state.set_page(0);
    assert_eq!(state.current_page, 1);
}

// ========================
// Debounced search
// ========================

#[test]
fn test_rapid_search_settles_once_and_fetches_once() {
    let api = CountingApi::new(small_store());
    let state = loaded_state(&api);
    let fetches_after_mount = api.fetches.get();

    let mut debouncer = Debouncer::new(String::new());
    let mut tickets = Vec::new();
    for text in ["l", "lo", "lob"] {
        state.borrow_mut().set_search_query(text.to_string());
        tickets.push(debouncer.push(text.to_string()));
    }

    // Every timer fires; only the last one may settle.
    for ticket in tickets {
        if let Some(settled) = debouncer.settle(ticket) {
            block_on(load(&api, &state, settled));
        }
    }

    assert_eq!(api.fetches.get(), fetches_after_mount + 1);
    assert_eq!(api.queries.borrow().last().unwrap().search, "lob");
    let view = state.borrow().page_view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "Lobby");
}
