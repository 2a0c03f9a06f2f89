//! In-Browser Mock Store
//!
//! Serves the location store contract from memory so the dashboard runs
//! without a server. The starred-id set can be kept in `sessionStorage`,
//! which makes stars survive a page reload within the tab.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{seed, LocationApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{LocationQuery, LocationsResponse, RemoteLocation};

const STARRED_IDS_KEY: &str = "starred_location_ids";
const WRITE_FAILURE_MESSAGE: &str = "Encountered unexpected error";

pub struct MockLocationStore {
    locations: Vec<RemoteLocation>,
    starred_ids: RefCell<Vec<u32>>,
    persist: bool,
    latency_ms: u32,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MockLocationStore {
    pub fn new(locations: Vec<RemoteLocation>) -> Self {
        Self {
            locations,
            starred_ids: RefCell::new(Vec::new()),
            persist: false,
            latency_ms: 0,
            fail_writes: Cell::new(false),
            writes: Cell::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::demo_locations())
    }

    /// Load and persist the starred set through `sessionStorage` (wasm only).
    pub fn with_session_storage(mut self) -> Self {
        self.persist = true;
        if let Some(ids) = read_persisted_ids() {
            *self.starred_ids.borrow_mut() = ids;
        }
        self
    }

    pub fn with_starred(self, ids: &[u32]) -> Self {
        *self.starred_ids.borrow_mut() = ids.to_vec();
        self
    }

    /// Delay every response by `latency_ms` (wasm only).
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Make every following replace fail with status 500.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn starred_ids(&self) -> Vec<u32> {
        self.starred_ids.borrow().clone()
    }

    /// Number of replace calls received, failed ones included.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn matches(location: &RemoteLocation, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let search = search.to_lowercase();
        location.name.to_lowercase().contains(&search)
            || location
                .robot
                .as_ref()
                .is_some_and(|robot| robot.id.to_lowercase().contains(&search))
    }

    async fn simulate_latency(&self) {
        #[cfg(target_arch = "wasm32")]
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl LocationApi for MockLocationStore {
    async fn fetch_locations(&self, query: &LocationQuery) -> ApiResult<LocationsResponse> {
        self.simulate_latency().await;
        let starred = self.starred_ids.borrow();
        let locations: Vec<RemoteLocation> = self
            .locations
            .iter()
            .filter(|location| Self::matches(location, &query.search))
            .filter(|location| !query.starred || starred.contains(&location.id))
            .cloned()
            .collect();
        log::debug!(
            "[MOCK] GET /locations search={:?} starred={} -> {} rows",
            query.search,
            query.starred,
            locations.len()
        );
        Ok(LocationsResponse {
            total_count: Some(locations.len()),
            locations,
        })
    }

    async fn fetch_starred_ids(&self) -> ApiResult<Vec<u32>> {
        self.simulate_latency().await;
        Ok(self.starred_ids())
    }

    async fn replace_starred_ids(&self, ids: &[u32]) -> ApiResult<()> {
        self.simulate_latency().await;
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            log::debug!("[MOCK] PUT /starred_location_ids -> 500");
            return Err(ApiError::Status {
                status: 500,
                message: WRITE_FAILURE_MESSAGE.to_string(),
            });
        }
        *self.starred_ids.borrow_mut() = ids.to_vec();
        if self.persist {
            write_persisted_ids(ids);
        }
        log::debug!("[MOCK] PUT /starred_location_ids {:?} -> 204", ids);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_persisted_ids() -> Option<Vec<u32>> {
    let raw = session_storage()?.get_item(STARRED_IDS_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(ids) => Some(ids),
        Err(err) => {
            log::warn!("[MOCK] Ignoring malformed {}: {}", STARRED_IDS_KEY, err);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_persisted_ids(ids: &[u32]) {
    let Some(storage) = session_storage() else {
        return;
    };
    let raw = match serde_json::to_string(ids) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("[MOCK] Could not encode starred ids: {}", err);
            return;
        }
    };
    if let Err(err) = storage.set_item(STARRED_IDS_KEY, &raw) {
        log::warn!("[MOCK] Could not persist starred ids: {}", crate::notify::js_error(err));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_persisted_ids() -> Option<Vec<u32>> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_persisted_ids(_ids: &[u32]) {}
