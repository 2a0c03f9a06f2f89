//! Location Store Client
//!
//! The dashboard reads locations and the starred-id set through
//! [`LocationApi`], backed either by the HTTP store or by the in-browser mock.

mod http;
mod mock;
mod seed;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::{Backend, DashboardConfig};
use crate::error::ApiResult;
use crate::models::{LocationQuery, LocationsResponse};

pub use http::HttpLocationApi;
pub use mock::MockLocationStore;

/// Remote source of truth for locations and starred ids.
///
/// The starred-id set has no partial update: it is always read and replaced
/// in full.
#[async_trait(?Send)]
pub trait LocationApi {
    /// `GET /locations?search=..&starred=..`
    async fn fetch_locations(&self, query: &LocationQuery) -> ApiResult<LocationsResponse>;

    /// `GET /starred_location_ids`
    async fn fetch_starred_ids(&self) -> ApiResult<Vec<u32>>;

    /// `PUT /starred_location_ids`
    async fn replace_starred_ids(&self, ids: &[u32]) -> ApiResult<()>;
}

/// Build the store client selected by the configuration.
pub fn connect(config: &DashboardConfig) -> Rc<dyn LocationApi> {
    match &config.backend {
        Backend::Http { base_url } => {
            log::info!("[APP] Using location store at {}", base_url);
            Rc::new(HttpLocationApi::new(base_url))
        }
        Backend::Mock { latency_ms, fail_writes } => {
            log::info!(
                "[APP] Using in-browser mock store (latency {}ms, failing writes: {})",
                latency_ms,
                fail_writes
            );
            let store = MockLocationStore::seeded()
                .with_session_storage()
                .with_latency(*latency_ms);
            store.set_fail_writes(*fail_writes);
            Rc::new(store)
        }
    }
}
