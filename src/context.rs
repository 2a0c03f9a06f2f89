//! Dashboard Context
//!
//! Store, store client and settings shared with every dashboard component
//! via the Leptos Context API. User intents enter the controller here.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::LocationApi;
use crate::controller::{self, LocationListStateStoreFields};
use crate::models::LocationFilter;
use crate::notify::show_blocking_error;
use crate::store::DashboardStore;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    api: StoredValue<Rc<dyn LocationApi>, LocalStorage>,
    /// Quiet period before typed search text triggers a load
    pub search_debounce_ms: u32,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, api: Rc<dyn LocationApi>, search_debounce_ms: u32) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            search_debounce_ms,
        }
    }

    /// Reload the list for the current filter and the given settled search.
    pub fn load(&self, debounced_search: String) {
        let store = self.store;
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            controller::load(api.as_ref(), &store, debounced_search).await;
        });
    }

    /// Reload with the search text of the last load.
    pub fn retry(&self) {
        let search = self.store.debounced_search_query().get_untracked();
        log::info!("[LOAD] Retry requested");
        self.load(search);
    }

    pub fn toggle_star(&self, location_id: u32) {
        let store = self.store;
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            controller::toggle_star(api.as_ref(), &store, location_id, |err| {
                show_blocking_error(err.user_message());
            })
            .await;
        });
    }

    pub fn toggle_active(&self, location_id: u32) {
        self.store.update(|s| s.toggle_active(location_id));
    }

    pub fn toggle_active_all(&self) {
        self.store.update(|s| s.toggle_active_all());
    }

    pub fn set_filter(&self, filter: LocationFilter) {
        self.store.update(|s| s.set_filter(filter));
    }

    pub fn set_search_query(&self, query: String) {
        self.store.update(|s| s.set_search_query(query));
    }

    pub fn set_page(&self, page: usize) {
        self.store.update(|s| s.set_page(page));
    }
}

pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
