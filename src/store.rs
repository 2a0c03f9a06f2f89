//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! controller state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{LocationListState, StateHandle};

/// Type alias for the store
pub type DashboardStore = Store<LocationListState>;

pub fn create_dashboard_store(page_size: usize) -> DashboardStore {
    Store::new(LocationListState::new(page_size))
}

/// Async actions write through the store; a disposed store yields `None`.
impl StateHandle for DashboardStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut LocationListState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
