//! Location List State
//!
//! Canonical dashboard state and its synchronous transitions. Remote calls
//! live in `actions`; this module only decides what a response means for the
//! state that is currently shown.

use std::collections::{BTreeSet, HashMap, HashSet};

use reactive_stores::Store;

use super::view::{self, PageView};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{ApiError, DashboardError};
use crate::models::{Location, LocationFilter, LocationQuery, RemoteLocation};

/// Identifies one load request. Only the most recently issued ticket applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub query: LocationQuery,
}

/// Result of both reads issued by a load
pub type LoadResult = Result<(Vec<RemoteLocation>, Vec<u32>), DashboardError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    /// A newer load was issued before this one completed.
    Stale,
    Failed(DashboardError),
}

/// An optimistic star toggle waiting for its replace call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarWrite {
    pub location_id: u32,
    /// Per-row write generation
    pub generation: u64,
    /// Load generation of the list the toggle was made on
    pub list_generation: u64,
    /// Row as it was before the toggle
    pub snapshot: Location,
    /// Full starred-id set to send, ascending
    pub starred_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarWriteOutcome {
    Confirmed,
    /// The write failed and the row was restored from its snapshot.
    Reverted(DashboardError),
    /// The write failed but a newer toggle or a reload already replaced the
    /// optimistic state, so nothing was restored.
    Failed(DashboardError),
}

impl StarWriteOutcome {
    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            StarWriteOutcome::Confirmed => None,
            StarWriteOutcome::Reverted(err) | StarWriteOutcome::Failed(err) => Some(err),
        }
    }
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct LocationListState {
    /// Rows of the last applied load, in store order
    pub locations: Vec<Location>,
    pub filter: LocationFilter,
    /// Raw search box text
    pub search_query: String,
    /// Search text the current list was loaded and filtered with
    pub debounced_search_query: String,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub loading: bool,
    /// Message of the last failed load, cleared by the next successful one
    pub last_error: Option<String>,
    /// Generation of the most recently issued load
    pub load_generation: u64,
    /// Generation of the load whose rows are in `locations`
    pub list_generation: u64,
    pub star_write_seq: u64,
    /// Starred-id set as last read from or confirmed by the store. Covers
    /// locations outside the loaded rows.
    pub remote_starred: HashSet<u32>,
    /// Location id -> generation of its newest in-flight star write
    pub pending_star_writes: HashMap<u32, u64>,
}

impl Default for LocationListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl LocationListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            locations: Vec::new(),
            filter: LocationFilter::All,
            search_query: String::new(),
            debounced_search_query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            loading: true,
            last_error: None,
            load_generation: 0,
            list_generation: 0,
            star_write_seq: 0,
            remote_starred: HashSet::new(),
            pending_star_writes: HashMap::new(),
        }
    }

    // ========================
    // Loading
    // ========================

    /// Start a load for the current filter and the given settled search text.
    pub fn begin_load(&mut self, debounced_search: String) -> LoadRequest {
        self.load_generation += 1;
        self.loading = true;
        self.debounced_search_query = debounced_search;
        LoadRequest {
            ticket: LoadTicket(self.load_generation),
            query: LocationQuery {
                search: self.debounced_search_query.clone(),
                starred: self.filter.starred_only(),
            },
        }
    }

    /// Apply the joined result of a load if it is still the latest one.
    ///
    /// A failed load keeps the previous rows. Either way the loading flag is
    /// cleared, unless a newer load is still running.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: LoadResult) -> LoadOutcome {
        if ticket.0 != self.load_generation {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok((remote, starred_ids)) => {
                let starred: HashSet<u32> = starred_ids.into_iter().collect();
                self.locations = remote
                    .into_iter()
                    .map(|location| Location::from_remote(location, &starred))
                    .collect();
                self.remote_starred = starred;
                self.list_generation = ticket.0;
                self.pending_star_writes.clear();
                self.last_error = None;
                LoadOutcome::Applied {
                    count: self.locations.len(),
                }
            }
            Err(err) => {
                self.last_error = Some(err.user_message().to_string());
                LoadOutcome::Failed(err)
            }
        }
    }

    // ========================
    // Starring
    // ========================

    /// Flip `starred` on one row and describe the write that confirms it.
    pub fn toggle_star(&mut self, id: u32) -> Option<StarWrite> {
        let row = self.locations.iter_mut().find(|location| location.id == id)?;
        let snapshot = row.clone();
        row.starred = !row.starred;

        self.star_write_seq += 1;
        self.pending_star_writes.insert(id, self.star_write_seq);
        Some(StarWrite {
            location_id: id,
            generation: self.star_write_seq,
            list_generation: self.list_generation,
            snapshot,
            starred_ids: self.starred_ids(),
        })
    }

    pub fn finish_star_write(
        &mut self,
        write: &StarWrite,
        result: Result<(), ApiError>,
    ) -> StarWriteOutcome {
        let is_current = self.pending_star_writes.get(&write.location_id) == Some(&write.generation)
            && self.list_generation == write.list_generation;
        if is_current {
            self.pending_star_writes.remove(&write.location_id);
        }

        let source = match result {
            Ok(()) => {
                if self.list_generation == write.list_generation {
                    self.remote_starred = write.starred_ids.iter().copied().collect();
                }
                return StarWriteOutcome::Confirmed;
            }
            Err(source) => source,
        };
        let err = DashboardError::StarWriteFailure {
            location_id: write.location_id,
            source,
        };
        if !is_current {
            return StarWriteOutcome::Failed(err);
        }
        if let Some(row) = self
            .locations
            .iter_mut()
            .find(|location| location.id == write.location_id)
        {
            row.starred = write.snapshot.starred;
        }
        StarWriteOutcome::Reverted(err)
    }

    pub fn is_star_pending(&self, id: u32) -> bool {
        self.pending_star_writes.contains_key(&id)
    }

    /// Starred-id set for a full replace: the remote set with the current
    /// star of every loaded row laid over it, ascending.
    ///
    /// A search or the Starred filter loads only part of the store, so the
    /// loaded rows alone would drop stars outside them.
    pub fn starred_ids(&self) -> Vec<u32> {
        let mut ids: BTreeSet<u32> = self.remote_starred.iter().copied().collect();
        for location in &self.locations {
            if location.starred {
                ids.insert(location.id);
            } else {
                ids.remove(&location.id);
            }
        }
        ids.into_iter().collect()
    }

    // ========================
    // Activation
    // ========================

    pub fn toggle_active(&mut self, id: u32) {
        if let Some(row) = self.locations.iter_mut().find(|location| location.id == id) {
            row.is_active = !row.is_active;
        }
    }

    /// Deactivate everything if all rows are active, otherwise activate all.
    pub fn toggle_active_all(&mut self) {
        let activate = !self.all_active();
        for row in &mut self.locations {
            row.is_active = activate;
        }
    }

    /// True for an empty list.
    pub fn all_active(&self) -> bool {
        self.locations.iter().all(|location| location.is_active)
    }

    // ========================
    // Filter, search and paging
    // ========================

    pub fn set_filter(&mut self, filter: LocationFilter) {
        self.filter = filter;
        self.current_page = 1;
    }

    /// Record raw search text. The page resets on every keystroke, before the
    /// text settles.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.current_page = 1;
    }

    /// Move to `page`, clamped to `[1, max(1, page_count)]`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count().max(1));
    }

    pub fn page_count(&self) -> usize {
        let filtered = view::filter_locations(&self.locations, self.filter, &self.debounced_search_query);
        view::page_count(filtered.len(), self.page_size)
    }

    pub fn page_view(&self) -> PageView {
        view::filtered_paginated_view(
            &self.locations,
            self.filter,
            &self.debounced_search_query,
            self.current_page,
            self.page_size,
        )
    }
}
