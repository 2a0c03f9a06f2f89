//! Location List Controller
//!
//! Owns the canonical list of locations, derives the filtered page, and
//! reconciles optimistic star toggles with the remote starred-id set.

mod actions;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use actions::{load, toggle_star, StateHandle};
pub use state::{LocationListState, LocationListStateStoreFields};
