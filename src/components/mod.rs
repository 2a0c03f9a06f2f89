//! UI Components
//!
//! Stateless Leptos components for the dashboard. They render props and
//! report user intents through callbacks.

mod checkbox;
mod dropdown_menu;
mod fleet_dashboard;
mod header_title;
mod large_button;
mod location_table;
mod pagination;
mod search_input;
mod star_button;
mod text_button;

pub use checkbox::CheckboxComponent;
pub use dropdown_menu::DropdownMenu;
pub use fleet_dashboard::FleetDashboard;
pub use header_title::HeaderTitle;
pub use large_button::LargeButton;
pub use location_table::LocationTable;
pub use pagination::CustomPagination;
pub use search_input::SearchInput;
pub use star_button::StarButton;
pub use text_button::TextButton;
