//! Filtered, paginated view over the loaded locations.

use std::ops::Range;

use crate::models::{Location, LocationFilter};

/// One rendered page of the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageView {
    pub rows: Vec<Location>,
    pub page_count: usize,
    pub current_page: usize,
    pub filtered_count: usize,
}

impl PageView {
    /// Nothing matched the filter and search.
    pub fn is_empty_result(&self) -> bool {
        self.page_count == 0
    }
}

pub fn matches_filter(location: &Location, filter: LocationFilter) -> bool {
    match filter {
        LocationFilter::All => true,
        LocationFilter::Starred => location.starred,
        LocationFilter::Serving | LocationFilter::Disinfection => {
            filter.location_type() == Some(location.location_type.as_str())
        }
    }
}

/// Case-insensitive substring match on the name or the linked robot's id.
pub fn matches_search(location: &Location, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    location.name.to_lowercase().contains(&query)
        || location
            .robot_id()
            .is_some_and(|robot_id| robot_id.to_lowercase().contains(&query))
}

pub fn filter_locations<'a>(
    locations: &'a [Location],
    filter: LocationFilter,
    query: &str,
) -> Vec<&'a Location> {
    locations
        .iter()
        .filter(|location| matches_filter(location, filter))
        .filter(|location| matches_search(location, query))
        .collect()
}

pub fn page_count(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_count.div_ceil(page_size)
}

/// Index range of `page` (1-based), clipped to `len`. Out-of-range pages are empty.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

pub fn filtered_paginated_view(
    locations: &[Location],
    filter: LocationFilter,
    query: &str,
    current_page: usize,
    page_size: usize,
) -> PageView {
    let filtered = filter_locations(locations, filter, query);
    let range = page_range(current_page, page_size, filtered.len());
    PageView {
        rows: filtered[range].iter().map(|location| (*location).clone()).collect(),
        page_count: page_count(filtered.len(), page_size),
        current_page,
        filtered_count: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Robot;

    fn make_location(id: u32, name: &str, location_type: &str, robot: Option<&str>) -> Location {
        Location {
            id,
            name: name.to_string(),
            location_type: location_type.to_string(),
            robot: robot.map(|id| Robot {
                id: id.to_string(),
                is_online: true,
            }),
            is_active: false,
            starred: false,
        }
    }

    fn numbered(count: u32) -> Vec<Location> {
        (0..count)
            .map(|id| make_location(id, &format!("Site {id}"), "Serving", None))
            .collect()
    }

    #[test]
    fn test_thirteen_rows_make_three_pages() {
        let locations = numbered(13);

        let page = filtered_paginated_view(&locations, LocationFilter::All, "", 1, 6);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.rows.len(), 6);

        let last = filtered_paginated_view(&locations, LocationFilter::All, "", 3, 6);
        assert_eq!(last.rows.len(), 1);
        assert_eq!(last.rows[0].id, 12);

        let beyond = filtered_paginated_view(&locations, LocationFilter::All, "", 4, 6);
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.page_count, 3);
    }

    #[test]
    fn test_no_matches_has_zero_pages() {
        let page = filtered_paginated_view(&numbered(5), LocationFilter::Disinfection, "", 1, 6);
        assert_eq!(page.page_count, 0);
        assert!(page.is_empty_result());
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_robot() {
        let lobby = make_location(1, "Lobby", "Serving", None);
        let hall = make_location(2, "Hall", "Serving", Some("R2D2"));

        assert!(matches_search(&lobby, "lob"));
        assert!(matches_search(&hall, "r2d2"));
        assert!(matches_search(&hall, "HAL"));
        assert!(!matches_search(&lobby, "r2d2"));
        assert!(matches_search(&lobby, ""));
    }

    #[test]
    fn test_filters_by_star_and_type() {
        let mut locations = vec![
            make_location(1, "Kitchen", "Serving", None),
            make_location(2, "Ward", "Disinfection", None),
            make_location(3, "Shed", "Unknown", None),
        ];
        locations[1].starred = true;

        let starred = filter_locations(&locations, LocationFilter::Starred, "");
        assert_eq!(starred.len(), 1);
        assert!(starred.iter().all(|l| l.starred));

        let serving = filter_locations(&locations, LocationFilter::Serving, "");
        assert_eq!(serving.len(), 1);
        assert!(serving.iter().all(|l| l.location_type == "Serving"));

        assert_eq!(filter_locations(&locations, LocationFilter::All, "").len(), 3);
    }

    #[test]
    fn test_page_range_edges() {
        assert_eq!(page_range(1, 6, 0), 0..0);
        assert_eq!(page_range(2, 6, 7), 6..7);
        assert_eq!(page_range(0, 6, 7), 0..0);
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(3, 0), 0);
    }
}
