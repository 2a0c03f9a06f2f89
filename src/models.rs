//! Frontend Models
//!
//! Dashboard rows and the wire structures of the location store.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for locations the store returns without a type.
pub const UNKNOWN_LOCATION_TYPE: &str = "Unknown";

/// Robot linked to a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: String,
    pub is_online: bool,
}

/// One dashboard row.
///
/// `is_active` lives only in the client. `starred` mirrors membership in the
/// remote starred-id set as of the last load, or the optimistic value while a
/// write is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub location_type: String,
    pub robot: Option<Robot>,
    pub is_active: bool,
    pub starred: bool,
}

impl Location {
    /// Join a fetched location with the starred-id set.
    pub fn from_remote(remote: RemoteLocation, starred_ids: &HashSet<u32>) -> Self {
        Self {
            starred: starred_ids.contains(&remote.id),
            id: remote.id,
            name: remote.name,
            location_type: remote
                .location_type
                .unwrap_or_else(|| UNKNOWN_LOCATION_TYPE.to_string()),
            robot: remote.robot,
            is_active: false,
        }
    }

    pub fn robot_id(&self) -> Option<&str> {
        self.robot.as_ref().map(|robot| robot.id.as_str())
    }
}

/// Dropdown filter over the loaded rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Starred,
    Serving,
    Disinfection,
}

impl LocationFilter {
    pub const ALL: [LocationFilter; 4] = [
        LocationFilter::All,
        LocationFilter::Starred,
        LocationFilter::Serving,
        LocationFilter::Disinfection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LocationFilter::All => "All Locations",
            LocationFilter::Starred => "Starred",
            LocationFilter::Serving => "Serving",
            LocationFilter::Disinfection => "Disinfection",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.label() == label)
    }

    /// Location type this filter selects, if it filters by type.
    pub fn location_type(self) -> Option<&'static str> {
        match self {
            LocationFilter::Serving => Some("Serving"),
            LocationFilter::Disinfection => Some("Disinfection"),
            LocationFilter::All | LocationFilter::Starred => None,
        }
    }

    /// The store filters starred rows server-side; other filters are local.
    pub fn starred_only(self) -> bool {
        self == LocationFilter::Starred
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ========================
// Wire Structures
// ========================

/// Location as returned by `GET /locations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLocation {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robot: Option<Robot>,
}

/// Query parameters of `GET /locations`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LocationQuery {
    pub search: String,
    pub starred: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<RemoteLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredIdsResponse {
    pub location_ids: Vec<u32>,
}

/// Error body of a failed `PUT /starred_location_ids`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_remote_defaults_type_and_clears_active() {
        let remote: RemoteLocation =
            serde_json::from_str(r#"{"id": 4, "name": "Patio"}"#).unwrap();
        let starred: HashSet<u32> = [4].into_iter().collect();

        let location = Location::from_remote(remote, &starred);
        assert_eq!(location.location_type, UNKNOWN_LOCATION_TYPE);
        assert!(location.starred);
        assert!(!location.is_active);
        assert_eq!(location.robot_id(), None);
    }

    #[test]
    fn test_remote_location_wire_names() {
        let json = r#"{"id": 1, "name": "Lobby", "type": "Serving",
                       "robot": {"id": "R2D2", "is_online": true}}"#;
        let remote: RemoteLocation = serde_json::from_str(json).unwrap();
        assert_eq!(remote.location_type.as_deref(), Some("Serving"));
        assert_eq!(
            remote.robot,
            Some(Robot { id: "R2D2".into(), is_online: true })
        );
    }

    #[test]
    fn test_filter_labels_round_trip() {
        for filter in LocationFilter::ALL {
            assert_eq!(LocationFilter::from_label(filter.label()), Some(filter));
        }
        assert_eq!(LocationFilter::from_label("Cleaning"), None);
        assert!(LocationFilter::Starred.starred_only());
        assert_eq!(LocationFilter::Serving.location_type(), Some("Serving"));
    }
}
