//! Demo locations served by the mock store.

use crate::models::{RemoteLocation, Robot};

fn location(id: u32, name: &str, location_type: Option<&str>, robot: Option<(&str, bool)>) -> RemoteLocation {
    RemoteLocation {
        id,
        name: name.to_string(),
        location_type: location_type.map(str::to_string),
        robot: robot.map(|(id, is_online)| Robot {
            id: id.to_string(),
            is_online,
        }),
    }
}

pub fn demo_locations() -> Vec<RemoteLocation> {
    vec![
        location(0, "Spicy restaurant", Some("Serving"), Some(("abcdefg", true))),
        location(1, "Salty restaurant", Some("Serving"), Some(("hijklmn", true))),
        location(2, "Sweet restaurant", Some("Serving"), Some(("opqrstu", false))),
        location(3, "Sour restaurant", Some("Serving"), None),
        location(4, "Umami diner", Some("Serving"), Some(("vwxyz12", true))),
        location(5, "Central hospital ward A", Some("Disinfection"), Some(("R2D2", true))),
        location(6, "Central hospital ward B", Some("Disinfection"), Some(("C3PO", false))),
        location(7, "Airport terminal 1", Some("Disinfection"), None),
        location(8, "Airport terminal 2", Some("Disinfection"), Some(("BB8", true))),
        location(9, "Hotel lobby", Some("Serving"), Some(("K2SO", true))),
        location(10, "Conference hall", None, Some(("IG88", false))),
        location(11, "Office kitchen", Some("Serving"), None),
        location(12, "Train station", Some("Disinfection"), Some(("L337", true))),
        location(13, "Warehouse dock", Some("Delivery"), Some(("MSE6", true))),
    ]
}
