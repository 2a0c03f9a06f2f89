//! Location Table Component
//!
//! One page of locations with a "check all" header checkbox.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::{CheckboxComponent, LargeButton, StarButton, TextButton};
use crate::models::Location;

#[component]
pub fn LocationTable(
    #[prop(into)] rows: Signal<Vec<Location>>,
    #[prop(into)] all_active: Signal<bool>,
    /// Ids of rows whose star is being saved
    #[prop(into)]
    pending_stars: Signal<HashSet<u32>>,
    #[prop(into)] on_toggle_all: Callback<()>,
    #[prop(into)] on_toggle_active: Callback<u32>,
    #[prop(into)] on_toggle_star: Callback<u32>,
    #[prop(into)] on_open: Callback<u32>,
    #[prop(into)] on_assign_robot: Callback<u32>,
) -> impl IntoView {
    view! {
        <table class="location-table">
            <thead>
                <tr>
                    <th class="col-checkbox">
                        <CheckboxComponent checked=all_active on_change=move |_: ()| on_toggle_all.run(()) />
                    </th>
                    <th class="col-star"></th>
                    <th class="col-name">"Locations"</th>
                    <th class="col-robot">"Robots"</th>
                    <th class="col-type">"Location Types"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|location| (location.id, location.starred, location.is_active)
                    children=move |location| {
                        let id = location.id;
                        view! {
                            <LocationRow
                                location=location
                                pending=Signal::derive(move || pending_stars.with(|ids| ids.contains(&id)))
                                on_toggle_active=on_toggle_active
                                on_toggle_star=on_toggle_star
                                on_open=on_open
                                on_assign_robot=on_assign_robot
                            />
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn LocationRow(
    location: Location,
    #[prop(into)] pending: Signal<bool>,
    on_toggle_active: Callback<u32>,
    on_toggle_star: Callback<u32>,
    on_open: Callback<u32>,
    on_assign_robot: Callback<u32>,
) -> impl IntoView {
    let id = location.id;
    let robot_cell = match location.robot {
        Some(robot) => view! {
            <span class="robot-status">
                <span class=if robot.is_online { "status-dot online" } else { "status-dot offline" }>
                    "●"
                </span>
                {robot.id}
            </span>
        }
        .into_any(),
        None => view! {
            <TextButton label="Add" underline=true on_click=move |_: ()| on_assign_robot.run(id) />
        }
        .into_any(),
    };

    view! {
        <tr class="location-row">
            <td class="col-checkbox">
                <CheckboxComponent checked=location.is_active on_change=move |_: ()| on_toggle_active.run(id) />
            </td>
            <td class="col-star">
                <StarButton starred=location.starred pending=pending on_click=move |_: ()| on_toggle_star.run(id) />
            </td>
            <td class="col-name">
                <LargeButton
                    label=location.name
                    is_active=location.is_active
                    has_right_arrow=true
                    on_click=move |_: ()| on_open.run(id)
                />
            </td>
            <td class="col-robot">{robot_cell}</td>
            <td class="col-type">{location.location_type}</td>
        </tr>
    }
}
