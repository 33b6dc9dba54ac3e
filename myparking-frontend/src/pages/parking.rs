use leptos::*;
use leptos_router::*;

use myparking_boundary::Parking;

use crate::{
    components::*,
    hooks::{use_api, use_parking_details, StateSignals},
    Page,
};

#[component]
pub fn ParkingDetails() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
    });

    let state = use_parking_details(use_api(), id);
    let parking = Signal::derive(move || state.with(|s| s.data.clone()));

    view! {
      <Card title = "Parking details">
        <FailureNotice failure = state.failure() />
        <Spinner loading = state.loading() />
        { move || parking.get().map(|parking| view! { <ParkingTable parking /> }) }
        <div class="pt-6">
          <NamedLink page = Page::ParkingHistory class = SECONDARY_BUTTON_CLASS>"Back"</NamedLink>
        </div>
      </Card>
    }
}

#[component]
fn ParkingTable(parking: Parking) -> impl IntoView {
    let Parking {
        vehicle,
        zone,
        start_time,
        stop_time,
        total_price,
        ..
    } = parking;

    view! {
      <table class="w-full text-left">
        <tbody>
          <tr>
            <th class="py-2 pr-4">"Vehicle"</th>
            <td class="uppercase">{ vehicle.plate_number }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"Description"</th>
            <td>{ vehicle.description }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"Zone"</th>
            <td>{ zone.name }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"Price"</th>
            <td>{ format!("{} €/h", zone.price_per_hour) }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"From"</th>
            <td>{ start_time }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"To"</th>
            <td>{ stop_time }</td>
          </tr>
          <tr>
            <th class="py-2 pr-4">"Total"</th>
            <td class="font-semibold">{ format!("{total_price} €") }</td>
          </tr>
        </tbody>
      </table>
    }
}
