use leptos::*;

use myparking_boundary::Parking;

use crate::{
    components::*,
    hooks::{use_active_parkings, use_api, use_parking_history, ActiveParkingsHook, StateSignals},
    Page,
};

#[component]
pub fn ActiveParkings() -> impl IntoView {
    let ActiveParkingsHook { state, stop } = use_active_parkings(use_api());

    let parkings = Signal::derive(move || state.with(|s| s.data.clone()));
    let is_empty = move || state.with(|s| !s.loading && s.data.is_empty());

    view! {
      <Card title = "Active parkings">
        <div class="mb-6">
          <NamedLink page = Page::OrderParking class = BUTTON_CLASS>"Order parking"</NamedLink>
        </div>
        <FailureNotice failure = state.failure() />
        <Spinner loading = state.loading() />
        <Show when=is_empty>
          <p class="text-gray-600">"There are no active parkings."</p>
        </Show>
        <ul class="divide-y divide-gray-200">
          <For
            each = move || parkings.get()
            key = |parking: &Parking| parking.id
            children = move |parking: Parking| {
                let id = parking.id;
                view! {
                  <li class="flex items-center justify-between py-3">
                    <ParkingSummary parking />
                    <button
                      class = BUTTON_CLASS
                      prop:disabled = move || state.with(|s| s.loading)
                      on:click = move |_| stop.dispatch(id)
                    >
                      "Stop"
                    </button>
                  </li>
                }
            }
          />
        </ul>
      </Card>
    }
}

#[component]
pub fn ParkingHistory() -> impl IntoView {
    let state = use_parking_history(use_api());

    let parkings = Signal::derive(move || state.with(|s| s.data.clone()));
    let is_empty = move || state.with(|s| !s.loading && s.data.is_empty());

    view! {
      <Card title = "Parking history">
        <FailureNotice failure = state.failure() />
        <Spinner loading = state.loading() />
        <Show when=is_empty>
          <p class="text-gray-600">"No stopped parkings yet."</p>
        </Show>
        <ul class="divide-y divide-gray-200">
          <For
            each = move || parkings.get()
            key = |parking: &Parking| parking.id
            children = move |parking: Parking| {
                let id = parking.id;
                let total_price = parking.total_price;
                view! {
                  <li class="flex items-center justify-between py-3">
                    <ParkingSummary parking />
                    <div class="text-right">
                      <p class="font-semibold">{ format!("{total_price} €") }</p>
                      <NamedLink page = Page::ParkingDetails id = id class = "text-sm text-kvm-blue">
                        "View details"
                      </NamedLink>
                    </div>
                  </li>
                }
            }
          />
        </ul>
      </Card>
    }
}

#[component]
fn ParkingSummary(parking: Parking) -> impl IntoView {
    let Parking {
        vehicle,
        zone,
        start_time,
        stop_time,
        ..
    } = parking;
    let period = match stop_time {
        Some(stop_time) => format!("{start_time} - {stop_time}"),
        None => format!("since {start_time}"),
    };

    view! {
      <div>
        <p class="font-semibold uppercase">{ vehicle.plate_number }</p>
        <p class="text-sm text-gray-500">{ vehicle.description }</p>
        <p class="text-sm">{ zone.name } " (" { format!("{} €/h", zone.price_per_hour) } ")"</p>
        <p class="text-sm text-gray-500">{ period }</p>
      </div>
    }
}
