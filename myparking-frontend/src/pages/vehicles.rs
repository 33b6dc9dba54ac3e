use leptos::*;

use myparking_boundary::Vehicle;

use crate::{
    components::*,
    hooks::{use_api, use_vehicles, StateSignals, VehiclesHook},
    Page,
};

#[component]
pub fn VehiclesList() -> impl IntoView {
    let VehiclesHook { state, delete } = use_vehicles(use_api());

    let vehicles = Signal::derive(move || state.with(|s| s.data.clone()));
    let is_empty = move || state.with(|s| !s.loading && s.data.is_empty());

    view! {
      <Card title = "My vehicles">
        <div class="mb-6">
          <NamedLink page = Page::CreateVehicle class = BUTTON_CLASS>"Add vehicle"</NamedLink>
        </div>
        <FailureNotice failure = state.failure() />
        <Spinner loading = state.loading() />
        <Show when=is_empty>
          <p class="text-gray-600">"You don't have any vehicles yet."</p>
        </Show>
        <ul class="divide-y divide-gray-200">
          <For
            each = move || vehicles.get()
            key = |vehicle: &Vehicle| vehicle.id
            children = move |vehicle: Vehicle| {
                let Vehicle { id, plate_number, description } = vehicle;
                view! {
                  <li class="flex items-center justify-between py-3">
                    <div>
                      <p class="font-semibold uppercase">{ plate_number }</p>
                      <p class="text-sm text-gray-500">{ description }</p>
                    </div>
                    <div class="space-x-4">
                      <NamedLink page = Page::EditVehicle id = id class = "text-kvm-blue">"Edit"</NamedLink>
                      <button
                        class = "text-red-700"
                        on:click = move |_| delete.dispatch(id)
                      >
                        "Delete"
                      </button>
                    </div>
                  </li>
                }
            }
          />
        </ul>
      </Card>
    }
}
