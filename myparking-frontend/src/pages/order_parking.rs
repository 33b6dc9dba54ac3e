use leptos::{ev, *};

use myparking_boundary::{StartParking, Vehicle, Zone};

use crate::{
    components::*,
    hooks::{use_api, use_navigator, use_parking, use_vehicles, use_zones, ParkingHook, StateSignals},
    Page,
};

const SELECT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-kvm-blue focus:outline-none";

#[component]
pub fn OrderParking() -> impl IntoView {
    let api = use_api();
    let vehicles = use_vehicles(api.clone()).state;
    let zones = use_zones(api.clone());
    let ParkingHook { state, start } = use_parking(api, use_navigator());

    let vehicle_id = create_rw_signal(None::<u64>);
    let zone_id = create_rw_signal(None::<u64>);

    // Preselect the first entries as soon as the lists have been loaded.
    create_effect(move |_| {
        let first = vehicles.with(|s| s.data.first().map(|v| v.id));
        if vehicle_id.get_untracked().is_none() {
            vehicle_id.set(first);
        }
    });
    create_effect(move |_| {
        let first = zones.with(|s| s.data.first().map(|z| z.id));
        if zone_id.get_untracked().is_none() {
            zone_id.set(first);
        }
    });

    let errors = state.errors();
    let disabled = Signal::derive(move || {
        state.with(|s| s.loading) || vehicle_id.get().is_none() || zone_id.get().is_none()
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(vehicle_id), Some(zone_id)) = (vehicle_id.get_untracked(), zone_id.get_untracked())
        else {
            log::warn!("Unable to start parking: vehicle or zone missing");
            return;
        };
        start.dispatch(StartParking {
            vehicle_id,
            zone_id,
        });
    };

    view! {
      <Card title = "Order parking">
        <form on:submit=on_submit>
          <FailureNotice failure = state.failure() />
          <FailureNotice failure = vehicles.failure() />
          <FailureNotice failure = zones.failure() />
          <ValidationError errors field = "general" />
          <div class="mb-4">
            <label for="vehicle_id" class="block mb-1 text-gray-700">"Vehicle"</label>
            <select
              id = "vehicle_id"
              class = SELECT_CLASS
              on:change = move |ev| vehicle_id.set(event_target_value(&ev).parse().ok())
            >
              <For
                each = move || vehicles.with(|s| s.data.clone())
                key = |vehicle: &Vehicle| vehicle.id
                children = move |vehicle: Vehicle| {
                    let id = vehicle.id;
                    view! {
                      <option value = id.to_string() prop:selected = move || vehicle_id.get() == Some(id)>
                        { vehicle.plate_number }
                      </option>
                    }
                }
              />
            </select>
            <ValidationError errors field = "vehicle_id" />
          </div>
          <div class="mb-4">
            <label for="zone_id" class="block mb-1 text-gray-700">"Zone"</label>
            <select
              id = "zone_id"
              class = SELECT_CLASS
              on:change = move |ev| zone_id.set(event_target_value(&ev).parse().ok())
            >
              <For
                each = move || zones.with(|s| s.data.clone())
                key = |zone: &Zone| zone.id
                children = move |zone: Zone| {
                    let id = zone.id;
                    view! {
                      <option value = id.to_string() prop:selected = move || zone_id.get() == Some(id)>
                        { format!("{} ({} €/h)", zone.name, zone.price_per_hour) }
                      </option>
                    }
                }
              />
            </select>
            <ValidationError errors field = "zone_id" />
          </div>
          <div class="flex items-center space-x-4">
            <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
              "Start parking"
            </button>
            <NamedLink page = Page::ActiveParkings class = SECONDARY_BUTTON_CLASS>"Cancel"</NamedLink>
          </div>
        </form>
      </Card>
    }
}
