use leptos::{ev, *};
use leptos_router::*;

use myparking_boundary::NewVehicle;

use crate::{
    components::*,
    hooks::{use_api, use_navigator, use_vehicle, StateSignals, VehicleHook},
    Page,
};

/// Form for creating a new vehicle or, if the route has an `:id`,
/// for editing an existing one.
#[component]
pub fn EditVehicle() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
    });

    let VehicleHook { state, save } = use_vehicle(use_api(), use_navigator(), id);

    let plate_number = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());

    let errors = state.errors();
    let disabled = state.loading();

    let fetched = create_memo(move |_| state.with(|s| s.data.clone()));
    create_effect(move |_| {
        let NewVehicle {
            plate_number: fetched_plate_number,
            description: fetched_description,
        } = fetched.get();
        plate_number.set(fetched_plate_number);
        description.set(fetched_description.unwrap_or_default());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let description = description.get_untracked();
        let vehicle = NewVehicle {
            plate_number: plate_number.get_untracked(),
            description: (!description.trim().is_empty()).then_some(description),
        };
        save.dispatch((id.get_untracked(), vehicle));
    };

    let title = if id.get_untracked().is_some() {
        "Edit vehicle"
    } else {
        "Add vehicle"
    };

    view! {
      <Card title>
        <form on:submit=on_submit>
          <FailureNotice failure = state.failure() />
          <InputField label = "License plate" name = "plate_number" value = plate_number errors disabled />
          <InputField label = "Description" name = "description" value = description errors disabled />
          <div class="flex items-center space-x-4">
            <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
              "Save vehicle"
            </button>
            <NamedLink page = Page::Vehicles class = SECONDARY_BUTTON_CLASS>"Cancel"</NamedLink>
          </div>
        </form>
      </Card>
    }
}
