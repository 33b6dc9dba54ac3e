use leptos::*;

use myparking_boundary::NewVehicle;
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_change, submit, HookState, Navigate, StateCell};
use crate::Page;

/// Form data of the vehicle that is created or edited.
pub type VehicleState = HookState<NewVehicle>;

pub async fn create_vehicle<C>(api: &ParkingApi, state: &C, navigate: &Navigate, vehicle: &NewVehicle)
where
    C: StateCell<VehicleState>,
{
    if submit(state, api.create_vehicle(vehicle)).await.is_some() {
        log::info!("Created vehicle {}", vehicle.plate_number);
        navigate(Page::Vehicles.path());
    }
}

pub async fn update_vehicle<C>(
    api: &ParkingApi,
    state: &C,
    navigate: &Navigate,
    id: u64,
    vehicle: &NewVehicle,
) where
    C: StateCell<VehicleState>,
{
    if submit(state, api.update_vehicle(id, vehicle)).await.is_some() {
        log::info!("Updated vehicle {id}");
        navigate(Page::Vehicles.path());
    }
}

#[derive(Clone, Copy)]
pub struct VehicleHook {
    pub state: RwSignal<VehicleState>,
    /// Creates a new vehicle or updates the one with the given ID.
    pub save: Action<(Option<u64>, NewVehicle), ()>,
}

pub fn use_vehicle(api: ParkingApi, navigate: Navigate, id: Signal<Option<u64>>) -> VehicleHook {
    let state = create_rw_signal(VehicleState::default());
    let fetch_api = api.clone();
    fetch_on_change(
        state,
        move || id.get(),
        move |id| {
            let api = fetch_api.clone();
            async move { api.vehicle(id).await.map(NewVehicle::from) }
        },
    );
    let save = create_action(move |(id, vehicle): &(Option<u64>, NewVehicle)| {
        let api = api.clone();
        let navigate = navigate.clone();
        let id = *id;
        let vehicle = vehicle.clone();
        async move {
            match id {
                Some(id) => update_vehicle(&api, &state, &navigate, id, &vehicle).await,
                None => create_vehicle(&api, &state, &navigate, &vehicle).await,
            }
        }
    });
    VehicleHook { state, save }
}
