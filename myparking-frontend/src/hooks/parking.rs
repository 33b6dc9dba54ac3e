use leptos::*;

use myparking_boundary::{Parking, StartParking};
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_change, submit, HookState, Navigate, StateCell};
use crate::Page;

pub async fn start_parking<C>(api: &ParkingApi, state: &C, navigate: &Navigate, parking: StartParking)
where
    C: StateCell<HookState<()>>,
{
    if submit(state, api.start_parking(&parking)).await.is_some() {
        log::info!(
            "Started parking of vehicle {} in zone {}",
            parking.vehicle_id,
            parking.zone_id
        );
        navigate(Page::ActiveParkings.path());
    }
}

#[derive(Clone, Copy)]
pub struct ParkingHook {
    pub state: RwSignal<HookState<()>>,
    pub start: Action<StartParking, ()>,
}

pub fn use_parking(api: ParkingApi, navigate: Navigate) -> ParkingHook {
    let state = create_rw_signal(HookState::default());
    let start = create_action(move |parking: &StartParking| {
        let api = api.clone();
        let navigate = navigate.clone();
        let parking = *parking;
        async move { start_parking(&api, &state, &navigate, parking).await }
    });
    ParkingHook { state, start }
}

pub fn use_parking_details(
    api: ParkingApi,
    id: Signal<Option<u64>>,
) -> RwSignal<HookState<Option<Parking>>> {
    let state = create_rw_signal(HookState::default());
    fetch_on_change(
        state,
        move || id.get(),
        move |id| {
            let api = api.clone();
            async move { api.parking(id).await.map(Some) }
        },
    );
    state
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::hooks::tests::*;
    use myparking_frontend_api::Method;

    const START: StartParking = StartParking {
        vehicle_id: 1,
        zone_id: 2,
    };

    #[test]
    fn start_navigates_to_active_parkings() {
        let (transport, session) = setup();
        transport.respond_json(201, &json!({ "data": { "id": 9 } }));
        let (navigate, paths) = recorder();
        let state = cell::<()>();
        block_on(start_parking(&session.api(), &state, &navigate, START));
        assert_eq!(transport.count(Method::Post, "parkings/start"), 1);
        assert_eq!(*paths.borrow(), ["/parkings/active"]);
    }

    #[test]
    fn start_rejected_for_active_vehicle() {
        let (transport, session) = setup();
        transport.respond_json(
            422,
            &json!({ "errors": { "general": ["Can't start parking twice using same vehicle. Please stop currently active parking."] } }),
        );
        let (navigate, paths) = recorder();
        let state = cell::<()>();
        block_on(start_parking(&session.api(), &state, &navigate, START));
        assert_eq!(state.borrow().errors.field("general").len(), 1);
        assert!(paths.borrow().is_empty());
    }

    fn parking_data(id: u64) -> serde_json::Value {
        json!({ "data": {
          "id": id,
          "vehicle": { "plate_number": "AB123" },
          "zone": { "name": "Green Zone", "price_per_hour": 100 },
          "start_time": "2023-05-01 10:00:00",
          "stop_time": null,
          "total_price": 0
        }})
    }

    #[test]
    fn details_follow_the_route_id() {
        with_runtime(|| {
            let (transport, session) = setup();
            transport.respond_json(200, &parking_data(1));
            transport.respond_json(200, &parking_data(2));
            let id = create_rw_signal(Some(1_u64));
            let state = use_parking_details(session.api(), id.into());
            assert_eq!(transport.count(Method::Get, "parkings/1"), 1);
            assert_eq!(state.with_untracked(|s| s.data.as_ref().map(|p| p.id)), Some(1));

            id.set(Some(2));
            assert_eq!(transport.count(Method::Get, "parkings/2"), 1);
            assert_eq!(state.with_untracked(|s| s.data.as_ref().map(|p| p.id)), Some(2));
        });
    }

    #[test]
    fn missing_id_discards_previous_parking() {
        with_runtime(|| {
            let (transport, session) = setup();
            transport.respond_json(200, &parking_data(5));
            let id = create_rw_signal(Some(5_u64));
            let state = use_parking_details(session.api(), id.into());
            assert!(state.with_untracked(|s| s.data.is_some()));

            id.set(None);
            let s = state.get_untracked();
            assert_eq!(s.data, None);
            assert!(!s.loading);
            assert_eq!(transport.requests().len(), 1);
        });
    }
}
