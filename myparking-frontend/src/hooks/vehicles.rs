use leptos::*;

use myparking_boundary::Vehicle;
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_mount, submit, HookState, StateCell};

pub type VehiclesState = HookState<Vec<Vehicle>>;

pub async fn delete_vehicle<C>(api: &ParkingApi, state: &C, id: u64)
where
    C: StateCell<VehiclesState>,
{
    log::debug!("Delete vehicle {id}");
    if submit(state, api.delete_vehicle(id)).await.is_some() {
        state.modify(|s| s.data.retain(|v| v.id != id));
    }
}

#[derive(Clone, Copy)]
pub struct VehiclesHook {
    pub state: RwSignal<VehiclesState>,
    pub delete: Action<u64, ()>,
}

pub fn use_vehicles(api: ParkingApi) -> VehiclesHook {
    let state = create_rw_signal(VehiclesState::default());
    let fetch_api = api.clone();
    fetch_on_mount(state, async move { fetch_api.vehicles().await });
    let delete = create_action(move |id: &u64| {
        let api = api.clone();
        let id = *id;
        async move { delete_vehicle(&api, &state, id).await }
    });
    VehiclesHook { state, delete }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, FutureExt};
    use serde_json::json;

    use super::*;
    use crate::hooks::{load, tests::*};
    use myparking_frontend_api::{Method, Response};

    #[test]
    fn mount_issues_exactly_one_fetch() {
        let (transport, session) = setup();
        transport.respond_json(
            200,
            &json!({ "data": [{ "id": 1, "plate_number": "AB123", "description": "Car" }] }),
        );
        let state = cell::<Vec<Vehicle>>();
        let api = session.api();
        let (_fetch, task) = load(&state, async move { api.vehicles().await });
        block_on(task);
        assert_eq!(transport.count(Method::Get, "vehicles"), 1);
        assert_eq!(state.borrow().data[0].plate_number, "AB123");
    }

    #[test]
    fn unmount_before_response_cancels() {
        let (transport, session) = setup();
        let reply = transport.respond_later();
        let state = cell::<Vec<Vehicle>>();
        let api = session.api();
        let (fetch, task) = load(&state, async move { api.vehicles().await });
        let mut task = Box::pin(task);
        assert!(task.as_mut().now_or_never().is_none());
        assert_eq!(transport.count(Method::Get, "vehicles"), 1);

        drop(fetch);
        let body = json!({ "data": [{ "id": 1, "plate_number": "AB123" }] });
        reply.send(Response::new(200, body.to_string())).unwrap();
        block_on(task);

        let s = state.snapshot();
        assert!(s.data.is_empty());
        assert!(s.errors.is_empty());
        assert_eq!(s.failure, None);
    }

    #[test]
    fn delete_removes_vehicle_after_success() {
        let (transport, session) = setup();
        transport.respond(204, "");
        let state = cell::<Vec<Vehicle>>();
        state.modify(|s| {
            s.data = vec![
                Vehicle {
                    id: 1,
                    plate_number: "AB123".into(),
                    description: None,
                },
                Vehicle {
                    id: 2,
                    plate_number: "XY987".into(),
                    description: None,
                },
            ];
        });
        block_on(delete_vehicle(&session.api(), &state, 1));
        assert_eq!(transport.count(Method::Delete, "vehicles/1"), 1);
        let ids: Vec<_> = state.borrow().data.iter().map(|v| v.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn failed_delete_keeps_vehicle() {
        let (transport, session) = setup();
        transport.fail("offline");
        let state = cell::<Vec<Vehicle>>();
        state.modify(|s| {
            s.data = vec![Vehicle {
                id: 1,
                plate_number: "AB123".into(),
                description: None,
            }];
        });
        block_on(delete_vehicle(&session.api(), &state, 1));
        let s = state.snapshot();
        assert_eq!(s.data.len(), 1);
        assert_eq!(s.failure.as_deref(), Some("offline"));
    }

    #[test]
    fn mounting_the_list_fetches_exactly_once() {
        with_runtime(|| {
            let (transport, session) = setup();
            transport.respond_json(
                200,
                &json!({ "data": [{ "id": 1, "plate_number": "AB123" }] }),
            );
            let VehiclesHook { state, .. } = use_vehicles(session.api());
            assert_eq!(transport.requests().len(), 1);
            assert_eq!(transport.count(Method::Get, "vehicles"), 1);
            let s = state.get_untracked();
            assert_eq!(s.data.len(), 1);
            assert!(!s.loading);
        });
    }
}
