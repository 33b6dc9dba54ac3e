use leptos::*;

use myparking_boundary::Parking;
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_mount, load, FetchSlot, HookState, StateCell};

pub type ParkingsState = HookState<Vec<Parking>>;

/// Stops a parking and reloads the list of active parkings.
///
/// The state keeps loading until the reloaded list has arrived.
/// Clearing `refetch` discards the reload.
pub async fn stop_parking<C>(api: &ParkingApi, state: &C, refetch: &FetchSlot, id: u64)
where
    C: StateCell<ParkingsState>,
{
    state.modify(HookState::begin_submit);
    if let Err(err) = api.stop_parking(id).await {
        state.modify(|s| {
            s.loading = false;
            s.fail(err);
        });
        return;
    }
    log::info!("Stopped parking {id}");
    let api = api.clone();
    let (fetch, task) = load(state, async move { api.active_parkings().await });
    refetch.replace(fetch);
    task.await;
}

#[derive(Clone, Copy)]
pub struct ActiveParkingsHook {
    pub state: RwSignal<ParkingsState>,
    pub stop: Action<u64, ()>,
}

pub fn use_active_parkings(api: ParkingApi) -> ActiveParkingsHook {
    let state = create_rw_signal(ParkingsState::default());
    let fetch_api = api.clone();
    fetch_on_mount(state, async move { fetch_api.active_parkings().await });
    let refetch = FetchSlot::default();
    let stop = {
        let refetch = refetch.clone();
        create_action(move |id: &u64| {
            let api = api.clone();
            let refetch = refetch.clone();
            let id = *id;
            async move { stop_parking(&api, &state, &refetch, id).await }
        })
    };
    on_cleanup(move || refetch.clear());
    ActiveParkingsHook { state, stop }
}

pub fn use_parking_history(api: ParkingApi) -> RwSignal<ParkingsState> {
    let state = create_rw_signal(ParkingsState::default());
    fetch_on_mount(state, async move { api.parking_history().await });
    state
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, FutureExt};
    use serde_json::json;

    use super::*;
    use crate::hooks::tests::*;
    use myparking_frontend_api::{Method, Response};

    fn parking(id: u64, stop_time: Option<&str>) -> serde_json::Value {
        json!({
          "id": id,
          "vehicle": { "plate_number": "AB123", "description": "Car" },
          "zone": { "name": "Green Zone", "price_per_hour": 100 },
          "start_time": "2023-05-01 10:00:00",
          "stop_time": stop_time,
          "total_price": 250
        })
    }

    #[test]
    fn stop_reloads_active_parkings() {
        let (transport, session) = setup();
        transport.respond_json(200, &json!({ "data": parking(1, Some("2023-05-01 12:30:00")) }));
        transport.respond_json(200, &json!({ "data": [parking(2, None)] }));
        let state = cell::<Vec<Parking>>();

        block_on(stop_parking(&session.api(), &state, &FetchSlot::default(), 1));

        assert_eq!(transport.count(Method::Put, "parkings/1"), 1);
        assert_eq!(transport.count(Method::Get, "parkings"), 1);
        let s = state.snapshot();
        assert_eq!(s.data.len(), 1);
        assert_eq!(s.data[0].id, 2);
        assert!(!s.loading);
    }

    #[test]
    fn failed_stop_does_not_reload() {
        let (transport, session) = setup();
        transport.respond_json(500, &json!({ "message": "Server Error" }));
        let state = cell::<Vec<Parking>>();
        block_on(stop_parking(&session.api(), &state, &FetchSlot::default(), 1));
        assert_eq!(transport.requests().len(), 1);
        assert!(state.borrow().failure.is_some());
    }

    #[test]
    fn stays_loading_until_list_is_reloaded() {
        let (transport, session) = setup();
        transport.respond(200, "");
        let reply = transport.respond_later();
        let state = cell::<Vec<Parking>>();
        state.modify(|s| s.errors.add("general", "old"));
        let refetch = FetchSlot::default();
        let api = session.api();

        let mut task = Box::pin(stop_parking(&api, &state, &refetch, 1));
        assert!(task.as_mut().now_or_never().is_none());
        let s = state.snapshot();
        assert!(s.loading);
        assert!(s.errors.is_empty());

        let body = json!({ "data": [parking(2, None)] });
        reply.send(Response::new(200, body.to_string())).unwrap();
        block_on(task);
        let s = state.snapshot();
        assert!(!s.loading);
        assert_eq!(s.data[0].id, 2);
    }

    #[test]
    fn teardown_discards_reloaded_list() {
        let (transport, session) = setup();
        transport.respond(200, "");
        let reply = transport.respond_later();
        let state = cell::<Vec<Parking>>();
        let refetch = FetchSlot::default();
        let api = session.api();

        let mut task = Box::pin(stop_parking(&api, &state, &refetch, 1));
        assert!(task.as_mut().now_or_never().is_none());
        refetch.clear();
        let body = json!({ "data": [parking(2, None)] });
        reply.send(Response::new(200, body.to_string())).unwrap();
        block_on(task);

        assert!(state.borrow().data.is_empty());
    }

    #[test]
    fn mounting_active_parkings_fetches_once() {
        with_runtime(|| {
            let (transport, session) = setup();
            transport.respond_json(200, &json!({ "data": [parking(2, None)] }));
            let ActiveParkingsHook { state, .. } = use_active_parkings(session.api());
            assert_eq!(transport.count(Method::Get, "parkings"), 1);
            assert_eq!(state.get_untracked().data.len(), 1);
        });
    }

    #[test]
    fn fetch_history() {
        let (transport, session) = setup();
        transport.respond_json(200, &json!({ "data": [parking(1, Some("2023-05-01 12:30:00"))] }));
        let state = cell::<Vec<Parking>>();
        let api = session.api();
        let (_fetch, task) = crate::hooks::load(&state, async move { api.parking_history().await });
        block_on(task);
        let s = state.snapshot();
        assert_eq!(transport.count(Method::Get, "parkings/history"), 1);
        assert!(!s.data[0].is_active());
        assert_eq!(s.data[0].total_price.to_string(), "2.50");
    }
}
