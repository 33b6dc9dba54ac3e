use leptos::*;

use myparking_boundary::Zone;
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_mount, HookState};

pub fn use_zones(api: ParkingApi) -> RwSignal<HookState<Vec<Zone>>> {
    let state = create_rw_signal(HookState::default());
    fetch_on_mount(state, async move { api.zones().await });
    state
}
