use leptos::*;

use myparking_boundary::Profile;
use myparking_frontend_api::ParkingApi;

use super::{fetch_on_mount, submit, HookState, StateCell};

pub type ProfileState = HookState<Profile>;

const PROFILE_UPDATED: &str = "Profile has been updated.";

pub async fn update_profile<C>(api: &ParkingApi, state: &C, profile: &Profile)
where
    C: StateCell<ProfileState>,
{
    if submit(state, api.update_profile(profile)).await.is_some() {
        state.modify(|s| s.status = Some(PROFILE_UPDATED.to_owned()));
    }
}

#[derive(Clone, Copy)]
pub struct ProfileHook {
    pub state: RwSignal<ProfileState>,
    pub update: Action<Profile, ()>,
}

pub fn use_profile(api: ParkingApi) -> ProfileHook {
    let state = create_rw_signal(ProfileState::default());
    let fetch_api = api.clone();
    fetch_on_mount(state, async move { fetch_api.profile().await });
    let update = create_action(move |profile: &Profile| {
        let api = api.clone();
        let profile = profile.clone();
        async move { update_profile(&api, &state, &profile).await }
    });
    ProfileHook { state, update }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::hooks::tests::*;
    use myparking_frontend_api::Method;

    fn profile() -> Profile {
        Profile {
            name: "John".into(),
            email: "john@example.com".into(),
        }
    }

    #[test]
    fn update_reports_status() {
        let (transport, session) = setup();
        transport.respond_json(200, &profile());
        let state = cell::<Profile>();
        block_on(update_profile(&session.api(), &state, &profile()));
        assert_eq!(transport.count(Method::Put, "profile"), 1);
        assert_eq!(state.borrow().status.as_deref(), Some(PROFILE_UPDATED));
    }

    #[test]
    fn rejected_update_has_no_status() {
        let (transport, session) = setup();
        transport.respond_json(422, &json!({ "errors": { "email": ["The email has already been taken."] } }));
        let state = cell::<Profile>();
        state.modify(|s| s.status = Some(PROFILE_UPDATED.to_owned()));
        block_on(update_profile(&session.api(), &state, &profile()));
        let s = state.snapshot();
        assert_eq!(s.status, None);
        assert_eq!(s.errors.field("email"), ["The email has already been taken."]);
    }
}
