use leptos::*;

use myparking_boundary::UpdatePassword;
use myparking_frontend_api::ParkingApi;

use super::{submit, HookState, StateCell};

const PASSWORD_UPDATED: &str = "Password has been updated.";

pub async fn update_password<C>(api: &ParkingApi, state: &C, password: &UpdatePassword)
where
    C: StateCell<HookState<()>>,
{
    if submit(state, api.update_password(password)).await.is_some() {
        state.modify(|s| s.status = Some(PASSWORD_UPDATED.to_owned()));
    }
}

#[derive(Clone, Copy)]
pub struct PasswordHook {
    pub state: RwSignal<HookState<()>>,
    pub update: Action<UpdatePassword, ()>,
}

pub fn use_password(api: ParkingApi) -> PasswordHook {
    let state = create_rw_signal(HookState::default());
    let update = create_action(move |password: &UpdatePassword| {
        let api = api.clone();
        let password = password.clone();
        async move { update_password(&api, &state, &password).await }
    });
    PasswordHook { state, update }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::hooks::tests::*;

    #[test]
    fn wrong_current_password() {
        let (transport, session) = setup();
        transport.respond_json(
            422,
            &json!({ "errors": { "current_password": ["The password is incorrect."] } }),
        );
        let state = cell::<()>();
        block_on(update_password(&session.api(), &state, &UpdatePassword::default()));
        let s = state.snapshot();
        assert_eq!(s.errors.field("current_password"), ["The password is incorrect."]);
        assert_eq!(s.status, None);
        assert!(!s.loading);
    }

    #[test]
    fn password_updated() {
        let (transport, session) = setup();
        transport.respond(202, "");
        let state = cell::<()>();
        block_on(update_password(&session.api(), &state, &UpdatePassword::default()));
        assert_eq!(state.borrow().status.as_deref(), Some(PASSWORD_UPDATED));
    }
}
