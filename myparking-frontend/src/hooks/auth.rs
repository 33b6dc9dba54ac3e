use leptos::*;

use myparking_boundary::{Credentials, NewUser};
use myparking_frontend_api::Session;

use super::{submit, HookState, Navigate, StateCell};
use crate::Page;

pub async fn login<C>(session: &Session, state: &C, navigate: &Navigate, credentials: &Credentials)
where
    C: StateCell<HookState<()>>,
{
    if submit(state, session.login(credentials)).await.is_some() {
        log::info!("Successfully logged in");
        navigate(Page::ActiveParkings.path());
    }
}

pub async fn register<C>(session: &Session, state: &C, navigate: &Navigate, new_user: &NewUser)
where
    C: StateCell<HookState<()>>,
{
    if submit(state, session.register(new_user)).await.is_some() {
        log::info!("Successfully registered");
        navigate(Page::Vehicles.path());
    }
}

#[derive(Clone, Copy)]
pub struct AuthHook {
    pub state: RwSignal<HookState<()>>,
    pub login: Action<Credentials, ()>,
    pub register: Action<NewUser, ()>,
}

pub fn use_auth(session: Session, navigate: Navigate) -> AuthHook {
    let state = create_rw_signal(HookState::default());
    let login = {
        let session = session.clone();
        let navigate = navigate.clone();
        create_action(move |credentials: &Credentials| {
            let session = session.clone();
            let navigate = navigate.clone();
            let credentials = credentials.clone();
            async move { login(&session, &state, &navigate, &credentials).await }
        })
    };
    let register = create_action(move |new_user: &NewUser| {
        let session = session.clone();
        let navigate = navigate.clone();
        let new_user = new_user.clone();
        async move { register(&session, &state, &navigate, &new_user).await }
    });
    AuthHook {
        state,
        login,
        register,
    }
}

/// Logout action of the navigation bar.
///
/// Redirecting to the login page is left to the session observer of the shell.
pub fn use_logout(session: Session) -> Action<(), ()> {
    create_action(move |(): &()| {
        let session = session.clone();
        async move { session.logout(false).await }
    })
}
