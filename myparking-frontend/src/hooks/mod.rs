//! Resource hooks bind one REST resource to `data`, `errors` and `loading` state.
//!
//! The request logic of every hook is written against [`StateCell`]
//! so it runs with reactive signals in the browser and with plain
//! `Rc<RefCell<_>>` cells in tests.

use std::{cell::RefCell, future::Future, rc::Rc};

use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use myparking_boundary::ValidationErrors;
use myparking_frontend_api::{Error, ParkingApi, Result, Session};

mod auth;
mod parking;
mod parkings;
mod password;
mod profile;
mod vehicle;
mod vehicles;
mod zones;

pub use self::{
    auth::*, parking::*, parkings::*, password::*, profile::*, vehicle::*, vehicles::*, zones::*,
};

/// Mutable state owned by a single hook instance.
pub trait StateCell<T>: Clone + 'static {
    fn snapshot(&self) -> T;
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T> StateCell<T> for RwSignal<T>
where
    T: Clone + 'static,
{
    fn snapshot(&self) -> T {
        self.get_untracked()
    }
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>>
where
    T: Clone + 'static,
{
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookState<T> {
    pub data: T,
    pub errors: ValidationErrors,
    pub loading: bool,
    /// Confirmation of a successful update.
    pub status: Option<String>,
    /// Message of a failure that is neither a validation nor an authorization error.
    pub failure: Option<String>,
}

impl<T> HookState<T> {
    fn begin_submit(&mut self) {
        self.loading = true;
        self.errors.clear();
        self.status = None;
        self.failure = None;
    }

    fn fail(&mut self, err: Error) {
        match err {
            Error::Validation(errors) => {
                self.errors = errors;
            }
            Error::Unauthorized => {
                // The session has already been terminated.
            }
            err => {
                log::warn!("Request failed: {err}");
                self.failure = Some(err.to_string());
            }
        }
    }
}

pub type Navigate = Rc<dyn Fn(&str)>;

/// Cancels the associated request when dropped.
#[must_use]
pub struct Fetch(AbortHandle);

impl Drop for Fetch {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Holds the current fetch of a keyed resource.
///
/// Replacing the fetch cancels the previous one.
#[derive(Clone, Default)]
pub struct FetchSlot(Rc<RefCell<Option<Fetch>>>);

impl FetchSlot {
    pub fn replace(&self, fetch: Fetch) {
        let previous = self.0.replace(Some(fetch));
        drop(previous);
    }
    pub fn clear(&self) {
        drop(self.0.take());
    }
}

/// Prepares a fetch that stores its result in `state`.
///
/// The returned task must be spawned. Once the [`Fetch`] guard
/// is dropped the response is discarded without touching `state`.
pub fn load<T, C, F>(state: &C, request: F) -> (Fetch, impl Future<Output = ()>)
where
    T: 'static,
    C: StateCell<HookState<T>>,
    F: Future<Output = Result<T>> + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    state.modify(|s| {
        s.loading = true;
        s.failure = None;
    });
    let state = state.clone();
    let task = async move {
        match Abortable::new(request, registration).await {
            Ok(result) => state.modify(|s| {
                s.loading = false;
                match result {
                    Ok(data) => s.data = data,
                    Err(err) => s.fail(err),
                }
            }),
            Err(Aborted) => {
                log::debug!("Fetch has been cancelled");
            }
        }
    };
    (Fetch(handle), task)
}

/// Runs a mutating request and records its failure in `state`.
pub async fn submit<T, C, R, F>(state: &C, request: F) -> Option<R>
where
    C: StateCell<HookState<T>>,
    F: Future<Output = Result<R>>,
{
    state.modify(HookState::begin_submit);
    let result = request.await;
    let mut output = None;
    state.modify(|s| {
        s.loading = false;
        match result {
            Ok(res) => output = Some(res),
            Err(err) => s.fail(err),
        }
    });
    output
}

// -- reactive glue -- //

#[must_use]
pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[must_use]
pub fn use_api() -> ParkingApi {
    use_session().api()
}

#[must_use]
pub fn use_navigator() -> Navigate {
    let navigate = use_navigate();
    Rc::new(move |path: &str| navigate(path, NavigateOptions::default()))
}

/// Read-only projections of a hook state for view components.
pub trait StateSignals {
    fn errors(self) -> Signal<ValidationErrors>;
    fn loading(self) -> Signal<bool>;
    fn status(self) -> Signal<Option<String>>;
    fn failure(self) -> Signal<Option<String>>;
}

impl<T> StateSignals for RwSignal<HookState<T>>
where
    T: Clone + 'static,
{
    fn errors(self) -> Signal<ValidationErrors> {
        Signal::derive(move || self.with(|s| s.errors.clone()))
    }
    fn loading(self) -> Signal<bool> {
        Signal::derive(move || self.with(|s| s.loading))
    }
    fn status(self) -> Signal<Option<String>> {
        Signal::derive(move || self.with(|s| s.status.clone()))
    }
    fn failure(self) -> Signal<Option<String>> {
        Signal::derive(move || self.with(|s| s.failure.clone()))
    }
}

/// Fetches once when the calling component is created
/// and cancels the request when it is disposed.
pub fn fetch_on_mount<T, F>(state: RwSignal<HookState<T>>, request: F)
where
    T: Clone + 'static,
    F: Future<Output = Result<T>> + 'static,
{
    let (fetch, task) = load(&state, request);
    spawn_local(task);
    on_cleanup(move || drop(fetch));
}

/// Fetches again whenever `key` changes; a newer fetch supersedes the previous one.
///
/// Every key change discards the data of the previous key. Without a
/// key nothing is fetched and the data stays empty.
pub fn fetch_on_change<T, K, Fut>(
    state: RwSignal<HookState<T>>,
    key: impl Fn() -> Option<K> + 'static,
    request: impl Fn(K) -> Fut + 'static,
) where
    T: Clone + Default + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let slot = FetchSlot::default();
    let current = slot.clone();
    create_effect(move |_| {
        let key = key();
        current.clear();
        state.update(|s| {
            s.data = T::default();
            s.loading = false;
        });
        if let Some(key) = key {
            let (fetch, task) = load(&state, request(key));
            current.replace(fetch);
            spawn_local(task);
        }
    });
    on_cleanup(move || slot.clear());
}
