use std::{cell::RefCell, rc::Rc};

use gloo_storage::{LocalStorage, Storage};
use myparking_boundary::{AccessToken, Credentials, NewUser};

use crate::{into_json, FetchTransport, ParkingApi, Request, Result, Transport};

pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Persistence of the access token across page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn delete(&self);
}

/// Keeps the token in the browser's `localStorage`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserTokenStore {
    key: &'static str,
}

impl BrowserTokenStore {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get(self.key).ok()
    }
    fn save(&self, token: &str) {
        if let Err(err) = LocalStorage::set(self.key, token) {
            log::warn!("Unable to persist access token: {err}");
        }
    }
    fn delete(&self) {
        LocalStorage::delete(self.key);
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore(RefCell<Option<String>>);

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self(RefCell::new(Some(token.to_owned())))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }
    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }
    fn delete(&self) {
        *self.0.borrow_mut() = None;
    }
}

type Observer = Rc<dyn Fn(bool)>;

struct Inner {
    transport: Rc<dyn Transport>,
    store: Rc<dyn TokenStore>,
    token: RefCell<Option<String>>,
    observers: RefCell<Vec<Observer>>,
}

/// The authenticated session of the current user.
///
/// The session owns the only process wide state of the application:
/// the access token. It is created once and shared by cloning.
#[derive(Clone)]
pub struct Session {
    inner: Rc<Inner>,
}

impl Session {
    pub fn new(transport: Rc<dyn Transport>, store: Rc<dyn TokenStore>) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        let inner = Inner {
            transport,
            store,
            token: RefCell::new(token),
            observers: RefCell::default(),
        };
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Session talking to the API at `url` and keeping its token in `localStorage`.
    #[must_use]
    pub fn browser(url: &str) -> Self {
        Self::new(
            Rc::new(FetchTransport::new(url)),
            Rc::new(BrowserTokenStore::default()),
        )
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner
            .token
            .borrow()
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.token.borrow().clone()
    }

    /// HTTP client that authenticates its requests with this session.
    #[must_use]
    pub fn api(&self) -> ParkingApi {
        ParkingApi::new(self.clone())
    }

    /// Registers a callback that is invoked on every login state transition.
    pub fn on_change<F>(&self, observer: F)
    where
        F: Fn(bool) + 'static,
    {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        log::info!("Logging in with {email}", email = credentials.email);
        let request = Request::post("auth/login").json(credentials)?;
        let response = self.transport().send(request).await?;
        let AccessToken { access_token } = into_json(response)?;
        self.start(access_token);
        Ok(())
    }

    pub async fn register(&self, new_user: &NewUser) -> Result<()> {
        log::info!("Register new account for {email}", email = new_user.email);
        let request = Request::post("auth/register").json(new_user)?;
        let response = self.transport().send(request).await?;
        let AccessToken { access_token } = into_json(response)?;
        self.start(access_token);
        Ok(())
    }

    /// Ends the session.
    ///
    /// Unless `force` is set the token is invalidated on the server first.
    /// The local state is cleared in any case.
    pub async fn logout(&self, force: bool) {
        if !force {
            if let Some(token) = self.token() {
                let request = Request::post("auth/logout").bearer(token);
                let result = self
                    .transport()
                    .send(request)
                    .await
                    .and_then(into_json::<serde::de::IgnoredAny>);
                if let Err(err) = result {
                    log::warn!("Unable to invalidate session: {err}");
                }
            }
        }
        self.end();
        log::info!("Logged out");
    }

    fn start(&self, token: String) {
        self.inner.store.save(&token);
        *self.inner.token.borrow_mut() = Some(token);
        self.notify(true);
    }

    fn end(&self) {
        self.inner.store.delete();
        *self.inner.token.borrow_mut() = None;
        self.notify(false);
    }

    fn notify(&self, logged_in: bool) {
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(logged_in);
        }
    }
}
