use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use shared::auth::{self, Credentials};
use shared::errors::AuthError;
use shared::models::Session;
use shared::persistence::{self, SessionStorage};
use yew::{hook, use_effect_with};
use yewdux::prelude::use_selector;
use yewdux::{Context, Dispatch, Store};

/// `localStorage`-backed session storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log::warn!("unable to persist session: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Global session store. Restored from local storage when first read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthStore {
    pub session: Session,
}

impl Store for AuthStore {
    fn new(_cx: &Context) -> Self {
        let session = persistence::restore_session(&BrowserStorage);
        if session.is_authenticated() {
            log::debug!("restored persisted session");
        }
        Self { session }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AuthStore {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// Check credentials after the artificial delay and sign in on success.
///
/// On failure the store is left untouched.
pub async fn login(
    dispatch: Dispatch<AuthStore>,
    credentials: Credentials,
    delay_ms: u32,
) -> Result<(), AuthError> {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
    match auth::authenticate(&credentials) {
        Ok(session) => {
            log::info!("signed in as {}", credentials.email);
            dispatch.set(AuthStore { session });
            Ok(())
        }
        Err(err) => {
            log::info!("login rejected: {err}");
            Err(err)
        }
    }
}

pub fn logout(dispatch: &Dispatch<AuthStore>) {
    log::info!("signed out");
    dispatch.set(AuthStore::default());
}

/// Mirror every session change into local storage.
#[hook]
pub fn use_session_persistence() {
    let session = use_selector(|state: &AuthStore| state.session.clone());
    use_effect_with(session, |session| {
        persistence::persist_session(&BrowserStorage, session);
        || ()
    });
}
