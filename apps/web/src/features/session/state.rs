//! Session context for the frontend. The provider builds the session store once,
//! runs the identity-provider handshake on mount and mirrors the token-free
//! [`Session`] snapshot into signals for the navbar, guards and routes. The store
//! and the API fetcher live in local (non-`Send`) storage and are reached only
//! through this context.

use super::{
    Capability, CapabilitySet, Session, SessionPhase, SessionStore,
    capabilities as derive_capabilities, keycloak::KeycloakProvider,
};
use crate::app_lib::{AppConfig, AppError, BrowserTransport, Fetcher};
use leptos::{prelude::*, task::spawn_local};
use std::rc::Rc;

type Store = Rc<SessionStore<KeycloakProvider>>;

/// Fetcher wired to the live session store and the browser transport.
pub type ApiFetcher = Fetcher<Store, BrowserTransport>;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct AuthContext {
    store: StoredValue<Option<Store>, LocalStorage>,
    fetcher: StoredValue<Option<Rc<ApiFetcher>>, LocalStorage>,
    pub session: RwSignal<Session>,
    pub error: RwSignal<Option<AppError>>,
    pub is_authenticated: Signal<bool>,
    pub capabilities: Memo<CapabilitySet>,
}

impl AuthContext {
    fn new(store: Option<Store>, fetcher: Option<Rc<ApiFetcher>>) -> Self {
        let session = RwSignal::new(Session::default());
        let is_authenticated = Signal::derive(move || session.with(Session::is_authenticated));
        let capabilities = Memo::new(move |_| session.with(derive_capabilities));
        Self {
            store: StoredValue::new_local(store),
            fetcher: StoredValue::new_local(fetcher),
            session,
            error: RwSignal::new(None),
            is_authenticated,
            capabilities,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.with(|set| set.contains(capability))
    }

    /// Subject of the signed-in user, untracked.
    pub fn subject(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.subject().map(str::to_string))
    }

    /// Authenticated fetcher, or `Unauthenticated` when the provider never loaded.
    pub fn fetcher(&self) -> Result<Rc<ApiFetcher>, AppError> {
        self.fetcher.get_value().ok_or(AppError::Unauthenticated)
    }

    pub fn account_url(&self) -> Option<String> {
        self.store
            .get_value()
            .and_then(|store| store.account_url())
    }

    pub fn login(&self) {
        let Some(store) = self.store.get_value() else {
            return;
        };
        let auth = *self;
        auth.session.set(Session::new(SessionPhase::Pending, None));
        spawn_local(async move {
            let result = store.login().await;
            auth.apply(&store, result.map(|_| ()));
        });
    }

    pub fn logout(&self) {
        let Some(store) = self.store.get_value() else {
            return;
        };
        // Mirror the signed-out session before the provider redirects; its
        // promise may never settle.
        self.error.set(None);
        self.session.set(store.end_session());
        let auth = *self;
        spawn_local(async move {
            if let Err(err) = store.logout().await {
                auth.error.set(Some(err));
            }
        });
    }

    fn apply(&self, store: &SessionStore<KeycloakProvider>, result: Result<(), AppError>) {
        self.error.set(result.err());
        self.session.set(store.session());
    }
}

/// Provides the session context and starts the handshake once on mount.
#[component]
pub fn AuthProvider(config: AppConfig, children: Children) -> impl IntoView {
    let (store, fetcher, load_error) = match KeycloakProvider::new(&config) {
        Ok(provider) => {
            let store = Rc::new(SessionStore::new(provider));
            let fetcher = Rc::new(Fetcher::new(
                config.api_base_url.clone(),
                store.clone(),
                BrowserTransport::default(),
            ));
            (Some(store), Some(fetcher), None)
        }
        Err(err) => {
            tracing::error!(error = %err, "identity provider could not be created");
            (None, None, Some(err))
        }
    };

    let auth = AuthContext::new(store.clone(), fetcher);
    provide_context(auth);

    match store {
        Some(store) => {
            auth.session.set(Session::new(SessionPhase::Pending, None));
            spawn_local(async move {
                let result = store.initialize().await;
                auth.apply(&store, result.map(|_| ()));
            });
        }
        None => {
            auth.error.set(load_error);
            auth.session
                .set(Session::new(SessionPhase::Unauthenticated, None));
        }
    }

    view! { {children()} }
}

/// Returns the session context. Rendering outside [`AuthProvider`] is a wiring bug.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        tracing::error!("AuthContext missing; rendering as signed out");
        AuthContext::new(None, None)
    })
}
