//! Session store: the single owner of "who is signed in and with which token".
//! It drives the identity-provider handshake once per page load and hands out
//! token-free [`Session`] snapshots to views. The bearer token only leaves the
//! store through [`TokenSource`], i.e. when the fetcher builds a request.
//!
//! Phases: `Uninitialized -> Pending -> Authenticated | Unauthenticated`.
//! `login()` re-enters `Pending`; `logout()` drops the token before handing over
//! to the provider, which redirects away from the app.

use super::claims::Claims;
use crate::app_lib::{AppError, TokenSource};
use secrecy::{ExposeSecret, SecretString};
use std::cell::{Cell, RefCell};
use tracing::{error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Read-only view of the session shared with every view.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    phase: SessionPhase,
    claims: Option<Claims>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionPhase::Uninitialized, None)
    }
}

impl Session {
    pub fn new(phase: SessionPhase, claims: Option<Claims>) -> Self {
        Self { phase, claims }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Claims of an authenticated session; `None` in every other phase.
    pub fn claims(&self) -> Option<&Claims> {
        if self.is_authenticated() {
            self.claims.as_ref()
        } else {
            None
        }
    }

    /// Subject id of the signed-in user (doctor or patient id on the backend).
    pub fn subject(&self) -> Option<&str> {
        self.claims()
            .map(|claims| claims.sub.as_str())
            .filter(|sub| !sub.is_empty())
    }

    pub fn username(&self) -> &str {
        self.claims().map_or("Guest", Claims::display_name)
    }
}

/// Handshake options passed to the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitOptions {
    pub require_login: bool,
    pub check_login_iframe: bool,
    pub pkce_method: Option<&'static str>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            require_login: true,
            check_login_iframe: false,
            pkce_method: Some("S256"),
        }
    }
}

/// External session/token service. Calls may redirect the page and never resolve.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Returns whether the user ended up authenticated.
    async fn init(&self, options: &InitOptions) -> Result<bool, AppError>;
    async fn login(&self) -> Result<(), AppError>;
    async fn logout(&self) -> Result<(), AppError>;
    fn token(&self) -> Option<String>;
    fn account_url(&self) -> Option<String>;
}

pub struct SessionStore<P> {
    provider: P,
    options: InitOptions,
    phase: Cell<SessionPhase>,
    token: RefCell<Option<SecretString>>,
    claims: RefCell<Option<Claims>>,
}

impl<P: IdentityProvider> SessionStore<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, InitOptions::default())
    }

    pub fn with_options(provider: P, options: InitOptions) -> Self {
        Self {
            provider,
            options,
            phase: Cell::new(SessionPhase::Uninitialized),
            token: RefCell::new(None),
            claims: RefCell::new(None),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn session(&self) -> Session {
        Session::new(self.phase.get(), self.claims.borrow().clone())
    }

    /// Runs the handshake once. Later calls return the current session untouched.
    pub async fn initialize(&self) -> Result<Session, AppError> {
        if self.phase.get() != SessionPhase::Uninitialized {
            return Ok(self.session());
        }

        self.phase.set(SessionPhase::Pending);
        match self.provider.init(&self.options).await {
            Ok(true) => self.adopt_provider_token(),
            Ok(false) => {
                info!("identity provider finished without a signed-in user");
                self.reset(SessionPhase::Unauthenticated);
                Ok(self.session())
            }
            Err(err) => Err(self.fail_handshake(err)),
        }
    }

    /// Starts a fresh login from an unauthenticated session.
    pub async fn login(&self) -> Result<Session, AppError> {
        match self.phase.get() {
            SessionPhase::Authenticated | SessionPhase::Pending => return Ok(self.session()),
            SessionPhase::Uninitialized | SessionPhase::Unauthenticated => {}
        }

        self.phase.set(SessionPhase::Pending);
        match self.provider.login().await {
            Ok(()) => self.adopt_provider_token(),
            Err(err) => Err(self.fail_handshake(err)),
        }
    }

    /// Drops token and claims right away and returns the signed-out snapshot.
    pub fn end_session(&self) -> Session {
        self.reset(SessionPhase::Unauthenticated);
        self.session()
    }

    /// Ends the session, then hands over to the provider. The provider usually
    /// redirects away, so the returned future may never resolve.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.end_session();
        info!("signing out");
        self.provider.logout().await
    }

    /// Account-management page of the identity provider.
    pub fn account_url(&self) -> Option<String> {
        if self.phase.get() == SessionPhase::Authenticated {
            self.provider.account_url()
        } else {
            None
        }
    }

    fn adopt_provider_token(&self) -> Result<Session, AppError> {
        let Some(token) = self.provider.token().filter(|token| !token.is_empty()) else {
            return Err(self.fail_handshake(AppError::Handshake(
                "Identity provider returned no token.".to_string(),
            )));
        };

        match Claims::from_token(&token) {
            Ok(claims) => {
                info!(subject = %claims.sub, roles = ?claims.realm_access.roles, "signed in");
                *self.token.borrow_mut() = Some(SecretString::from(token));
                *self.claims.borrow_mut() = Some(claims);
                self.phase.set(SessionPhase::Authenticated);
                Ok(self.session())
            }
            Err(err) => Err(self.fail_handshake(err)),
        }
    }

    fn fail_handshake(&self, err: AppError) -> AppError {
        error!(error = %err, "identity provider handshake failed");
        self.reset(SessionPhase::Unauthenticated);
        match err {
            AppError::Handshake(_) => err,
            other => AppError::Handshake(other.to_string()),
        }
    }

    fn reset(&self, phase: SessionPhase) {
        self.token.borrow_mut().take();
        self.claims.borrow_mut().take();
        self.phase.set(phase);
    }
}

impl<P: IdentityProvider> TokenSource for SessionStore<P> {
    fn current_token(&self) -> Result<SecretString, AppError> {
        if self.phase.get() != SessionPhase::Authenticated {
            warn!("api call attempted without an authenticated session");
            return Err(AppError::Unauthenticated);
        }

        self.token
            .borrow()
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_string()))
            .ok_or(AppError::Unauthenticated)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{IdentityProvider, InitOptions};
    use crate::app_lib::AppError;
    use std::cell::{Cell, RefCell};

    /// Scripted identity provider.
    #[derive(Default)]
    pub struct FakeProvider {
        pub init_result: RefCell<Option<Result<bool, AppError>>>,
        pub token: RefCell<Option<String>>,
        pub init_calls: Cell<u32>,
        pub logout_calls: Cell<u32>,
        pub logout_redirects: Cell<bool>,
        pub seen_options: RefCell<Option<InitOptions>>,
    }

    impl FakeProvider {
        pub fn signed_in(token: String) -> Self {
            let provider = Self::default();
            *provider.init_result.borrow_mut() = Some(Ok(true));
            *provider.token.borrow_mut() = Some(token);
            provider
        }
    }

    impl IdentityProvider for FakeProvider {
        async fn init(&self, options: &InitOptions) -> Result<bool, AppError> {
            self.init_calls.set(self.init_calls.get() + 1);
            *self.seen_options.borrow_mut() = Some(options.clone());
            self.init_result.borrow_mut().take().unwrap_or(Ok(false))
        }

        async fn login(&self) -> Result<(), AppError> {
            Ok(())
        }

        async fn logout(&self) -> Result<(), AppError> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            if self.logout_redirects.get() {
                // The page navigates away; the promise never settles.
                futures::future::pending::<()>().await;
            }
            Ok(())
        }

        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn account_url(&self) -> Option<String> {
            Some("https://sso.example/realms/medical-record/account".to_string())
        }
    }
}
