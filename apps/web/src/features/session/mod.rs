//! Session feature: the identity-provider handshake, the in-memory bearer token and
//! the role gate derived from the token's realm roles. Only the fetcher reads the
//! token; everything else works with token-free [`Session`] snapshots. Token
//! material must never be logged.

pub(crate) mod capability;
pub(crate) mod claims;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod keycloak;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod store;

pub use capability::{Capability, CapabilitySet, capabilities, has_capability};
pub use claims::{Claims, RealmAccess};
#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RouteGate;
pub use store::{IdentityProvider, InitOptions, Session, SessionPhase, SessionStore};
