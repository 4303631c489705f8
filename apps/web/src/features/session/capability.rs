//! Role gate: capability flags derived from realm roles. This is a UX convenience
//! for menus and routes; the backend remains the authorization boundary.

use super::store::Session;
use std::{collections::BTreeSet, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Doctor,
    Patient,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Doctor, Capability::Patient];

    /// Realm role that grants the capability.
    pub fn role_marker(self) -> &'static str {
        match self {
            Capability::Doctor => "mr_doctor",
            Capability::Patient => "mr_patient",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Doctor => "doctor",
            Capability::Patient => "patient",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "doctor" => Ok(Capability::Doctor),
            "patient" => Ok(Capability::Patient),
            other => Err(format!("unknown capability: {other}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("no role");
        }
        for (index, capability) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            formatter.write_str(capability.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All capabilities of `session`; empty unless authenticated.
pub fn capabilities(session: &Session) -> CapabilitySet {
    let Some(claims) = session.claims() else {
        return CapabilitySet::default();
    };

    Capability::ALL
        .into_iter()
        .filter(|capability| claims.has_realm_role(capability.role_marker()))
        .collect()
}

pub fn has_capability(session: &Session, capability: Capability) -> bool {
    session
        .claims()
        .is_some_and(|claims| claims.has_realm_role(capability.role_marker()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::{claims::Claims, claims::RealmAccess, store::SessionPhase};

    fn session_with(phase: SessionPhase, roles: &[&str]) -> Session {
        let claims = Claims {
            sub: "user-1".to_string(),
            preferred_username: None,
            realm_access: RealmAccess {
                roles: roles.iter().map(|role| role.to_string()).collect(),
            },
        };
        Session::new(phase, Some(claims))
    }

    #[test]
    fn unauthenticated_sessions_have_no_capability() {
        for phase in [
            SessionPhase::Uninitialized,
            SessionPhase::Pending,
            SessionPhase::Unauthenticated,
        ] {
            let session = session_with(phase, &["mr_doctor", "mr_patient"]);
            for capability in Capability::ALL {
                assert!(!has_capability(&session, capability));
            }
            assert!(capabilities(&session).is_empty());
        }
    }

    #[test]
    fn doctor_marker_grants_doctor_only() {
        let session = session_with(SessionPhase::Authenticated, &["mr_doctor"]);

        assert!(has_capability(&session, Capability::Doctor));
        assert!(!has_capability(&session, Capability::Patient));
        assert_eq!(
            capabilities(&session).iter().collect::<Vec<_>>(),
            vec![Capability::Doctor]
        );
    }

    #[test]
    fn missing_marker_yields_false() {
        let session = session_with(SessionPhase::Authenticated, &["offline_access"]);
        assert!(!has_capability(&session, Capability::Doctor));
        assert!(capabilities(&session).is_empty());
    }

    #[test]
    fn capability_names_parse_case_insensitively() {
        assert_eq!("doctor".parse::<Capability>(), Ok(Capability::Doctor));
        assert_eq!(" Patient ".parse::<Capability>(), Ok(Capability::Patient));
        assert!("admin".parse::<Capability>().is_err());
        assert_eq!(Capability::Doctor.to_string(), "doctor");
    }

    #[test]
    fn capability_sets_display_their_roles() {
        let both = session_with(SessionPhase::Authenticated, &["mr_patient", "mr_doctor"]);
        assert_eq!(capabilities(&both).to_string(), "doctor, patient");

        let none = session_with(SessionPhase::Unauthenticated, &["mr_doctor"]);
        assert_eq!(capabilities(&none).to_string(), "no role");
    }
}
