//! Navigation menu and per-route access rules. Both are driven by the role gate so
//! the navbar and the route guard can never disagree about what a user may see.
//! Hiding a route is UX only; the API enforces authorization.

use crate::features::session::{Capability, CapabilitySet, SessionPhase};

pub mod paths {
    pub const HOME: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const MY_PATIENTS: &str = "/patients/my";
    pub const ALL_PATIENTS: &str = "/patients/all";
    pub const PATIENTS_BY_DIAGNOSE: &str = "/patients/diagnoses";
    pub const PATIENTS_BY_DOCTOR: &str = "/patients/by-doctor";
    pub const DOCTORS: &str = "/doctors/all";
    pub const DOCTORS_PATIENT_COUNT: &str = "/doctors/patient-count";
    pub const MOST_FREQUENT_DIAGNOSES: &str = "/diagnoses/most-frequent";
    pub const DOCTOR_APPOINTMENTS: &str = "/appointments/by-doctor";
    pub const PATIENT_APPOINTMENTS: &str = "/appointments/patient";
    pub const APPOINTMENT_DETAIL_PREFIX: &str = "/appointments/detailed/";

    pub fn appointment_detail(id: &str) -> String {
        format!("{APPOINTMENT_DETAIL_PREFIX}{id}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Requires(Capability),
    AnyOf(&'static [Capability]),
}

impl Access {
    pub fn allows(self, authenticated: bool, capabilities: &CapabilitySet) -> bool {
        match self {
            Access::Public => true,
            Access::Authenticated => authenticated,
            Access::Requires(capability) => authenticated && capabilities.contains(capability),
            Access::AnyOf(required) => {
                authenticated
                    && required
                        .iter()
                        .any(|capability| capabilities.contains(*capability))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub access: Access,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Group {
        title: &'static str,
        access: Access,
        links: &'static [NavLink],
    },
}

impl NavItem {
    fn access(&self) -> Access {
        match self {
            NavItem::Link(link) => link.access,
            NavItem::Group { access, .. } => *access,
        }
    }
}

const DOCTOR: Access = Access::Requires(Capability::Doctor);
const PATIENT: Access = Access::Requires(Capability::Patient);

const PATIENT_LINKS: &[NavLink] = &[
    NavLink {
        label: "My Patients",
        path: paths::MY_PATIENTS,
        access: DOCTOR,
    },
    NavLink {
        label: "All Patients",
        path: paths::ALL_PATIENTS,
        access: DOCTOR,
    },
    NavLink {
        label: "Patients by Diagnose",
        path: paths::PATIENTS_BY_DIAGNOSE,
        access: DOCTOR,
    },
    NavLink {
        label: "Patients by Doctor",
        path: paths::PATIENTS_BY_DOCTOR,
        access: DOCTOR,
    },
    NavLink {
        label: "Most Frequent Diagnoses",
        path: paths::MOST_FREQUENT_DIAGNOSES,
        access: DOCTOR,
    },
];

const DOCTOR_LINKS: &[NavLink] = &[
    NavLink {
        label: "Doctors",
        path: paths::DOCTORS,
        access: DOCTOR,
    },
    NavLink {
        label: "Doctors with Patient Count",
        path: paths::DOCTORS_PATIENT_COUNT,
        access: DOCTOR,
    },
];

pub const MENU: &[NavItem] = &[
    NavItem::Link(NavLink {
        label: "Home",
        path: paths::HOME,
        access: Access::Public,
    }),
    NavItem::Group {
        title: "Patients",
        access: DOCTOR,
        links: PATIENT_LINKS,
    },
    NavItem::Group {
        title: "Doctors",
        access: DOCTOR,
        links: DOCTOR_LINKS,
    },
    NavItem::Link(NavLink {
        label: "My Appointments",
        path: paths::DOCTOR_APPOINTMENTS,
        access: DOCTOR,
    }),
    NavItem::Link(NavLink {
        label: "My Appointments",
        path: paths::PATIENT_APPOINTMENTS,
        access: PATIENT,
    }),
];

/// Menu entries the current identity may see, in display order.
pub fn visible_menu(authenticated: bool, capabilities: &CapabilitySet) -> Vec<NavItem> {
    MENU.iter()
        .copied()
        .filter(|item| item.access().allows(authenticated, capabilities))
        .collect()
}

/// Access rule for a browser path. Unknown paths are public so the 404 page renders.
pub fn route_access(pathname: &str) -> Access {
    let path = match pathname.trim_end_matches('/') {
        "" => paths::HOME,
        trimmed => trimmed,
    };

    if path.starts_with(paths::APPOINTMENT_DETAIL_PREFIX) {
        return Access::AnyOf(&[Capability::Doctor, Capability::Patient]);
    }

    match path {
        paths::HOME | paths::HEALTH => Access::Public,
        paths::PATIENT_APPOINTMENTS => PATIENT,
        paths::MY_PATIENTS
        | paths::ALL_PATIENTS
        | paths::PATIENTS_BY_DIAGNOSE
        | paths::PATIENTS_BY_DOCTOR
        | paths::DOCTORS
        | paths::DOCTORS_PATIENT_COUNT
        | paths::MOST_FREQUENT_DIAGNOSES
        | paths::DOCTOR_APPOINTMENTS => DOCTOR,
        _ => Access::Public,
    }
}

/// What the route gate renders for the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Waiting,
    SignIn,
    Forbidden,
}

pub fn gate(phase: SessionPhase, access: Access, capabilities: &CapabilitySet) -> GateDecision {
    let authenticated = phase == SessionPhase::Authenticated;
    if access.allows(authenticated, capabilities) {
        return GateDecision::Allow;
    }

    match phase {
        SessionPhase::Uninitialized | SessionPhase::Pending => GateDecision::Waiting,
        SessionPhase::Unauthenticated => GateDecision::SignIn,
        SessionPhase::Authenticated => GateDecision::Forbidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(list: &[Capability]) -> CapabilitySet {
        list.iter().copied().collect()
    }

    fn visible_paths(items: &[NavItem]) -> Vec<&'static str> {
        items
            .iter()
            .flat_map(|item| match item {
                NavItem::Link(link) => vec![link.path],
                NavItem::Group { links, .. } => links.iter().map(|link| link.path).collect(),
            })
            .collect()
    }

    fn titles(items: &[NavItem]) -> Vec<&'static str> {
        items
            .iter()
            .map(|item| match item {
                NavItem::Link(link) => link.label,
                NavItem::Group { title, .. } => *title,
            })
            .collect()
    }

    #[test]
    fn doctor_sees_patient_and_doctor_menus() {
        let menu = visible_menu(true, &caps(&[Capability::Doctor]));

        assert_eq!(titles(&menu), vec!["Home", "Patients", "Doctors", "My Appointments"]);
        let visible = visible_paths(&menu);
        assert!(visible.contains(&paths::DOCTOR_APPOINTMENTS));
        assert!(!visible.contains(&paths::PATIENT_APPOINTMENTS));
    }

    #[test]
    fn patient_sees_only_their_appointments() {
        let menu = visible_menu(true, &caps(&[Capability::Patient]));

        assert_eq!(visible_paths(&menu), vec![paths::HOME, paths::PATIENT_APPOINTMENTS]);
    }

    #[test]
    fn unauthenticated_menu_ignores_stale_capabilities() {
        let menu = visible_menu(false, &caps(&[Capability::Doctor, Capability::Patient]));
        assert_eq!(visible_paths(&menu), vec![paths::HOME]);
    }

    #[test]
    fn doctor_only_routes_are_not_reachable_for_patients() {
        let patient = caps(&[Capability::Patient]);
        for path in [
            paths::MY_PATIENTS,
            paths::ALL_PATIENTS,
            paths::DOCTORS,
            paths::DOCTOR_APPOINTMENTS,
            "/patients/all/",
        ] {
            assert!(!route_access(path).allows(true, &patient), "{path}");
        }
        assert!(route_access(paths::PATIENT_APPOINTMENTS).allows(true, &patient));
    }

    #[test]
    fn appointment_detail_is_open_to_both_roles() {
        let path = paths::appointment_detail("a-1");
        assert_eq!(path, "/appointments/detailed/a-1");
        assert!(route_access(&path).allows(true, &caps(&[Capability::Doctor])));
        assert!(route_access(&path).allows(true, &caps(&[Capability::Patient])));
        assert!(!route_access(&path).allows(true, &CapabilitySet::default()));
    }

    #[test]
    fn gate_waits_for_the_handshake_then_decides() {
        let doctor = caps(&[Capability::Doctor]);
        let access = route_access(paths::ALL_PATIENTS);

        assert_eq!(gate(SessionPhase::Pending, access, &doctor), GateDecision::Waiting);
        assert_eq!(gate(SessionPhase::Unauthenticated, access, &doctor), GateDecision::SignIn);
        assert_eq!(gate(SessionPhase::Authenticated, access, &doctor), GateDecision::Allow);
        assert_eq!(
            gate(SessionPhase::Authenticated, access, &caps(&[Capability::Patient])),
            GateDecision::Forbidden
        );
        assert_eq!(
            gate(SessionPhase::Pending, route_access(paths::HOME), &CapabilitySet::default()),
            GateDecision::Allow
        );
    }

    #[test]
    fn home_health_and_unknown_paths_are_public() {
        let none = CapabilitySet::default();
        assert!(route_access("/").allows(false, &none));
        assert!(route_access(paths::HEALTH).allows(false, &none));
        assert!(route_access("/no/such/page").allows(false, &none));
    }
}
