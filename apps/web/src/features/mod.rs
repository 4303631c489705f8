//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused, while the session and API handling stay in
//! dedicated feature areas.

pub mod appointments;
pub mod diagnoses;
pub mod doctors;
pub mod navigation;
pub mod patients;
pub mod prescriptions;
pub mod session;
pub mod sick_leaves;
