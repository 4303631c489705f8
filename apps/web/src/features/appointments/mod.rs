//! Appointments of the signed-in doctor or patient, plus the doctor's create,
//! edit and delete operations and the detailed appointment view.

pub mod client;
pub mod types;
