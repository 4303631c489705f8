//! Diagnoses and diagnose codes: reference lists, statistics and creation of a
//! diagnose for an appointment.

pub mod client;
pub mod types;
