//! Patient lists: all patients, a doctor's own patients, and patients carrying a
//! given diagnose code.

pub mod client;
pub mod types;
