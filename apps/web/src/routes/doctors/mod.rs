mod all;
mod patient_count;

pub(crate) use all::DoctorsPage;
pub(crate) use patient_count::DoctorsPatientCountPage;
