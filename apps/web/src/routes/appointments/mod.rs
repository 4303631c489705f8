mod by_doctor;
mod detail;
mod modals;
mod patient;

pub(crate) use by_doctor::DoctorAppointmentsPage;
pub(crate) use detail::AppointmentDetailPage;
pub(crate) use patient::PatientAppointmentsPage;
