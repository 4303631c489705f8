mod alert;
mod button;
mod modal;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use modal::{INPUT_CLASS, LABEL_CLASS, Modal};
pub(crate) use spinner::Spinner;
