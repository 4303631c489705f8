//! The signed-in doctor's appointments with create, edit and delete, plus the
//! per-appointment diagnose, prescription and sick-leave dialogs. The list is
//! re-fetched after every successful save.

use super::modals::{AppointmentModal, DiagnoseModal, PrescriptionModal, SickLeaveModal};
use crate::{
    app_lib::{AppError, CancelToken},
    components::{Button, ButtonVariant},
    features::{
        appointments::{client, types::AppointmentSummary},
        navigation::paths,
        session::state::use_auth,
    },
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, error_alert, loaded},
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

const HEADERS: &[&str] = &[
    "UCN",
    "First Name",
    "Last Name",
    "Health Insured",
    "Doctor",
    "Appointment Date",
    "Actions",
];

const ACTION_CLASS: &str = "text-sm font-medium text-blue-600 hover:text-blue-800 dark:text-blue-400";

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(AppointmentSummary),
    Diagnose(String),
    Prescription(String),
    SickLeave(String),
}

#[component]
pub fn DoctorAppointmentsPage() -> impl IntoView {
    let auth = use_auth();
    let dialog = RwSignal::new(Dialog::Closed);
    let action_error = RwSignal::new(None::<AppError>);
    let cancel = CancelToken::for_current_view();

    let appointments = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        let doctor_id = auth.subject().ok_or(AppError::Unauthenticated)?;
        client::list_doctor_appointments(&api, &doctor_id).await
    });

    let on_close = Callback::new(move |_| dialog.set(Dialog::Closed));
    let on_saved = Callback::new(move |_| {
        dialog.set(Dialog::Closed);
        appointments.refetch();
    });
    let on_delete = Callback::new(move |appointment_id: String| {
        let api = match auth.fetcher() {
            Ok(api) => api,
            Err(err) => {
                action_error.set(Some(err));
                return;
            }
        };
        let cancel = cancel.clone();
        spawn_local(async move {
            match cancel.guard(client::delete_appointment(&api, &appointment_id)).await {
                Some(Ok(())) => {
                    action_error.set(None);
                    appointments.refetch();
                }
                Some(Err(err)) => action_error.set(Some(err)),
                None => {}
            }
        });
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="My Appointments">
                <Button on_click=Callback::new(move |_| dialog.set(Dialog::Create))>
                    "Create Appointment"
                </Button>
            </PageHeader>
            {move || action_error.get().map(|err| error_alert(&err))}
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        appointments.get(),
                        move |list: Vec<AppointmentSummary>| {
                            let rows = if list.is_empty() {
                                empty_row(HEADERS.len(), "No appointments scheduled.")
                            } else {
                                list.into_iter()
                                    .map(|appointment| {
                                        view! {
                                            <AppointmentRow
                                                appointment=appointment
                                                dialog=dialog
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            };
                            view! { <DataTable headers=HEADERS>{rows}</DataTable> }
                        },
                    )
                }}
            </Suspense>
            {move || match dialog.get() {
                Dialog::Closed => None,
                Dialog::Create => Some(
                    view! { <AppointmentModal existing=None on_close=on_close on_saved=on_saved /> }
                        .into_any(),
                ),
                Dialog::Edit(appointment) => Some(
                    view! {
                        <AppointmentModal
                            existing=Some(appointment)
                            on_close=on_close
                            on_saved=on_saved
                        />
                    }
                    .into_any(),
                ),
                Dialog::Diagnose(id) => Some(
                    view! { <DiagnoseModal appointment_id=id on_close=on_close on_saved=on_saved /> }
                        .into_any(),
                ),
                Dialog::Prescription(id) => Some(
                    view! {
                        <PrescriptionModal appointment_id=id on_close=on_close on_saved=on_saved />
                    }
                    .into_any(),
                ),
                Dialog::SickLeave(id) => Some(
                    view! { <SickLeaveModal appointment_id=id on_close=on_close on_saved=on_saved /> }
                        .into_any(),
                ),
            }}
        </div>
    }
}

#[component]
fn AppointmentRow(
    appointment: AppointmentSummary,
    dialog: RwSignal<Dialog>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = appointment.id.clone();
    let open = move |make: fn(String) -> Dialog| {
        let id = id.clone();
        move |_: MouseEvent| dialog.set(make(id.clone()))
    };
    let edit = appointment.clone();
    let delete_id = appointment.id.clone();
    let detail_href = paths::appointment_detail(&appointment.id);

    view! {
        <tr class=ROW_CLASS>
            <td class=TD_CLASS>{appointment.patient.ucn.clone()}</td>
            <td class=TD_CLASS>{appointment.patient.first_name.clone()}</td>
            <td class=TD_CLASS>{appointment.patient.last_name.clone()}</td>
            <td class=TD_CLASS>{appointment.patient.insured_label()}</td>
            <td class=TD_CLASS>{appointment.doctor.full_name()}</td>
            <td class=TD_CLASS>{appointment.display_date()}</td>
            <td class=format!("{TD_CLASS} space-x-3")>
                <A href=detail_href {..} class=ACTION_CLASS>
                    "Details"
                </A>
                <button
                    type="button"
                    class=ACTION_CLASS
                    on:click=move |_| dialog.set(Dialog::Edit(edit.clone()))
                >
                    "Edit"
                </button>
                <button type="button" class=ACTION_CLASS on:click=open(Dialog::Diagnose)>
                    "Diagnose"
                </button>
                <button type="button" class=ACTION_CLASS on:click=open(Dialog::Prescription)>
                    "Prescription"
                </button>
                <button type="button" class=ACTION_CLASS on:click=open(Dialog::SickLeave)>
                    "Sick Leave"
                </button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| on_delete.run(delete_id.clone()))
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}
