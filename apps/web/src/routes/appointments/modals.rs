//! Dialogs opened from the doctor's appointment table. Each dialog loads its
//! reference list when it mounts, validates before sending and closes only
//! once every call of its save has succeeded.

use crate::{
    app_lib::AppError,
    components::{Button, ButtonVariant, INPUT_CLASS, LABEL_CLASS, Modal, Spinner},
    features::{
        appointments::{
            client as appointments,
            types::{AppointmentRequest, AppointmentSummary, input_date},
        },
        diagnoses::{client as diagnoses, types::CreateDiagnoseRequest},
        patients::{client as patients, types::filter_patients},
        prescriptions::{
            client as prescriptions,
            types::{PrescriptionForm, toggle_selection},
        },
        session::state::use_auth,
        sick_leaves::{client as sick_leaves, types::CreateSickLeaveRequest},
    },
    routes::common::error_alert,
};
use leptos::prelude::*;

/// Runs `on_saved` after a successful save and surfaces failures in `error`.
fn watch_save(
    value: RwSignal<Option<Result<(), AppError>>>,
    error: RwSignal<Option<AppError>>,
    on_saved: Callback<()>,
) {
    Effect::new(move |_| match value.get() {
        Some(Ok(())) => {
            error.set(None);
            on_saved.run(());
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
}

#[component]
fn FormError(error: RwSignal<Option<AppError>>) -> impl IntoView {
    move || error.get().map(|err| error_alert(&err))
}

#[component]
fn FormActions(
    #[prop(into)] pending: Signal<bool>,
    on_cancel: Callback<()>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="pt-4 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
            <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| on_cancel.run(()))>
                "Cancel"
            </Button>
            <Button button_type="submit" disabled=pending>
                {move || if pending.get() { "Saving..." } else { label }}
            </Button>
        </div>
    }
}

/// Create or edit an appointment of the signed-in doctor.
#[component]
pub fn AppointmentModal(
    existing: Option<AppointmentSummary>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let error = RwSignal::new(None::<AppError>);
    let search = RwSignal::new(String::new());
    let appointment_id = existing.as_ref().map(|appointment| appointment.id.clone());
    let title = if existing.is_some() { "Edit Appointment" } else { "Create Appointment" };
    let patient_id = RwSignal::new(
        existing
            .as_ref()
            .map(|appointment| appointment.patient.id.clone())
            .unwrap_or_default(),
    );
    let date = RwSignal::new(
        existing
            .as_ref()
            .map(|appointment| input_date(&appointment.appointment_date))
            .unwrap_or_default(),
    );

    let patient_list = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        patients::list_patients(&api).await
    });

    let save = Action::new_local(move |input: &(Option<String>, AppointmentRequest)| {
        let (appointment_id, request) = input.clone();
        async move {
            let api = auth.fetcher()?;
            match appointment_id {
                Some(id) => appointments::update_appointment(&api, &id, &request).await,
                None => appointments::create_appointment(&api, &request).await,
            }
        }
    });
    watch_save(save.value(), error, on_saved);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let doctor_id = auth.subject().unwrap_or_default();
        match AppointmentRequest::from_form(
            &patient_id.get_untracked(),
            &doctor_id,
            &date.get_untracked(),
        ) {
            Ok(request) => {
                save.dispatch((appointment_id.clone(), request));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class=LABEL_CLASS for="patient-search">"Patient"</label>
                    <input
                        id="patient-search"
                        type="search"
                        class=INPUT_CLASS
                        placeholder="Search by UCN or name"
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=move || search.get()
                    />
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match patient_list.get() {
                        None => None,
                        Some(Err(err)) => Some(error_alert(&err)),
                        Some(Ok(list)) => Some(
                            view! {
                                <select
                                    class=INPUT_CLASS
                                    on:change=move |ev| patient_id.set(event_target_value(&ev))
                                    prop:value=move || patient_id.get()
                                >
                                    <option value="">"Select a patient"</option>
                                    {move || {
                                        search
                                            .with(|query| filter_patients(&list, query))
                                            .into_iter()
                                            .map(|patient| {
                                                let label = patient.picker_label();
                                                view! { <option value=patient.id>{label}</option> }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            }
                            .into_any(),
                        ),
                    }}
                </Suspense>
                <div>
                    <label class=LABEL_CLASS for="appointment-date">"Appointment Date"</label>
                    <input
                        id="appointment-date"
                        type="datetime-local"
                        class=INPUT_CLASS
                        on:input=move |ev| date.set(event_target_value(&ev))
                        prop:value=move || date.get()
                    />
                </div>
                <FormError error=error />
                <FormActions pending=save.pending() on_cancel=on_close label="Save" />
            </form>
        </Modal>
    }
}

#[component]
pub fn DiagnoseModal(
    appointment_id: String,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let error = RwSignal::new(None::<AppError>);
    let code_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let codes = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        diagnoses::list_diagnose_codes(&api).await
    });

    let save = Action::new_local(move |request: &CreateDiagnoseRequest| {
        let request = request.clone();
        async move {
            let api = auth.fetcher()?;
            diagnoses::create_diagnose(&api, &request).await
        }
    });
    watch_save(save.value(), error, on_saved);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match CreateDiagnoseRequest::from_form(
            &appointment_id,
            &code_id.get_untracked(),
            &description.get_untracked(),
        ) {
            Ok(request) => {
                save.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <Modal title="Create Diagnose".to_string() on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class=LABEL_CLASS for="diagnose-code">"Diagnose Code"</label>
                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match codes.get() {
                            None => None,
                            Some(Err(err)) => Some(error_alert(&err)),
                            Some(Ok(list)) => Some(
                                view! {
                                    <select
                                        id="diagnose-code"
                                        class=INPUT_CLASS
                                        on:change=move |ev| code_id.set(event_target_value(&ev))
                                        prop:value=move || code_id.get()
                                    >
                                        <option value="">"Select a code"</option>
                                        {list
                                            .into_iter()
                                            .map(|code| view! { <option value=code.id>{code.code}</option> })
                                            .collect_view()}
                                    </select>
                                }
                                .into_any(),
                            ),
                        }}
                    </Suspense>
                </div>
                <div>
                    <label class=LABEL_CLASS for="diagnose-description">"Description"</label>
                    <textarea
                        id="diagnose-description"
                        rows="3"
                        class=INPUT_CLASS
                        on:input=move |ev| description.set(event_target_value(&ev))
                        prop:value=move || description.get()
                    ></textarea>
                </div>
                <FormError error=error />
                <FormActions pending=save.pending() on_cancel=on_close label="Save Diagnose" />
            </form>
        </Modal>
    }
}

#[component]
pub fn PrescriptionModal(
    appointment_id: String,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let error = RwSignal::new(None::<AppError>);
    let description = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<String>::new());

    let medicines = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        prescriptions::list_medicines(&api).await
    });

    let save = Action::new_local(move |form: &PrescriptionForm| {
        let form = form.clone();
        async move {
            let api = auth.fetcher()?;
            let id = prescriptions::create_prescription_with_medicines(&api, &form).await?;
            tracing::info!(prescription = %id, "prescription created");
            Ok(())
        }
    });
    watch_save(save.value(), error, on_saved);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = selected.with_untracked(|ids| {
            PrescriptionForm::new(&appointment_id, &description.get_untracked(), ids)
        });
        match form {
            Ok(form) => {
                save.dispatch(form);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <Modal title="Create Prescription".to_string() on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class=LABEL_CLASS for="prescription-description">"Description"</label>
                    <textarea
                        id="prescription-description"
                        rows="3"
                        class=INPUT_CLASS
                        on:input=move |ev| description.set(event_target_value(&ev))
                        prop:value=move || description.get()
                    ></textarea>
                </div>
                <fieldset>
                    <legend class=LABEL_CLASS>"Medicines"</legend>
                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match medicines.get() {
                            None => None,
                            Some(Err(err)) => Some(error_alert(&err)),
                            Some(Ok(list)) => Some(
                                list.into_iter()
                                    .map(|medicine| {
                                        let id = medicine.id.clone();
                                        let checked_id = medicine.id.clone();
                                        view! {
                                            <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selected.with(|ids| ids.contains(&checked_id))
                                                    }
                                                    on:change=move |_| {
                                                        selected.update(|ids| toggle_selection(ids, &id))
                                                    }
                                                />
                                                {medicine.name}
                                            </label>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                            ),
                        }}
                    </Suspense>
                </fieldset>
                <FormError error=error />
                <FormActions
                    pending=save.pending()
                    on_cancel=on_close
                    label="Save Prescription"
                />
            </form>
        </Modal>
    }
}

#[component]
pub fn SickLeaveModal(
    appointment_id: String,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let error = RwSignal::new(None::<AppError>);
    let reason = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let save = Action::new_local(move |request: &CreateSickLeaveRequest| {
        let request = request.clone();
        async move {
            let api = auth.fetcher()?;
            sick_leaves::create_sick_leave(&api, &request).await
        }
    });
    watch_save(save.value(), error, on_saved);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match CreateSickLeaveRequest::from_form(
            &appointment_id,
            &reason.get_untracked(),
            &start_date.get_untracked(),
            &end_date.get_untracked(),
        ) {
            Ok(request) => {
                save.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <Modal title="Create Sick Leave".to_string() on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class=LABEL_CLASS for="sick-leave-reason">"Reason"</label>
                    <input
                        id="sick-leave-reason"
                        type="text"
                        class=INPUT_CLASS
                        on:input=move |ev| reason.set(event_target_value(&ev))
                        prop:value=move || reason.get()
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class=LABEL_CLASS for="sick-leave-start">"Start Date"</label>
                        <input
                            id="sick-leave-start"
                            type="date"
                            class=INPUT_CLASS
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                            prop:value=move || start_date.get()
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS for="sick-leave-end">"End Date"</label>
                        <input
                            id="sick-leave-end"
                            type="date"
                            class=INPUT_CLASS
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                            prop:value=move || end_date.get()
                        />
                    </div>
                </div>
                <FormError error=error />
                <FormActions pending=save.pending() on_cancel=on_close label="Save Sick Leave" />
            </form>
        </Modal>
    }
}
