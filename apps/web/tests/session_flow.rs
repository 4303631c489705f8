//! End-to-end flows through the session store, the role gate and the
//! authenticated fetcher, driven with in-memory fakes for the identity provider
//! and the HTTP transport.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use futures::{FutureExt, channel::oneshot, executor::block_on, join, pending};
use medrec_web::{
    app_lib::{AppError, AuthenticatedRequest, Fetcher, Transport, TransportResponse},
    features::{
        appointments::client as appointments,
        diagnoses::{client as diagnoses, types::DiagnoseCode},
        navigation::{GateDecision, NavItem, gate, paths, route_access, visible_menu},
        patients::{client as patients, types::PatientSummary},
        session::{
            Capability, IdentityProvider, InitOptions, SessionPhase, SessionStore, capabilities,
            has_capability,
        },
    },
};
use serde_json::json;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

const BASE: &str = "http://localhost:8080/api.medical-record";

fn token_for(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}

struct FakeProvider {
    token: RefCell<Option<String>>,
    logouts: Cell<u32>,
    redirect_on_logout: Cell<bool>,
}

impl FakeProvider {
    fn with_token(token: String) -> Self {
        Self {
            token: RefCell::new(Some(token)),
            logouts: Cell::new(0),
            redirect_on_logout: Cell::new(false),
        }
    }
}

impl IdentityProvider for FakeProvider {
    async fn init(&self, _options: &InitOptions) -> Result<bool, AppError> {
        Ok(self.token.borrow().is_some())
    }

    async fn login(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.logouts.set(self.logouts.get() + 1);
        self.token.borrow_mut().take();
        if self.redirect_on_logout.get() {
            // The browser leaves the page; this promise is never settled.
            futures::future::pending::<()>().await;
        }
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn account_url(&self) -> Option<String> {
        Some("http://localhost:8180/realms/medical-record/account".to_string())
    }
}

/// Answers every request with a fixed response and records what was sent.
struct CannedTransport {
    status: u16,
    body: String,
    sent: RefCell<Vec<AuthenticatedRequest>>,
}

impl CannedTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for CannedTransport {
    async fn send(&self, request: &AuthenticatedRequest) -> Result<TransportResponse, AppError> {
        self.sent.borrow_mut().push(request.clone());
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Holds each request until the test releases the response for its URL.
#[derive(Default)]
struct GatedTransport {
    pending: RefCell<HashMap<String, oneshot::Receiver<TransportResponse>>>,
}

impl GatedTransport {
    fn gate(&self, path: &str) -> oneshot::Sender<TransportResponse> {
        let (sender, receiver) = oneshot::channel();
        self.pending
            .borrow_mut()
            .insert(format!("{BASE}{path}"), receiver);
        sender
    }
}

impl Transport for GatedTransport {
    async fn send(&self, request: &AuthenticatedRequest) -> Result<TransportResponse, AppError> {
        let receiver = self
            .pending
            .borrow_mut()
            .remove(&request.url)
            .ok_or_else(|| AppError::Network(format!("unexpected request to {}", request.url)))?;
        receiver
            .await
            .map_err(|_| AppError::Network("response dropped".to_string()))
    }
}

fn signed_in_store(claims: serde_json::Value) -> Rc<SessionStore<FakeProvider>> {
    let store = Rc::new(SessionStore::new(FakeProvider::with_token(token_for(claims))));
    block_on(store.initialize()).expect("handshake");
    store
}

fn menu_paths(items: &[NavItem]) -> Vec<&'static str> {
    items
        .iter()
        .flat_map(|item| match item {
            NavItem::Link(link) => vec![link.path],
            NavItem::Group { links, .. } => links.iter().map(|link| link.path).collect(),
        })
        .collect()
}

#[test]
fn doctor_session_opens_patient_and_doctor_menus() {
    let store = signed_in_store(json!({
        "sub": "doc-1",
        "realm_access": { "roles": ["mr_doctor"] }
    }));
    let session = store.session();

    assert_eq!(session.phase(), SessionPhase::Authenticated);
    assert_eq!(session.subject(), Some("doc-1"));
    assert!(has_capability(&session, Capability::Doctor));

    let menu = visible_menu(true, &capabilities(&session));
    let titles: Vec<_> = menu
        .iter()
        .filter_map(|item| match item {
            NavItem::Group { title, .. } => Some(*title),
            NavItem::Link(_) => None,
        })
        .collect();
    assert_eq!(titles, vec!["Patients", "Doctors"]);
    assert!(menu_paths(&menu).contains(&paths::DOCTOR_APPOINTMENTS));
    assert!(!menu_paths(&menu).contains(&paths::PATIENT_APPOINTMENTS));
}

#[test]
fn patient_session_only_sees_its_appointments() {
    let store = signed_in_store(json!({
        "sub": "pat-7",
        "realm_access": { "roles": ["mr_patient"] }
    }));
    let session = store.session();
    let caps = capabilities(&session);

    assert_eq!(
        menu_paths(&visible_menu(true, &caps)),
        vec![paths::HOME, paths::PATIENT_APPOINTMENTS]
    );
    for doctor_only in [paths::ALL_PATIENTS, paths::DOCTORS, paths::DOCTOR_APPOINTMENTS] {
        assert_eq!(
            gate(session.phase(), route_access(doctor_only), &caps),
            GateDecision::Forbidden
        );
    }
}

#[test]
fn rejected_appointment_list_surfaces_an_error_without_data() {
    let store = signed_in_store(json!({
        "sub": "pat-7",
        "realm_access": { "roles": ["mr_patient"] }
    }));
    let api = Fetcher::new(BASE, store.clone(), CannedTransport::new(401, "Unauthorized"));

    let result = block_on(appointments::list_patient_appointments(&api, "pat-7"));

    let err = result.expect_err("401 must not produce appointments");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Request failed (401): Unauthorized");
}

#[test]
fn concurrent_lists_land_in_their_own_state_in_any_order() {
    let store = signed_in_store(json!({
        "sub": "doc-1",
        "realm_access": { "roles": ["mr_doctor"] }
    }));
    let transport = Rc::new(GatedTransport::default());
    let patients_gate = transport.gate("/v1/patients/simple");
    let codes_gate = transport.gate("/v1/diagnose-codes/simple");
    let api = Fetcher::new(BASE, store, transport.clone());

    let patient_view: RefCell<Option<Vec<PatientSummary>>> = RefCell::new(None);
    let codes_view: RefCell<Option<Vec<DiagnoseCode>>> = RefCell::new(None);
    let arrivals = RefCell::new(Vec::new());

    let load_patients = async {
        let list = patients::list_patients(&api).await.expect("patients");
        *patient_view.borrow_mut() = Some(list);
        arrivals.borrow_mut().push("patients");
    };
    let load_codes = async {
        let list = diagnoses::list_diagnose_codes(&api).await.expect("codes");
        *codes_view.borrow_mut() = Some(list);
        arrivals.borrow_mut().push("codes");
    };
    let respond_in_reverse = async move {
        codes_gate
            .send(TransportResponse {
                status: 200,
                body: r#"[{"id":"c-1","code":"J10"}]"#.to_string(),
            })
            .expect("codes receiver alive");
        pending!();
        patients_gate
            .send(TransportResponse {
                status: 200,
                body: r#"[{"id":"p-1","ucn":"8001011234","firstName":"Ana","lastName":"P"}]"#
                    .to_string(),
            })
            .expect("patients receiver alive");
    };

    block_on(async { join!(load_patients, load_codes, respond_in_reverse) });

    assert_eq!(*arrivals.borrow(), vec!["codes", "patients"]);
    let patients = patient_view.borrow();
    let patients = patients.as_ref().expect("patients rendered");
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].first_name, "Ana");
    let codes = codes_view.borrow();
    assert_eq!(codes.as_ref().expect("codes rendered")[0].code, "J10");
}

#[test]
fn logout_stops_every_later_request() {
    let store = signed_in_store(json!({
        "sub": "doc-1",
        "realm_access": { "roles": ["mr_doctor"] }
    }));
    let transport = Rc::new(CannedTransport::new(200, "[]"));
    let api = Fetcher::new(BASE, store.clone(), transport.clone());

    block_on(patients::list_patients(&api)).expect("signed-in call");
    assert!(transport.sent.borrow()[0].authorization.starts_with("Bearer "));

    block_on(store.logout()).expect("logout");
    let session = store.session();
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    assert!(capabilities(&session).is_empty());
    assert_eq!(
        menu_paths(&visible_menu(session.is_authenticated(), &capabilities(&session))),
        vec![paths::HOME]
    );
    assert_eq!(
        gate(session.phase(), route_access(paths::ALL_PATIENTS), &capabilities(&session)),
        GateDecision::SignIn
    );

    let after = block_on(patients::list_patients(&api));

    assert_eq!(after, Err(AppError::Unauthenticated));
    assert_eq!(transport.sent.borrow().len(), 1);
    assert!(store.account_url().is_none());
}

#[test]
fn signed_out_before_the_logout_redirect_settles() {
    let provider = FakeProvider::with_token(token_for(json!({
        "sub": "doc-1",
        "realm_access": { "roles": ["mr_doctor"] }
    })));
    provider.redirect_on_logout.set(true);
    let store = Rc::new(SessionStore::new(provider));
    block_on(store.initialize()).expect("handshake");
    let transport = Rc::new(CannedTransport::new(200, "[]"));
    let api = Fetcher::new(BASE, store.clone(), transport.clone());

    let mut logout = Box::pin(store.logout());
    assert!((&mut logout).now_or_never().is_none());

    let session = store.session();
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    assert_eq!(
        gate(session.phase(), route_access(paths::DOCTOR_APPOINTMENTS), &capabilities(&session)),
        GateDecision::SignIn
    );
    assert_eq!(
        block_on(appointments::list_doctor_appointments(&api, "doc-1")),
        Err(AppError::Unauthenticated)
    );
    assert!(transport.sent.borrow().is_empty());
}
