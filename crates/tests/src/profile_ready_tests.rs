use crate::common::{serve_json, SeenRequest};
use axum::http::StatusCode;
use client::{EmployeeApi, HttpEmployeeApi, ProfileState, ProfileViewModel};
use pretty_assertions::assert_eq;
use shared_types::ProfileView;

const ANNA: &str = r#"{
    "firstName": "Anna",
    "lastName": "Muster",
    "employmentType": "FULL_TIME",
    "employmentStatus": "ACTIVE",
    "startDate": "2023-01-15"
}"#;

#[tokio::test]
async fn scenario_a_renders_mapped_profile() {
    let mock = serve_json(StatusCode::OK, ANNA).await;
    let mut vm = ProfileViewModel::new();

    let state = vm.load_profile(&mock.client()).await;

    let ProfileState::Ready(profile) = state else {
        panic!("expected Ready, got {state:?}");
    };
    assert_eq!(profile.full_name, "Anna Muster");
    assert_eq!(profile.employment_type, "Vollzeit");
    assert_eq!(profile.employment_status, "Aktiv");
    assert_eq!(profile.start_date, "15.01.2023");
    assert_eq!(profile.job_title, "");
}

#[tokio::test]
async fn sends_exactly_one_json_request() {
    let mock = serve_json(StatusCode::OK, ANNA).await;
    let mut vm = ProfileViewModel::new();

    vm.load_profile(&mock.client()).await;

    assert_eq!(
        mock.requests(),
        vec![SeenRequest {
            accept: Some("application/json".into()),
            cookie: None,
        }]
    );
}

#[tokio::test]
async fn configured_session_cookie_is_sent() {
    let mock = serve_json(StatusCode::OK, ANNA).await;
    let config = mock.config().with_session_cookie("JSESSIONID=4711");
    let api = HttpEmployeeApi::new(&config).unwrap();

    api.fetch_self_profile().await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].cookie.as_deref(), Some("JSESSIONID=4711"));
}

#[tokio::test]
async fn full_record_with_encoded_names() {
    let body = r#"{
        "id": 12,
        "firstName": "J%C3%BCrgen",
        "lastName": "M%C3%BCller",
        "email": "j.mueller@lean-x.de",
        "jobTitle": "Senior Consultant",
        "department": "Vertrieb",
        "employmentType": "INTERN",
        "employmentStatus": "ON_LEAVE",
        "startDate": "2019-10-01T00:00:00Z",
        "managerFirstName": "Max",
        "managerLastName": "Mustermann",
        "internalNote": "ignored"
    }"#;
    let mock = serve_json(StatusCode::OK, body).await;
    let mut vm = ProfileViewModel::new();

    let state = vm.load_profile(&mock.client()).await.clone();

    assert_eq!(
        state,
        ProfileState::Ready(ProfileView {
            id: Some(12),
            first_name: "Jürgen".into(),
            last_name: "Müller".into(),
            full_name: "Jürgen Müller".into(),
            initials: "JM".into(),
            email: "j.mueller@lean-x.de".into(),
            manager_name: "Max Mustermann".into(),
            job_title: "Senior Consultant".into(),
            department: "Vertrieb".into(),
            employment_type: "Praktikant".into(),
            employment_status: "Beurlaubt".into(),
            start_date: "01.10.2019".into(),
        })
    );
}

#[tokio::test]
async fn unknown_codes_are_shown_verbatim() {
    let body = r#"{"employmentType": "WORKING_STUDENT", "employmentStatus": "PROBATION"}"#;
    let mock = serve_json(StatusCode::OK, body).await;
    let mut vm = ProfileViewModel::new();

    let profile = vm.load_profile(&mock.client()).await.profile().cloned().unwrap();

    assert_eq!(profile.employment_type, "WORKING_STUDENT");
    assert_eq!(profile.employment_status, "PROBATION");
}
