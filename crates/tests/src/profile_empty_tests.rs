use crate::common::serve_json;
use axum::http::StatusCode;
use client::{ProfileState, ProfileViewModel};
use pretty_assertions::assert_eq;
use shared_types::ProfileView;

#[tokio::test]
async fn scenario_c_empty_object_is_ready_with_empty_fields() {
    let mock = serve_json(StatusCode::OK, "{}").await;
    let mut vm = ProfileViewModel::new();

    let state = vm.load_profile(&mock.client()).await.clone();

    assert_eq!(state, ProfileState::Ready(ProfileView::default()));
}

#[tokio::test]
async fn null_fields_are_tolerated() {
    let body = r#"{
        "id": 3,
        "firstName": "Anna",
        "lastName": null,
        "jobTitle": null,
        "department": null,
        "managerFirstName": null,
        "managerLastName": null,
        "startDate": null
    }"#;
    let mock = serve_json(StatusCode::OK, body).await;
    let mut vm = ProfileViewModel::new();

    let profile = vm.load_profile(&mock.client()).await.profile().cloned().unwrap();

    assert_eq!(profile.id, Some(3));
    assert_eq!(profile.full_name, "Anna");
    assert_eq!(profile.job_title, "");
    assert_eq!(profile.department, "");
    assert_eq!(profile.manager_name, "");
    assert_eq!(profile.start_date, "");
}

#[tokio::test]
async fn unparseable_start_date_is_shown_raw() {
    let mock = serve_json(StatusCode::OK, r#"{"startDate": "Q3/2023"}"#).await;
    let mut vm = ProfileViewModel::new();

    let profile = vm.load_profile(&mock.client()).await.profile().cloned().unwrap();

    assert_eq!(profile.start_date, "Q3/2023");
}
