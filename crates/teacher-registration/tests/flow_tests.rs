//! End-to-end tests of the registration flow against a mocked ULP backend.

mod common;

use common::{details, test_flow};
use teacher_registration::{
    modal::Dialog, FormField, MessageKey, NavigationState, RegistrationError, Route,
    SubmitOutcome, ToastKind, VerificationState,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_lookup(server: &MockServer, udise: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/sso/udise/school/list/{}", udise)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_missing_details_leaves_form() {
    let server = MockServer::start().await;
    let test = test_flow(&server, NavigationState::new(None, false));

    assert!(matches!(test.flow, Err(RegistrationError::MissingContext)));
    assert_eq!(test.navigator.routes(), vec![Route::Root]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_full_registration() {
    let server = MockServer::start().await;

    mount_lookup(
        &server,
        "16010100101",
        serde_json::json!({
            "success": true,
            "status": "found",
            "data": {
                "udiseCode": "16010100101",
                "schoolName": "Govt. High School",
                "district": "West Tripura"
            }
        }),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/v1/aadhaar/verify"))
        .and(body_partial_json(serde_json::json!({"aadhaar_id": "123412341234"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "result": {"aadhaar_token": "tok-9"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/sso/digilocker/register"))
        .and(body_partial_json(serde_json::json!({
            "digiacc": "portal",
            "digimpid": "MP-42",
            "userdata": {
                "teacher": {
                    "name": "Asha Devi",
                    "aadharId": "tok-9",
                    "schoolUdise": "16010100101",
                    "joiningdate": "2019-07-01",
                    "consent": "yes",
                    "consentDate": "2024-06-01"
                },
                "school": {
                    "schoolName": "Govt. High School",
                    "district": "West Tripura",
                    "stateCode": 16,
                    "did": ""
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/sso/school/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/credential/issue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let test = test_flow(&server, NavigationState::new(Some(details()), true));
    let mut flow = test.flow.unwrap();

    flow.on_view_ready();
    assert!(flow.modals().is_open(Dialog::Link));

    assert_eq!(flow.verify_udise("16010100101").await, VerificationState::Yes);
    assert!(flow.link_udise());

    flow.set_field(FormField::AadharId, "123412341234");
    flow.set_field(FormField::JoiningDate, "2019-07-01");

    assert!(matches!(flow.submit().await, SubmitOutcome::ConsentRequested));
    assert!(matches!(
        flow.submit_declaration(true).await,
        SubmitOutcome::Registered
    ));

    assert_eq!(
        test.navigator.routes(),
        vec![Route::Dashboard {
            is_first_time_login: true
        }]
    );
    assert_eq!(
        test.notifier.toasts(),
        vec![
            (ToastKind::Success, MessageKey::SuccessfullyLinked),
            (ToastKind::Success, MessageKey::UserRegisteredSuccessfully),
        ]
    );
}

#[tokio::test]
async fn test_not_found_lookup_leaves_form_untouched() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "999",
        serde_json::json!({"success": true, "status": "not_found"}),
    )
    .await;

    let test = test_flow(&server, NavigationState::new(Some(details()), true));
    let mut flow = test.flow.unwrap();
    flow.on_view_ready();

    assert_eq!(flow.verify_udise("999").await, VerificationState::No);
    assert!(flow.form().udise_id().is_none());
    assert!(flow.form().school_name().is_none());
    assert!(flow.school_details().is_none());
}

#[tokio::test]
async fn test_lookup_server_error_is_failed_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sso/udise/school/list/1601"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let test = test_flow(&server, NavigationState::new(Some(details()), true));
    let mut flow = test.flow.unwrap();

    assert_eq!(flow.verify_udise("1601").await, VerificationState::Failed);
}

#[tokio::test]
async fn test_rejected_aadhaar_shows_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/aadhaar/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/sso/digilocker/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let test = test_flow(&server, NavigationState::new(Some(details()), true));
    let mut flow = test.flow.unwrap();
    flow.set_field(FormField::SchoolName, "Govt. High School");
    flow.set_field(FormField::UdiseId, "16010100101");
    flow.set_field(FormField::Name, "Asha Devi");
    flow.set_field(FormField::Phone, "9876543210");
    flow.set_field(FormField::AadharId, "123412341234");
    flow.set_field(FormField::JoiningDate, "2019-07-01");

    flow.submit().await;
    let outcome = flow.submit_declaration(true).await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(RegistrationError::AadhaarVerificationFailed)
    ));
    assert!(test.navigator.routes().is_empty());
    assert_eq!(
        test.notifier.toasts(),
        vec![(ToastKind::Error, MessageKey::ErrorWhileRegisterUser)]
    );
}

#[tokio::test]
async fn test_unconsented_submit_sends_nothing() {
    let server = MockServer::start().await;

    let test = test_flow(&server, NavigationState::new(Some(details()), true));
    let mut flow = test.flow.unwrap();
    flow.set_field(FormField::SchoolName, "Govt. High School");
    flow.set_field(FormField::UdiseId, "16010100101");
    flow.set_field(FormField::Name, "Asha Devi");
    flow.set_field(FormField::Phone, "9876543210");
    flow.set_field(FormField::AadharId, "123412341234");
    flow.set_field(FormField::JoiningDate, "2019-07-01");

    assert!(matches!(flow.submit().await, SubmitOutcome::ConsentRequested));
    assert!(flow.modals().is_open(Dialog::Consent));
    assert!(server.received_requests().await.unwrap().is_empty());
}
