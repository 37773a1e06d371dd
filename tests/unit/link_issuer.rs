use doctor_invite::db::models::api::SendLinkRequest;
use doctor_invite::error::AppError;
use doctor_invite::services::LinkIssuerService;

use crate::support::{FakeStore, is_referral_code};

#[tokio::test]
async fn issues_link_and_persists_record() {
    let store = FakeStore::new();
    let issuer = LinkIssuerService::new(store.clone(), 12);

    let issued = issuer
        .issue(&SendLinkRequest::new("Dr. Smith", "+1 5551234567"))
        .await
        .unwrap();

    assert!(is_referral_code(&issued.referral_code, 12));
    assert_eq!(issued.link, format!("/visit/Dr.%20Smith?ref={}", issued.referral_code));

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].doctor_name, "Dr. Smith");
    assert_eq!(records[0].phone_number, "+1 5551234567");
    assert_eq!(records[0].referral_code, issued.referral_code);
}

#[tokio::test]
async fn phone_format_is_not_checked_server_side() {
    let store = FakeStore::new();
    let issuer = LinkIssuerService::new(store.clone(), 12);

    let issued = issuer.issue(&SendLinkRequest::new("Dr. Who", "not a phone")).await;
    assert!(issued.is_ok());
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn missing_fields_are_rejected_without_writing() {
    let store = FakeStore::new();
    let issuer = LinkIssuerService::new(store.clone(), 12);

    let requests = [
        SendLinkRequest {
            doctor_name: None,
            phone_number: Some("+1 5551234567".to_string()),
        },
        SendLinkRequest::new("", "+1 5551234567"),
        SendLinkRequest {
            doctor_name: Some("Dr. Smith".to_string()),
            phone_number: None,
        },
    ];

    for request in &requests {
        match issuer.issue(request).await {
            Err(AppError::Validation { message }) => assert_eq!(message, "Missing fields"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn store_failure_is_surfaced_verbatim() {
    let issuer = LinkIssuerService::new(FakeStore::failing("relation \"sent_links\" does not exist"), 12);

    let err = issuer
        .issue(&SendLinkRequest::new("Dr. Smith", "+1 5551234567"))
        .await
        .unwrap_err();

    assert_eq!(err.client_message(), "relation \"sent_links\" does not exist");
    assert!(err.status_code().is_server_error());
}

#[tokio::test]
async fn identical_requests_get_distinct_codes() {
    let store = FakeStore::new();
    let issuer = LinkIssuerService::new(store.clone(), 12);
    let request = SendLinkRequest::new("Dr. Smith", "+1 5551234567");

    let first = issuer.issue(&request).await.unwrap();
    let second = issuer.issue(&request).await.unwrap();

    assert_ne!(first.referral_code, second.referral_code);
    assert_eq!(store.records().len(), 2);
}

#[tokio::test]
async fn honours_configured_code_length() {
    let issuer = LinkIssuerService::new(FakeStore::new(), 20);
    let issued = issuer
        .issue(&SendLinkRequest::new("Dr. Smith", "+1 5551234567"))
        .await
        .unwrap();
    assert!(is_referral_code(&issued.referral_code, 20));
}
