//! Integration tests for templates and the auxiliary services.

use esignlive::builder::{
    CustomFieldBuilder, GroupBuilder, PackageBuilder, ReminderScheduleBuilder, SignerBuilder,
};
use esignlive::types::{AccountMember, EventNotificationConfig, GroupMemberType, NotificationEvent};
use esignlive::{EslClient, PackageId};
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EslClient {
    EslClient::new("test_api_key", server.uri()).unwrap()
}

#[tokio::test]
async fn test_create_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/packages"))
        .and(body_string_contains("\"type\":\"TEMPLATE\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tpl-1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let template = PackageBuilder::new("Lease template")
        .with_signer(SignerBuilder::new("placeholder@example.com").build().unwrap())
        .build()
        .unwrap();

    let template_id = client_for(&mock_server)
        .create_template(&template)
        .await
        .unwrap();
    assert_eq!(template_id.as_str(), "tpl-1");
}

#[tokio::test]
async fn test_package_from_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/packages/tpl-1/clone"))
        .and(body_json(serde_json::json!({
            "name": "Lease for John",
            "type": "PACKAGE",
            "autocomplete": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "pkg-9" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let package_id = client_for(&mock_server)
        .create_package_from_template_named(&PackageId::new("tpl-1"), "Lease for John")
        .await
        .unwrap();
    assert_eq!(package_id.as_str(), "pkg-9");
}

#[tokio::test]
async fn test_template_from_package() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/packages/pkg-1/clone"))
        .and(body_string_contains("\"type\":\"TEMPLATE\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tpl-2" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let template_id = client_for(&mock_server)
        .create_template_from_package_named(&PackageId::new("pkg-1"), "Lease template")
        .await
        .unwrap();
    assert_eq!(template_id.as_str(), "tpl-2");
}

#[tokio::test]
async fn test_signer_session_and_authentication_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(query_param("package", "pkg-1"))
        .and(query_param("signer", "signer1Id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sessionId": "sess-1" })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/authenticationTokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "value": "auth-1" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/signerAuthenticationTokens"))
        .and(body_json(serde_json::json!({ "packageId": "pkg-1", "signerId": "signer1Id" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "value": "auth-2" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let package_id = PackageId::new("pkg-1");

    let session = client
        .create_signer_session_token(&package_id, "signer1Id")
        .await
        .unwrap();
    assert_eq!(session.session_id, "sess-1");

    let token = client.create_authentication_token().await.unwrap();
    assert_eq!(token.value, "auth-1");

    let signer_token = client
        .authentication()
        .create_signer_authentication_token(&package_id, "signer1Id")
        .await
        .unwrap();
    assert_eq!(signer_token.value, "auth-2");
}

#[tokio::test]
async fn test_audit_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/pkg-1/audit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audit-events": [
                {
                    "type": "Create Package",
                    "dateTime": "2024-03-01T10:00:00Z",
                    "user": "Sender Name",
                    "userEmail": "sender@example.com",
                    "userIp": "10.0.0.1"
                },
                { "type": "Send Package", "target": "Lease" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let events = client_for(&mock_server)
        .audit()
        .get_audit(&PackageId::new("pkg-1"))
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, "Create Package");
    assert_eq!(events[0].user_email.as_deref(), Some("sender@example.com"));
    assert_eq!(events[1].target.as_deref(), Some("Lease"));
}

#[tokio::test]
async fn test_field_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/pkg-1/fieldSummary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "signerId": "signer1Id", "documentId": "doc-1", "fieldId": "f-1", "fieldValue": "A-1" }
        ])))
        .mount(&mock_server)
        .await;

    let summary = client_for(&mock_server)
        .field_summary()
        .get_field_summary(&PackageId::new("pkg-1"))
        .await
        .unwrap();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].field_value.as_deref(), Some("A-1"));
}

#[tokio::test]
async fn test_account_senders() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/senders"))
        .and(query_param("from", "1"))
        .and(query_param("to", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "id": "s-1", "email": "sender@example.com", "status": "ACTIVE" }],
            "count": 1
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/account/senders"))
        .and(body_json(serde_json::json!({ "email": "new.sender@example.com", "firstName": "Ada" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "s-2", "email": "new.sender@example.com", "firstName": "Ada", "status": "INVITED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let page = client.account().get_senders(1, 50).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].email, "sender@example.com");

    let sender = client
        .account()
        .invite_user(&AccountMember {
            email: "new.sender@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(sender.id, "s-2");
}

#[tokio::test]
async fn test_reminder_schedule_lifecycle() {
    let mock_server = MockServer::start().await;

    let schedule = ReminderScheduleBuilder::for_package(PackageId::new("pkg-1"))
        .with_days_until_first_reminder(2)
        .with_days_between_reminders(1)
        .with_number_of_repetitions(5)
        .build()
        .unwrap();
    let wire = serde_json::json!({
        "packageId": "pkg-1",
        "startInDaysDelay": 2,
        "intervalInDays": 1,
        "repetitionsCount": 5
    });

    Mock::given(method("POST"))
        .and(path("/packages/pkg-1/reminders"))
        .and(body_json(wire.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/packages/pkg-1/reminders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/packages/pkg-1/reminders"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messageKey": "error.notFound",
            "message": "No reminder schedule."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let package_id = PackageId::new("pkg-1");

    let created = client
        .reminders()
        .create_reminder_schedule(&schedule)
        .await
        .unwrap();
    assert_eq!(created, schedule);

    client.reminders().clear_reminder_schedule(&package_id).await.unwrap();
    let cleared = client
        .reminders()
        .get_reminder_schedule(&package_id)
        .await
        .unwrap();
    assert!(cleared.is_none());
}

#[tokio::test]
async fn test_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/groups"))
        .and(body_string_contains("\"memberType\":\"MANAGER\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "grp-1",
            "name": "Legal",
            "email": "legal@example.com",
            "emailMembers": false,
            "members": [{ "email": "ada@example.com", "memberType": "MANAGER" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "id": "grp-1", "name": "Legal" }],
            "count": 1
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/groups/grp-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let group = GroupBuilder::new("Legal")
        .with_email("legal@example.com")
        .with_member("ada@example.com", GroupMemberType::Manager)
        .build()
        .unwrap();

    let created = client.groups().create_group(&group).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("grp-1"));
    assert_eq!(created.members[0].member_type, GroupMemberType::Manager);

    let groups = client.groups().get_groups().await.unwrap();
    assert_eq!(groups.len(), 1);

    client.groups().delete_group("grp-1").await.unwrap();
}

#[tokio::test]
async fn test_custom_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/account/customfields"))
        .and(body_json(serde_json::json!({
            "id": "policy",
            "value": "A-0",
            "required": true,
            "translations": [{ "language": "en", "name": "Policy number" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "policy",
            "value": "A-0",
            "required": true,
            "translations": [{ "language": "en", "name": "Policy number" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/account/customfields/policy"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let field = CustomFieldBuilder::new("policy")
        .with_default_value("A-0")
        .required()
        .with_translation("en", "Policy number", None)
        .build()
        .unwrap();

    let created = client.custom_fields().create_custom_field(&field).await.unwrap();
    assert_eq!(created, field);

    client.custom_fields().delete_custom_field("policy").await.unwrap();
}

#[tokio::test]
async fn test_event_notifications() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/callback"))
        .and(body_json(serde_json::json!({
            "url": "https://example.com/hook",
            "events": ["PACKAGE_COMPLETE", "DOCUMENT_SIGNED"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://example.com/hook",
            "events": ["PACKAGE_COMPLETE", "DOCUMENT_SIGNED"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let config = EventNotificationConfig {
        url: "https://example.com/hook".to_string(),
        key: None,
        events: vec![NotificationEvent::PackageComplete, NotificationEvent::DocumentSigned],
    };

    client.event_notifications().register(&config).await.unwrap();
    let current = client
        .event_notifications()
        .get_event_notification_config()
        .await
        .unwrap();
    assert_eq!(current, config);
}

#[tokio::test]
async fn test_empty_callback_url_fails_locally() {
    let mock_server = MockServer::start().await;

    let err = client_for(&mock_server)
        .event_notifications()
        .register(&EventNotificationConfig {
            url: String::new(),
            key: None,
            events: vec![],
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
