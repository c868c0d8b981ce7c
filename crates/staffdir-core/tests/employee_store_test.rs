#![allow(clippy::unwrap_used)]
// Integration tests for `EmployeeStore` against a wiremock directory API.

use std::sync::Arc;

use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use staffdir_api::{DirectoryClient, TransportConfig};
use staffdir_core::{
    CoreError, DeleteOutcome, DeletePolicy, Employee, EmployeeId, EmployeeStore, RemoteFailure,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup_with(policy: DeletePolicy) -> (MockServer, EmployeeStore) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = DirectoryClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, EmployeeStore::with_client(client, policy))
}

async fn setup() -> (MockServer, EmployeeStore) {
    setup_with(DeletePolicy::Optimistic).await
}

fn users_json() -> serde_json::Value {
    json!([
        { "id": 1, "nombre": "John", "apellido": "Doe",
          "email": "john@example.com", "profesion": "Developer" },
        { "id": 2, "nombre": "Jane", "apellido": "Smith",
          "email": "jane@example.com", "profesion": "Designer" }
    ])
}

fn john() -> Employee {
    Employee {
        id: Some(EmployeeId::new(1)),
        first_name: Some("John".into()),
        last_name: Some("Doe".into()),
        email: Some("john@example.com".into()),
        profession: Some("Developer".into()),
    }
}

fn jane() -> Employee {
    Employee {
        id: Some(EmployeeId::new(2)),
        first_name: Some("Jane".into()),
        last_name: Some("Smith".into()),
        email: Some("jane@example.com".into()),
        profession: Some("Designer".into()),
    }
}

/// Mount the list endpoint and load the store from it.
async fn populate(server: &MockServer, store: &EmployeeStore) {
    Mock::given(method("GET"))
        .and(path("/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json()))
        .up_to_n_times(1)
        .mount(server)
        .await;
    store.fetch_all().await.unwrap();
}

/// Fail the test if any further request reaches the server.
async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

// ── fetch_all / find_by_id ──────────────────────────────────────────

#[tokio::test]
async fn test_fetch_all_replaces_list_in_order() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    assert_eq!(*store.snapshot(), vec![john(), jane()]);
    assert_eq!(store.find_by_id(EmployeeId::new(1)), Some(john()));
    assert_eq!(store.find_by_id(EmployeeId::new(999)), None);
}

#[tokio::test]
async fn test_fetch_all_null_response_is_empty() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/User"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let snap = store.fetch_all().await.unwrap();
    assert!(snap.is_empty());
    assert_eq!(store.version(), 1);
}

#[tokio::test]
async fn test_fetch_all_failure_keeps_local_state() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    let before = store.snapshot();
    let version = store.version();

    Mock::given(method("GET"))
        .and(path("/User"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .mount(&server)
        .await;

    let err = store.fetch_all().await.unwrap_err();

    assert!(
        err.to_string().contains("Unable to fetch employees"),
        "got: {err}"
    );
    assert_eq!(err.remote_failure(), Some(RemoteFailure::Status(500)));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.version(), version);
}

// ── create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_blank_record_rejected_without_request() {
    let (server, store) = setup().await;
    forbid_requests(&server).await;

    let result = store.create(Employee::default()).await;

    assert!(matches!(result, Err(CoreError::MissingRecord)), "got: {result:?}");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_appends_server_record() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    Mock::given(method("POST"))
        .and(path("/User"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "nombre": "New", "apellido": "Employee",
            "email": "new@example.com", "profesion": "Junior Developer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let new_employee = Employee {
        first_name: Some("New".into()),
        last_name: Some("Employee".into()),
        email: Some("new@example.com".into()),
        profession: Some("Junior Developer".into()),
        ..Employee::default()
    };
    let version = store.version();

    let created = store.create(new_employee).await.unwrap();

    assert_eq!(created.id, Some(EmployeeId::new(3)));
    assert_eq!(store.len(), 3);
    assert_eq!(store.snapshot()[2], created);
    assert_eq!(store.version(), version + 1);
}

#[tokio::test]
async fn test_create_failure_leaves_list_unchanged() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Error"))
        .mount(&server)
        .await;

    let err = store
        .create(Employee {
            first_name: Some("Bob".into()),
            ..Employee::default()
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Unable to save employee"), "got: {err}");
    assert_eq!(*store.snapshot(), vec![john(), jane()]);
}

// ── update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_at_invalid_index_rejected_without_request() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    forbid_requests(&server).await;

    let result = store.update_at(2, john()).await;

    match result {
        Err(CoreError::InvalidIndex { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("expected InvalidIndex, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_without_id_rejected() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    forbid_requests(&server).await;

    let without_id = Employee {
        id: None,
        ..john()
    };

    let result = store.update_at(0, without_id).await;
    assert!(matches!(result, Err(CoreError::MissingId)), "got: {result:?}");
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    let updated = Employee {
        last_name: Some("Updated".into()),
        email: Some("john.updated@example.com".into()),
        profession: Some("Senior Developer".into()),
        ..john()
    };

    Mock::given(method("PUT"))
        .and(path("/User/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "nombre": "John", "apellido": "Updated",
            "email": "john.updated@example.com", "profesion": "Senior Developer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = store.update_at(0, updated.clone()).await.unwrap();

    assert_eq!(result, updated);
    assert_eq!(*store.snapshot(), vec![updated, jane()]);
}

#[tokio::test]
async fn test_update_targets_id_not_stale_index() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    let renamed = Employee {
        first_name: Some("Janet".into()),
        ..jane()
    };

    Mock::given(method("PUT"))
        .and(path("/User/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "nombre": "Janet", "apellido": "Smith",
            "email": "jane@example.com", "profesion": "Designer"
        })))
        .mount(&server)
        .await;

    // Index 0 holds John; the record's id decides what gets replaced.
    store.update_at(0, renamed.clone()).await.unwrap();

    assert_eq!(*store.snapshot(), vec![john(), renamed]);
}

#[tokio::test]
async fn test_update_failure_leaves_list_unchanged() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = store.update(john()).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(*store.snapshot(), vec![john(), jane()]);
}

// ── delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_at_rejects_bad_input_without_request() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    forbid_requests(&server).await;
    let version = store.version();

    let outcome = store.delete_at(5, "1").await;
    assert!(matches!(outcome, DeleteOutcome::Rejected(CoreError::InvalidIndex { .. })));

    let outcome = store.delete_at(0, "").await;
    assert!(matches!(outcome, DeleteOutcome::Rejected(CoreError::MissingId)));

    let outcome = store.delete_at(0, "abc").await;
    assert!(matches!(outcome, DeleteOutcome::Rejected(CoreError::InvalidId { .. })));

    assert_eq!(*store.snapshot(), vec![john(), jane()]);
    assert_eq!(store.version(), version);
}

#[tokio::test]
async fn test_delete_at_rejects_id_not_at_index() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    forbid_requests(&server).await;
    let version = store.version();

    // Unknown id
    let outcome = store.delete_at(0, "99").await;
    assert!(!outcome.is_removed());
    assert!(matches!(
        outcome,
        DeleteOutcome::Rejected(CoreError::IdMismatch { index: 0, .. })
    ));

    // Known id, but shown at another position
    let outcome = store.delete_at(0, "2").await;
    assert!(matches!(
        outcome,
        DeleteOutcome::Rejected(CoreError::IdMismatch { index: 0, .. })
    ));

    assert_eq!(*store.snapshot(), vec![john(), jane()]);
    assert_eq!(store.version(), version);
}

#[tokio::test]
async fn test_delete_unknown_id_is_rejected_without_request() {
    let (server, store) = setup().await;
    populate(&server, &store).await;
    forbid_requests(&server).await;

    let outcome = store.delete(EmployeeId::new(99)).await;

    assert!(!outcome.is_removed());
    assert!(matches!(
        outcome,
        DeleteOutcome::Rejected(CoreError::UnknownId { .. })
    ));
    assert_eq!(*store.snapshot(), vec![john(), jane()]);
}

#[tokio::test]
async fn test_delete_removes_locally_and_remotely() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    Mock::given(method("DELETE"))
        .and(path("/User/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = store.delete_at(0, "1").await;

    assert!(matches!(outcome, DeleteOutcome::Deleted));
    assert_eq!(*store.snapshot(), vec![jane()]);
}

#[tokio::test]
async fn test_delete_remote_failure_keeps_optimistic_removal() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    Mock::given(method("DELETE"))
        .and(path("/User/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = store.delete(EmployeeId::new(1)).await;

    assert!(outcome.is_removed());
    assert!(
        outcome
            .error()
            .is_some_and(|e| e.to_string().contains("Unable to delete employee"))
    );
    assert_eq!(*store.snapshot(), vec![jane()]);
}

#[tokio::test]
async fn test_delete_remote_failure_rolls_back_when_configured() {
    let (server, store) = setup_with(DeletePolicy::Rollback).await;
    populate(&server, &store).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let version = store.version();
    let outcome = store.delete(EmployeeId::new(1)).await;

    assert!(matches!(outcome, DeleteOutcome::RolledBack(_)));
    assert_eq!(*store.snapshot(), vec![john(), jane()]);
    // One snapshot for the removal, one for the restore.
    assert_eq!(store.version(), version + 2);
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn test_subscriber_sees_current_then_each_mutation() {
    let (server, store) = setup().await;
    let mut stream = store.subscribe();
    assert!(stream.current().is_empty());

    populate(&server, &store).await;
    let fetched = stream.changed().await.unwrap();
    assert_eq!(*fetched, vec![john(), jane()]);

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let _ = store.delete(EmployeeId::new(2)).await;

    let after_delete = stream.changed().await.unwrap();
    assert_eq!(*after_delete, vec![john()]);
    assert!(!Arc::ptr_eq(&fetched, &after_delete));
    // The earlier snapshot is untouched by the later mutation.
    assert_eq!(fetched.len(), 2);
}

#[tokio::test]
async fn test_into_stream_replays_current_snapshot() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    let mut stream = store.subscribe().into_stream();
    let first = stream.next().await.unwrap();
    assert_eq!(*first, vec![john(), jane()]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "nombre": "Cy"
        })))
        .mount(&server)
        .await;
    store
        .create(Employee {
            first_name: Some("Cy".into()),
            ..Employee::default()
        })
        .await
        .unwrap();

    let second = stream.next().await.unwrap();
    assert_eq!(second.len(), 3);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_each_mutation_publishes_exactly_one_snapshot() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "nombre": "Cy" })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "nombre": "Cyd" })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut seen = vec![store.snapshot()];

    populate(&server, &store).await;
    assert_eq!(store.version(), 1);
    seen.push(store.snapshot());

    let created = store
        .create(Employee {
            first_name: Some("Cy".into()),
            ..Employee::default()
        })
        .await
        .unwrap();
    assert_eq!(store.version(), 2);
    seen.push(store.snapshot());

    store
        .update(Employee {
            first_name: Some("Cyd".into()),
            ..created
        })
        .await
        .unwrap();
    assert_eq!(store.version(), 3);
    seen.push(store.snapshot());

    let _ = store.delete(EmployeeId::new(3)).await;
    assert_eq!(store.version(), 4);
    seen.push(store.snapshot());

    for (i, a) in seen.iter().enumerate() {
        for b in seen.iter().skip(i + 1) {
            assert!(!Arc::ptr_eq(a, b));
        }
    }
}

#[tokio::test]
async fn test_search_filters_current_snapshot() {
    let (server, store) = setup().await;
    populate(&server, &store).await;

    assert_eq!(store.search("john"), vec![john()]);
    assert_eq!(store.search("").len(), 2);
}
