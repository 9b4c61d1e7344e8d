//! Integration tests for the authenticated request relay.
//!
//! These tests run the relay against a mock API host, verifying the composed
//! paths on the wire, bearer authentication, pass-through of caller bodies,
//! and the failure surface (no credential, rejected credential, deadlines).

use std::sync::Arc;
use std::time::Duration;

use fantasy_api::address::{ResourceAddress, ResourceKind};
use fantasy_api::documents::TransactionDocument;
use fantasy_api::{
    ClientId, ClientSecret, Credential, CredentialStore, FantasyConfig, HttpMethod,
    MemoryCredentialStore, RelayError, RequestBody, RequestRelay, Session, SessionId,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> FantasyConfig {
    FantasyConfig::builder()
        .client_id(ClientId::new("test-consumer-key").unwrap())
        .client_secret(ClientSecret::new("test-consumer-secret").unwrap())
        .api_url(format!("{}/fantasy/v2", server.uri()))
        .build()
        .unwrap()
}

fn authenticated_fixture(server: &MockServer) -> (RequestRelay, Session) {
    let store = Arc::new(MemoryCredentialStore::new());
    let session = Session::new(SessionId::new("browser-1"));
    store.put(
        session.id().clone(),
        Credential::new("stored-access-token".to_string(), None, None),
    );
    let relay = RequestRelay::new(&config_for(server), store);
    (relay, session)
}

#[tokio::test]
async fn test_get_issues_one_authenticated_request_to_composed_path() {
    let server = MockServer::start().await;
    let remote_body = "<fantasy_content><team/></fantasy_content>";
    Mock::given(method("GET"))
        .and(path("/fantasy/v2/team/223.l.431.t.1/roster;week=10"))
        .and(header("Authorization", "Bearer stored-access-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(remote_body.as_bytes(), "application/xml"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::resource(ResourceKind::Team, "223.l.431.t.1")
        .sub(ResourceAddress::collection(ResourceKind::Roster).filter("week", "10"));

    let response = relay.get(&session, &address).await.unwrap();

    // The remote body comes back unmodified
    assert_eq!(response.status, 200);
    assert_eq!(response.body, remote_body.as_bytes());
    assert_eq!(response.content_type.as_deref(), Some("application/xml"));
}

#[tokio::test]
async fn test_execute_without_credential_issues_no_network_call() {
    let server = MockServer::start().await;
    // Any request reaching the server fails the test
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let relay = RequestRelay::new(&config_for(&server), Arc::new(MemoryCredentialStore::new()));
    let session = Session::new(SessionId::new("anon"));
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay.get(&session, &address).await;

    assert!(matches!(result, Err(RelayError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_expired_credential_issues_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let session = Session::new(SessionId::new("stale"));
    store.put(
        session.id().clone(),
        Credential::new(
            "expired-token".to_string(),
            None,
            Some(chrono::Utc::now() - chrono::Duration::minutes(5)),
        ),
    );
    let relay = RequestRelay::new(&config_for(&server), store);
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay.get(&session, &address).await;

    assert!(matches!(result, Err(RelayError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_put_passes_waiver_edit_body_through_unmodified() {
    let server = MockServer::start().await;
    let caller_body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><fantasy_content><transaction>\
        <transaction_key>248.l.55438.w.c.2_6093</transaction_key><type>waiver</type>\
        <faab_bid>20</faab_bid></transaction></fantasy_content>";
    Mock::given(method("PUT"))
        .and(path("/fantasy/v2/transaction/248.l.55438.w.c.2_6093"))
        .and(header("Content-Type", "application/xml"))
        // Byte-for-byte pass-through: no merging, no defaulting
        .and(body_string(caller_body))
        .respond_with(ResponseTemplate::new(200).set_body_string("<fantasy_content/>"))
        .expect(1)
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address =
        ResourceAddress::resource(ResourceKind::Transaction, "248.l.55438.w.c.2_6093");

    let response = relay
        .put(&session, &address, RequestBody::xml(caller_body))
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_post_transaction_document_to_league_collection() {
    let server = MockServer::start().await;
    let body = TransactionDocument::add_player("238.p.5484", "238.l.627060.t.6")
        .to_body()
        .unwrap();
    Mock::given(method("POST"))
        .and(path("/fantasy/v2/league/238.l.627060/transactions"))
        .and(header("Content-Type", "application/xml"))
        .and(body_string(body.content.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_string("<fantasy_content/>"))
        .expect(1)
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::resource(ResourceKind::League, "238.l.627060")
        .sub(ResourceAddress::collection(ResourceKind::Transaction));

    let response = relay.post(&session, &address, body).await.unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_delete_cancels_pending_transaction() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/fantasy/v2/transaction/248.l.55438.pt.11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::resource(ResourceKind::Transaction, "248.l.55438.pt.11");

    let response = relay.delete(&session, &address, None).await.unwrap();

    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_remote_401_surfaces_as_credential_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fantasy/v2/games"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .expect(1)
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay.get(&session, &address).await;

    match result {
        Err(RelayError::CredentialRejected { status }) => assert_eq!(status, 401),
        other => panic!("expected CredentialRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_403_surfaces_as_credential_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fantasy/v2/games"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay.get(&session, &address).await;

    assert!(matches!(
        result,
        Err(RelayError::CredentialRejected { status: 403 })
    ));
}

#[tokio::test]
async fn test_domain_error_responses_pass_through_unmodified() {
    let server = MockServer::start().await;
    let error_document = "<fantasy_content><error>Trade is no longer pending</error></fantasy_content>";
    Mock::given(method("PUT"))
        .and(path("/fantasy/v2/transaction/248.l.55438.pt.11"))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_document))
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::resource(ResourceKind::Transaction, "248.l.55438.pt.11");
    let body = TransactionDocument::respond_to_trade(
        "248.l.55438.pt.11",
        fantasy_api::documents::TradeAction::Accept,
    )
    .to_body()
    .unwrap();

    // Domain-level rejection is not an error of this layer
    let response = relay.put(&session, &address, body).await.unwrap();

    assert_eq!(response.status, 400);
    assert_eq!(response.text(), error_document);
}

#[tokio::test]
async fn test_deadline_elapsing_surfaces_as_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fantasy/v2/games"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let (relay, session) = authenticated_fixture(&server);
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay
        .execute(
            &session,
            &address,
            HttpMethod::Get,
            None,
            Some(Duration::from_millis(50)),
        )
        .await;

    assert!(matches!(result, Err(RelayError::Cancelled)));
}

#[tokio::test]
async fn test_unreachable_host_surfaces_as_transport_error() {
    // Nothing is listening on this port
    let config = FantasyConfig::builder()
        .client_id(ClientId::new("key").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .api_url("http://127.0.0.1:1/fantasy/v2")
        .build()
        .unwrap();

    let store = Arc::new(MemoryCredentialStore::new());
    let session = Session::new(SessionId::new("s1"));
    store.put(
        session.id().clone(),
        Credential::new("token".to_string(), None, None),
    );
    let relay = RequestRelay::new(&config, store);
    let address = ResourceAddress::collection(ResourceKind::Game);

    let result = relay.get(&session, &address).await;

    assert!(matches!(result, Err(RelayError::Transport(_))));
}
