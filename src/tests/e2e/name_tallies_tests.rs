// End to end test of the full router against one shared store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::name_tallies::core::record::NameTally;
use crate::modules::name_tallies::core::store::NameTallyStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::observers::recording_observer;

#[fixture]
fn before_each() -> (Arc<NameTallyStore>, Router) {
    let store = Arc::new(NameTallyStore::initialize());
    let app = router(AppState::new(store.clone()));
    (store, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return (status, serde_json::Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn status_of(app: &Router, request: Request<Body>) -> StatusCode {
    app.clone().oneshot(request).await.unwrap().status()
}

fn append(body: &str) -> Request<Body> {
    Request::post("/name-tallies")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn graphql(query: &str) -> Request<Body> {
    Request::post("/gql")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "query": query }).to_string()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_list_alice_and_bob_after_appending_over_http(
    before_each: (Arc<NameTallyStore>, Router),
) {
    let (_, app) = before_each;
    let (status, _) = send(&app, append(r#"{"name":"Alice","tally":3}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, json) = send(&app, append(r#"{"name":"Bob","tally":5}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json, serde_json::json!({ "count": 3 }));

    let (status, json) = send(
        &app,
        Request::get("/name-tallies").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "", "tally": 0 },
            { "name": "Alice", "tally": 3 },
            { "name": "Bob", "tally": 5 }
        ])
    );
}

#[rstest]
#[tokio::test]
async fn it_should_share_the_store_between_http_and_graphql(
    before_each: (Arc<NameTallyStore>, Router),
) {
    let (store, app) = before_each;
    send(&app, append(r#"{"name":"Alice","tally":3}"#)).await;

    let (status, json) = send(
        &app,
        graphql(r#"mutation { appendNameTally(name: "Bob", tally: 5) }"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["appendNameTally"], 3);

    let (_, json) = send(&app, graphql("{ nameTallies { name tally } }")).await;
    assert_eq!(json["data"]["nameTallies"][1]["name"], "Alice");
    assert_eq!(json["data"]["nameTallies"][2]["name"], "Bob");
    assert_eq!(
        store.current(),
        vec![
            NameTally::placeholder(),
            NameTally::new("Alice", 3),
            NameTally::new("Bob", 5),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_notify_subscribers_once_per_request(
    before_each: (Arc<NameTallyStore>, Router),
) {
    let (store, app) = before_each;
    let (notifications, observer) = recording_observer();
    let _unsubscriber = store.subscribe(observer);

    send(&app, append(r#"{"name":"Alice","tally":3}"#)).await;
    let (status, _) = send(&app, append("not-json")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    send(&app, append(r#"{"name":"Bob","tally":5}"#)).await;

    let lengths: Vec<usize> = notifications.lock().unwrap().iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![1, 2, 3]);
}

#[rstest]
#[tokio::test]
async fn it_should_route_the_subscription_endpoint_to_the_websocket_service(
    before_each: (Arc<NameTallyStore>, Router),
) {
    let (_, app) = before_each;

    let status = status_of(&app, Request::get("/gql/ws").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let handshake = Request::get("/gql/ws")
        .header("connection", "upgrade")
        .header("upgrade", "websocket")
        .header("sec-websocket-version", "13")
        .header("sec-websocket-key", "dGhlIHNhbXBsZSBub25jZQ==")
        .header("sec-websocket-protocol", "graphql-transport-ws")
        .body(Body::empty())
        .unwrap();
    let status = status_of(&app, handshake).await;
    // Accepted up to the upgrade itself, which needs a real connection.
    assert_eq!(status, StatusCode::UPGRADE_REQUIRED);

    let status = status_of(&app, Request::get("/gql/wss").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
