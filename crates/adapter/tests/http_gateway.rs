use adapter::{BackendGateway, Console, HttpGateway, HttpGatewayConfig};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::{delete, get, put},
    Json, Router,
};
use domain::{AdminSession, BanStatus, GatewayError, MutationError, FALLBACK_POSTER_URL};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Backend {
    requests: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    fn record(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn users(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let auth = headers.get("authorization").and_then(|h| h.to_str().ok());
    if auth != Some("Bearer backend-token") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!([
        {
            "userId": "u1",
            "username": "Ann",
            "email": "ann@example.com",
            "biography": "",
            "preferredGenres": ["Drama"],
            "friends": [],
            "signedUrl": "",
            "isBanned": false,
            "isAdmin": false
        }
    ])))
}

async fn watchlists() -> Json<Value> {
    Json(json!([
        {
            "listId": "w1", "listName": "Weekend", "userId": "u1", "username": "Ann",
            "comments": [], "likes": [], "titles": ["t1"], "collaborators": [], "isPublic": true
        },
        {
            "listId": "w2", "listName": "Missing", "userId": "u1", "username": "Ann",
            "comments": [], "likes": [], "titles": ["t404"], "collaborators": [], "isPublic": false
        }
    ]))
}

async fn comments() -> Json<Value> {
    Json(json!([
        {
            "commentId": "c1", "comment": "Nice picks", "datePosted": "2024-02-10T08:00:00Z",
            "userId": "u1", "username": "Ann", "watchlistId": "w1", "watchlistName": "Weekend"
        },
        {
            "commentId": "c2", "comment": "Needs more horror", "datePosted": "2024-03-01T12:30:00.000",
            "userId": "u1", "username": "Ann", "watchlistId": "w1", "watchlistName": "Weekend"
        }
    ]))
}

async fn title(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(format!("GET title {}", id));
    if id == "t1" {
        Ok(Json(json!({ "title": "Alien", "poster": "https://img/alien.jpg" })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn ban(
    State(backend): State<Backend>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    backend.record(format!("PUT {} {}", user_id, body["banStatus"]));
    if user_id == "locked" {
        StatusCode::CONFLICT
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn remove_comment(
    State(backend): State<Backend>,
    Path((list_id, comment_id)): Path<(String, String)>,
) -> StatusCode {
    backend.record(format!("DELETE {} {}", list_id, comment_id));
    StatusCode::OK
}

async fn unmatched(State(backend): State<Backend>, method: Method, uri: Uri) -> StatusCode {
    backend.record(format!("UNMATCHED {} {}", method, uri));
    StatusCode::NOT_FOUND
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/users", get(users))
        .route("/api/watchlists/admin", get(watchlists))
        .route("/api/watchlists/comments", get(comments))
        .route("/api/watchmode/title/:id", get(title))
        .route("/api/users/:id/ban", put(ban))
        .route(
            "/api/watchlists/:list_id/comments/:comment_id",
            delete(remove_comment),
        )
        .fallback(unmatched)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/api/", addr), backend)
}

fn gateway(base_url: String, token: Option<&str>) -> HttpGateway {
    HttpGateway::new(HttpGatewayConfig {
        base_url,
        token: token.map(str::to_string),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_listings_decode_backend_payloads() {
    let (url, _) = spawn_backend().await;
    let gw = gateway(url, Some("backend-token"));

    let accounts = gw.list_accounts().await.unwrap();
    assert_eq!(accounts[0].username, "Ann");
    assert_eq!(accounts[0].preferred_genres, vec!["Drama"]);

    let lists = gw.list_watchlists().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert!(lists.iter().all(|w| w.poster_url.is_none()));

    let comments = gw.list_comments().await.unwrap();
    assert_eq!(comments[0].watchlist_name, "Weekend");
    assert_eq!(comments[1].date_posted, "2024-03-01T12:30:00.000");
    assert!(comments[1].posted_at().is_some());
}

#[tokio::test]
async fn test_missing_token_surfaces_status() {
    let (url, _) = spawn_backend().await;
    let gw = gateway(url, None);

    let err = gw.list_accounts().await.unwrap_err();
    assert!(matches!(err, GatewayError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_title_lookup() {
    let (url, _) = spawn_backend().await;
    let gw = gateway(url, None);

    assert_eq!(
        gw.get_title_metadata("t1").await.unwrap().poster,
        "https://img/alien.jpg"
    );
    let err = gw.get_title_metadata("t404").await.unwrap_err();
    assert_eq!(err.title_id, "t404");
}

#[tokio::test]
async fn test_ids_stay_inside_their_path_segment() {
    let (url, backend) = spawn_backend().await;
    let gw = gateway(url, Some("backend-token"));

    gw.delete_comment("w1", "../../users/u2").await.unwrap();
    let err = gw.get_title_metadata("t1?x=/../../users").await.unwrap_err();
    assert!(matches!(err.source, GatewayError::Status { status: 404, .. }));
    gw.set_ban_status("u1#frag", BanStatus::Banned).await.unwrap();

    assert_eq!(
        backend.requests(),
        vec![
            "DELETE w1 ../../users/u2",
            "GET title t1?x=/../../users",
            "PUT u1#frag \"banned\"",
        ]
    );
}

#[tokio::test]
async fn test_dot_segments_are_refused_before_sending() {
    let (url, backend) = spawn_backend().await;
    let gw = gateway(url, Some("backend-token"));

    let err = gw.delete_comment("w1", "..").await.unwrap_err();
    assert_eq!(
        err,
        MutationError::DeleteComment {
            comment_id: "..".into(),
            source: GatewayError::InvalidId("..".into()),
        }
    );
    let err = gw.set_ban_status(".", BanStatus::Banned).await.unwrap_err();
    assert!(matches!(
        err,
        MutationError::BanStatus {
            source: GatewayError::InvalidId(_),
            ..
        }
    ));
    let err = gw.get_title_metadata("").await.unwrap_err();
    assert_eq!(err.source, GatewayError::InvalidId(String::new()));

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_mutations() {
    let (url, backend) = spawn_backend().await;
    let gw = gateway(url, None);

    gw.set_ban_status("u1", BanStatus::Banned).await.unwrap();
    gw.delete_comment("w1", "c1").await.unwrap();
    let err = gw
        .set_ban_status("locked", BanStatus::Unbanned)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::BanStatus {
            source: GatewayError::Status { status: 409, .. },
            ..
        }
    ));

    assert_eq!(
        backend.requests(),
        vec![
            "PUT u1 \"banned\"",
            "DELETE w1 c1",
            "PUT locked \"unbanned\"",
        ]
    );
}

#[tokio::test]
async fn test_console_load_over_http() {
    let (url, _) = spawn_backend().await;
    let console = Console::new(
        Arc::new(gateway(url, Some("backend-token"))),
        AdminSession::new("u1"),
    );

    console.load().await.unwrap();

    let lists = console.watchlists("").await;
    assert_eq!(lists[0].poster(), "https://img/alien.jpg");
    assert_eq!(lists[1].poster_url.as_deref(), Some(FALLBACK_POSTER_URL));
    assert_eq!(console.comments("nice").await.len(), 1);
    assert_eq!(console.comments("").await.len(), 2);
}
