use axum::http::{self, Request, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use mock_server::{app, app_with_db, Db, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use serde_json::{json, Value};
use tower::ServiceExt;

fn auth() -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{DEFAULT_USERNAME}:{DEFAULT_PASSWORD}"))
    )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, auth())
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, auth())
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_credentials_return_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/categories").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], 401);
}

#[tokio::test]
async fn wrong_password_returns_401() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .header(http::header::AUTHORIZATION, format!("Basic {}", STANDARD.encode("admin:nope")))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- contacts ---

#[tokio::test]
async fn list_contacts_empty_is_array() {
    let resp = app()
        .oneshot(request("GET", "/api/contacts?search=&start=0&limit=50"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"total": "0", "contacts": []}));
}

#[tokio::test]
async fn get_contact_not_found() {
    let resp = app().oneshot(request("GET", "/api/contacts/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "Item was not found.");
}

#[tokio::test]
async fn create_contact_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/contacts/new", json!({"email": "a@b.com"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["contact"]["id"], 1);
    assert_eq!(body["contact"]["email"], "a@b.com");
}

#[tokio::test]
async fn update_unknown_contact_returns_404() {
    let resp = app()
        .oneshot(json_request("PATCH", "/api/contacts/42/edit", json!({"firstname": "Jo"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_unknown_contact_creates_it() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/contacts/42/edit", json!({"email": "p@b.com"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["contact"]["id"], 42);
}

#[tokio::test]
async fn dnc_on_unknown_contact_returns_404() {
    let resp = app()
        .oneshot(json_request("POST", "/api/contacts/5/dnc/email/add", json!({"reason": 1})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- other resources ---

#[tokio::test]
async fn send_email_requires_existing_email_and_contact() {
    let resp = app()
        .oneshot(json_request("POST", "/api/emails/3/contact/7/send", json!({})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_segment_wraps_in_list() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/segments/new",
            json!({"name": "VIP", "isPublished": true}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["list"]["name"], "VIP");
}

#[tokio::test]
async fn create_category_requires_title() {
    let resp = app()
        .oneshot(json_request("POST", "/api/categories/new", json!({"bundle": "global"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn log_event_requires_name_and_contact() {
    let resp = app()
        .oneshot(json_request("POST", "/api/analytic/log/event", json!({"name": "visit"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_unknown_device_returns_404() {
    let resp = app().oneshot(request("DELETE", "/api/fcm/devices/8")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn contact_and_segment_lifecycle() {
    use tower::Service;

    let db = Db::default();
    let mut app = app_with_db(DEFAULT_USERNAME, DEFAULT_PASSWORD, db.clone()).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/contacts/new",
            json!({"email": "walk@dog.com", "country": "Cameroon"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["contact"]["id"].as_u64().unwrap();

    // duplicate email rejected
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/contacts/new", json!({"email": "WALK@dog.com"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "email: This field must be unique.");

    // search by email
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("GET", "/api/contacts?search=email%3Awalk%40dog.com&start=0&limit=50"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["total"], "1");
    assert_eq!(body["contacts"][id.to_string()]["email"], "walk@dog.com");

    // partial update keeps other fields
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/api/contacts/{id}/edit"),
            json!({"firstname": "Rex"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["contact"]["firstname"], "Rex");
    assert_eq!(body["contact"]["country"], "Cameroon");

    // segment + bulk add
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/segments/new", json!({"name": "Walkers"})))
        .await
        .unwrap();
    let segment = body_json(resp).await["list"]["id"].as_u64().unwrap();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            &format!("/api/segments/{segment}/contacts/add"),
            json!({"ids": [id.to_string(), 999]}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["details"][id.to_string()]["success"], true);
    assert_eq!(body["details"]["999"]["success"], false);

    // remove
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(request("POST", &format!("/api/segments/{segment}/contact/{id}/remove")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let store = db.read().await;
    assert!(store.segment_members[&segment].is_empty());
    assert_eq!(store.contacts.len(), 1);
}
