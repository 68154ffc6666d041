//! In-memory stand-in for the parts of the Mautic REST API that
//! `mautic-core` talks to.
//!
//! Every route sits under `/api` and requires HTTP basic auth. Records are
//! kept as loose JSON objects, ids come from one shared counter, and response
//! envelopes follow Mautic's (`{"contact": ...}`, `{"list": ...}`, string
//! `total` in listings, `{"errors": [...]}` on failure).

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "mautic";

type Record = Map<String, Value>;
type Reply = (StatusCode, Json<Value>);

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    pub contacts: BTreeMap<u64, Record>,
    pub devices: BTreeMap<u64, Record>,
    pub emails: BTreeMap<u64, Record>,
    pub segments: BTreeMap<u64, Record>,
    pub segment_members: BTreeMap<u64, BTreeSet<u64>>,
    pub categories: Vec<Record>,
    pub events: Vec<Value>,
    pub sent_emails: Vec<(u64, u64)>,
}

impl Store {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn reserve_id(&mut self, id: u64) {
        self.next_id = self.next_id.max(id);
    }

    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.contacts.iter().any(|(id, contact)| {
            Some(*id) != except
                && contact
                    .get("email")
                    .and_then(Value::as_str)
                    .is_some_and(|existing| existing.eq_ignore_ascii_case(email))
        })
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    expected_auth: Arc<str>,
}

/// Router with the default credentials.
pub fn app() -> Router {
    app_with_credentials(DEFAULT_USERNAME, DEFAULT_PASSWORD)
}

pub fn app_with_credentials(username: &str, password: &str) -> Router {
    app_with_db(username, password, Db::default())
}

/// Router over an existing store, so callers can inspect state afterwards.
pub fn app_with_db(username: &str, password: &str, db: Db) -> Router {
    let token = STANDARD.encode(format!("{username}:{password}"));
    let state = AppState {
        db,
        expected_auth: format!("Basic {token}").into(),
    };

    Router::new()
        .route("/api/contacts", get(list_contacts))
        .route("/api/contacts/new", post(create_contact))
        .route("/api/contacts/{id}", get(get_contact))
        .route("/api/contacts/{id}/edit", patch(update_contact).put(replace_contact))
        .route("/api/contacts/{id}/dnc/{channel}/add", post(add_dnc))
        .route("/api/fcm/devices/add", post(create_device))
        .route("/api/fcm/devices/{id}", delete(delete_device))
        .route("/api/fcm/devices/{id}/edit", patch(update_device))
        .route("/api/emails/new", post(create_email))
        .route("/api/emails/{id}", get(get_email))
        .route("/api/emails/{id}/edit", put(replace_email))
        .route("/api/emails/{id}/contact/{contact_id}/send", post(send_email))
        .route("/api/segments/new", post(create_segment))
        .route("/api/segments/{id}/contact/{contact_id}/add", post(add_segment_contact))
        .route("/api/segments/{id}/contact/{contact_id}/remove", post(remove_segment_contact))
        .route("/api/segments/{id}/contacts/add", post(add_segment_contacts))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/new", post(create_category))
        .route("/api/analytic/log/event", post(log_event))
        .layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_basic_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented != Some(&*state.expected_auth) {
        return failure(StatusCode::UNAUTHORIZED, "API authorization denied.").into_response();
    }
    next.run(request).await
}

fn failure(status: StatusCode, message: &str) -> Reply {
    (
        status,
        Json(json!({
            "errors": [{ "message": message, "code": status.as_u16(), "type": null }]
        })),
    )
}

fn not_found() -> Reply {
    failure(StatusCode::NOT_FOUND, "Item was not found.")
}

fn with_id(mut record: Record, id: u64) -> Record {
    record.insert("id".into(), json!(id));
    record
}

// --- contacts ---

async fn list_contacts(State(state): State<AppState>, Query(params): Query<HashMap<String, String>>) -> Reply {
    let store = state.db.read().await;
    let search = params.get("search").map(String::as_str).unwrap_or("");
    let start: usize = params.get("start").and_then(|s| s.parse().ok()).unwrap_or(0);
    let limit: usize = params.get("limit").and_then(|s| s.parse().ok()).unwrap_or(30);

    let matches: Vec<(&u64, &Record)> = store
        .contacts
        .iter()
        .filter(|(_, contact)| matches_search(contact, search))
        .collect();

    let page: Map<String, Value> = matches
        .iter()
        .skip(start)
        .take(limit)
        .map(|(id, contact)| (id.to_string(), Value::Object((*contact).clone())))
        .collect();

    // PHP serializes an empty keyed array as `[]`.
    let contacts = if page.is_empty() { json!([]) } else { Value::Object(page) };
    (
        StatusCode::OK,
        Json(json!({ "total": matches.len().to_string(), "contacts": contacts })),
    )
}

fn matches_search(contact: &Record, search: &str) -> bool {
    let field_equals = |field: &str, wanted: &str| {
        contact
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|v| v.eq_ignore_ascii_case(wanted))
    };
    match search.split_once(':') {
        Some(("email", wanted)) => field_equals("email", wanted),
        Some(("phone", wanted)) => field_equals("phone", wanted) || field_equals("mobile", wanted),
        _ => search.is_empty(),
    }
}

async fn get_contact(State(state): State<AppState>, Path(id): Path<u64>) -> Reply {
    let store = state.db.read().await;
    match store.contacts.get(&id) {
        Some(contact) => (StatusCode::OK, Json(json!({ "contact": contact }))),
        None => not_found(),
    }
}

async fn create_contact(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    if let Some(email) = input.get("email").and_then(Value::as_str) {
        if store.email_taken(email, None) {
            return failure(StatusCode::UNPROCESSABLE_ENTITY, "email: This field must be unique.");
        }
    }
    let id = store.next_id();
    let contact = with_id(input, id);
    store.contacts.insert(id, contact.clone());
    (StatusCode::CREATED, Json(json!({ "contact": contact })))
}

async fn update_contact(State(state): State<AppState>, Path(id): Path<u64>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    if let Some(email) = input.get("email").and_then(Value::as_str) {
        if store.email_taken(email, Some(id)) {
            return failure(StatusCode::UNPROCESSABLE_ENTITY, "email: This field must be unique.");
        }
    }
    let Some(contact) = store.contacts.get_mut(&id) else {
        return not_found();
    };
    for (key, value) in input {
        contact.insert(key, value);
    }
    contact.insert("id".into(), json!(id));
    (StatusCode::OK, Json(json!({ "contact": contact })))
}

async fn replace_contact(State(state): State<AppState>, Path(id): Path<u64>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let status = if store.contacts.contains_key(&id) {
        StatusCode::OK
    } else {
        store.reserve_id(id);
        StatusCode::CREATED
    };
    let contact = with_id(input, id);
    store.contacts.insert(id, contact.clone());
    (status, Json(json!({ "contact": contact })))
}

async fn add_dnc(
    State(state): State<AppState>,
    Path((id, channel)): Path<(u64, String)>,
    Json(input): Json<Record>,
) -> Reply {
    let mut store = state.db.write().await;
    let Some(contact) = store.contacts.get_mut(&id) else {
        return not_found();
    };
    let reason = input.get("reason").cloned().unwrap_or(json!(3));
    let entry = json!({ "channel": channel, "reason": reason });
    match contact.get_mut("doNotContact").and_then(Value::as_array_mut) {
        Some(list) => list.push(entry),
        None => {
            contact.insert("doNotContact".into(), json!([entry]));
        }
    }
    (StatusCode::OK, Json(json!({ "contact": contact })))
}

// --- devices ---

async fn create_device(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let id = store.next_id();
    let device = with_id(input, id);
    store.devices.insert(id, device.clone());
    (StatusCode::CREATED, Json(json!({ "device": device })))
}

async fn update_device(State(state): State<AppState>, Path(id): Path<u64>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let Some(device) = store.devices.get_mut(&id) else {
        return not_found();
    };
    for (key, value) in input {
        device.insert(key, value);
    }
    (StatusCode::OK, Json(json!({ "device": device })))
}

async fn delete_device(State(state): State<AppState>, Path(id): Path<u64>) -> Reply {
    let mut store = state.db.write().await;
    match store.devices.remove(&id) {
        Some(device) => (StatusCode::OK, Json(json!({ "device": device }))),
        None => not_found(),
    }
}

// --- emails ---

async fn create_email(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let id = store.next_id();
    let email = with_id(input, id);
    store.emails.insert(id, email.clone());
    (StatusCode::CREATED, Json(json!({ "email": email })))
}

async fn get_email(State(state): State<AppState>, Path(id): Path<u64>) -> Reply {
    let store = state.db.read().await;
    match store.emails.get(&id) {
        Some(email) => (StatusCode::OK, Json(json!({ "email": email }))),
        None => not_found(),
    }
}

async fn replace_email(State(state): State<AppState>, Path(id): Path<u64>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let status = if store.emails.contains_key(&id) {
        StatusCode::OK
    } else {
        store.reserve_id(id);
        StatusCode::CREATED
    };
    let email = with_id(input, id);
    store.emails.insert(id, email.clone());
    (status, Json(json!({ "email": email })))
}

async fn send_email(State(state): State<AppState>, Path((id, contact_id)): Path<(u64, u64)>) -> Reply {
    let mut store = state.db.write().await;
    if !store.emails.contains_key(&id) || !store.contacts.contains_key(&contact_id) {
        return not_found();
    }
    store.sent_emails.push((id, contact_id));
    (StatusCode::OK, Json(json!({ "success": 1 })))
}

// --- segments ---

async fn create_segment(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    let id = store.next_id();
    let segment = with_id(input, id);
    store.segments.insert(id, segment.clone());
    store.segment_members.insert(id, BTreeSet::new());
    (StatusCode::CREATED, Json(json!({ "list": segment })))
}

async fn add_segment_contact(State(state): State<AppState>, Path((id, contact_id)): Path<(u64, u64)>) -> Reply {
    let mut store = state.db.write().await;
    if !store.contacts.contains_key(&contact_id) {
        return not_found();
    }
    match store.segment_members.get_mut(&id) {
        Some(members) => {
            members.insert(contact_id);
            (StatusCode::OK, Json(json!({ "success": 1 })))
        }
        None => not_found(),
    }
}

async fn remove_segment_contact(State(state): State<AppState>, Path((id, contact_id)): Path<(u64, u64)>) -> Reply {
    let mut store = state.db.write().await;
    match store.segment_members.get_mut(&id) {
        Some(members) => {
            members.remove(&contact_id);
            (StatusCode::OK, Json(json!({ "success": 1 })))
        }
        None => not_found(),
    }
}

async fn add_segment_contacts(State(state): State<AppState>, Path(id): Path<u64>, Json(input): Json<Record>) -> Reply {
    let mut store = state.db.write().await;
    if !store.segments.contains_key(&id) {
        return not_found();
    }
    let ids: Vec<u64> = input
        .get("ids")
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(contact_id).collect())
        .unwrap_or_default();

    let mut details = Map::new();
    for contact in ids {
        let known = store.contacts.contains_key(&contact);
        if known {
            store.segment_members.entry(id).or_default().insert(contact);
        }
        details.insert(contact.to_string(), json!({ "success": known }));
    }
    (StatusCode::OK, Json(json!({ "success": 1, "details": details })))
}

fn contact_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

// --- categories ---

async fn list_categories(State(state): State<AppState>) -> Reply {
    let store = state.db.read().await;
    (
        StatusCode::OK,
        Json(json!({ "total": store.categories.len(), "categories": store.categories })),
    )
}

async fn create_category(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    if input.get("title").and_then(Value::as_str).map_or(true, str::is_empty) {
        return failure(StatusCode::BAD_REQUEST, "title: A value is required.");
    }
    let mut store = state.db.write().await;
    let id = store.next_id();
    let category = with_id(input, id);
    store.categories.push(category.clone());
    (StatusCode::CREATED, Json(json!({ "category": category })))
}

// --- analytics ---

async fn log_event(State(state): State<AppState>, Json(input): Json<Record>) -> Reply {
    if !input.contains_key("name") || !input.contains_key("contact") {
        return failure(StatusCode::BAD_REQUEST, "name and contact are required.");
    }
    state.db.write().await.events.push(Value::Object(input));
    (StatusCode::OK, Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn search_matches_email_case_insensitively() {
        let contact = record(json!({"email": "Jane@Example.com"}));
        assert!(matches_search(&contact, "email:jane@example.com"));
        assert!(!matches_search(&contact, "email:john@example.com"));
    }

    #[test]
    fn search_by_phone_checks_mobile_too() {
        let contact = record(json!({"mobile": "5550100"}));
        assert!(matches_search(&contact, "phone:5550100"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search(&Map::new(), ""));
        assert!(!matches_search(&Map::new(), "company:acme"));
    }

    #[test]
    fn ids_share_one_counter() {
        let mut store = Store::default();
        assert_eq!(store.next_id(), 1);
        store.reserve_id(10);
        assert_eq!(store.next_id(), 11);
        store.reserve_id(3);
        assert_eq!(store.next_id(), 12);
    }

    #[test]
    fn email_uniqueness_ignores_the_contact_itself() {
        let mut store = Store::default();
        store.contacts.insert(1, record(json!({"email": "a@b.com"})));
        assert!(store.email_taken("A@B.com", None));
        assert!(!store.email_taken("a@b.com", Some(1)));
    }

    #[test]
    fn contact_ids_accept_numbers_and_strings() {
        assert_eq!(contact_id(&json!(4)), Some(4));
        assert_eq!(contact_id(&json!("12")), Some(12));
        assert_eq!(contact_id(&json!("x")), None);
    }
}
