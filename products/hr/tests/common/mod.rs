use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use products_hr::{ClientSettings, EmployeeClient, EmployeeForm, EmployeeRecord, Field};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};

#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

#[derive(Clone, Debug)]
pub struct Received {
    pub body: Value,
    pub request_id: Option<String>,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Stand-in for the employees API: answers every `POST /employees` with a
/// fixed reply and records what it was sent.
pub struct StubApi {
    pub endpoint: String,
    received: Arc<Mutex<Vec<Received>>>,
    handle: JoinHandle<()>,
}

impl StubApi {
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            received: received.clone(),
        };
        let router = Router::new()
            .route("/employees", post(create_employee))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(Self {
            endpoint: format!("http://{addr}/employees"),
            received,
            handle,
        })
    }

    pub fn client(&self) -> EmployeeClient {
        let settings = ClientSettings::new(&self.endpoint).unwrap();
        EmployeeClient::new(settings).unwrap()
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_employee(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let request_id = headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .received
        .lock()
        .unwrap()
        .push(Received { body, request_id });
    match state.reply {
        Reply::Json(status, value) => (status, Json(value)).into_response(),
        Reply::Text(status, text) => (status, text).into_response(),
    }
}

/// Endpoint on a port nothing listens on.
pub async fn dead_endpoint() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/employees"))
}

pub fn valid_record() -> EmployeeRecord {
    EmployeeRecord::default()
        .with(Field::EmployeeId, "E2024")
        .with(Field::Name, "Katherine Johnson")
        .with(Field::Email, "kj@example.com")
        .with(Field::PhoneNumber, "7575550100")
        .with(Field::Department, "Flight Research")
        .with(Field::DateOfJoining, "2023-03-01")
        .with(Field::Role, "Mathematician")
}

pub fn filled_form() -> EmployeeForm {
    EmployeeForm::with_record(valid_record())
}
