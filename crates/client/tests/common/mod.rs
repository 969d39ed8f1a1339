#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use socialdash_client::shell::{Dialogs, Navigator};
use socialdash_client::{ApiClient, ClientConfig, Session};

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Canned-response backend. Requests without a bearer token get a 401.
#[derive(Clone, Default)]
pub struct FakeBackend {
    routes: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: &str) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the origin.
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn handle(
    State(backend): State<FakeBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let path = uri.path().to_string();
    backend.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization: authorization.clone(),
        body,
    });

    let json = [(header::CONTENT_TYPE, "application/json")];
    if !authorization.is_some_and(|a| a.starts_with("Bearer ")) {
        return (
            StatusCode::UNAUTHORIZED,
            json,
            r#"{"detail":"Not authenticated"}"#.to_string(),
        );
    }
    match backend.routes.lock().unwrap().get(&(method, path)) {
        Some((status, body)) => (*status, json, body.clone()),
        None => (
            StatusCode::NOT_FOUND,
            json,
            r#"{"detail":"Not Found"}"#.to_string(),
        ),
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}

/// Answers every confirm with `accept` and remembers what was shown.
pub struct ScriptedDialogs {
    pub accept: bool,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            confirms: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            accept: false,
            ..Self::accepting()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.accept
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

pub fn client(origin: &str, token: Option<&str>) -> (ApiClient, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let config = ClientConfig::from_origin(origin).unwrap();
    let session = Session::new(token.map(str::to_string));
    (ApiClient::new(config, session, navigator.clone()), navigator)
}

/// An origin nothing listens on.
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
