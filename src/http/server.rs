//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the form, disclosure, and fallback routes
//! - Wire up middleware (timeout, tracing)
//! - Translate requests into `Submission` descriptors for the intake core
//! - Map intake outcomes onto responses

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Form, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::http::pages;
use crate::intake::{Intake, Outcome, Submission};

const RATE_LIMIT_MESSAGE: &str = "Too many attempts. Please wait a minute and try again.";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<Intake>,
}

/// HTTP server for the training page.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a shared intake pipeline.
    pub fn new(config: AppConfig, intake: Arc<Intake>) -> Self {
        let state = AppState { intake };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/login", get(show_login).post(submit_login))
            .route("/thanks", get(thanks))
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// `GET /` — send visitors straight to the form.
async fn index() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login` — render the form.
async fn show_login() -> Html<String> {
    Html(pages::render_login(None))
}

/// `GET /thanks` — disclosure page after an accepted submission.
async fn thanks() -> Html<&'static str> {
    Html(pages::THANKS_PAGE)
}

/// `POST /login` — hand the submission to the intake core.
async fn submit_login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let request_id = Uuid::new_v4();
    let submission = build_submission(fields, &headers, addr, &method, &uri);

    tracing::debug!(
        request_id = %request_id,
        peer = %submission.peer_addr,
        path = %submission.path,
        "Processing submission"
    );

    match state.intake.handle(&submission) {
        Outcome::Accepted => Redirect::to("/thanks").into_response(),
        Outcome::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            Html(pages::render_login(Some(RATE_LIMIT_MESSAGE))),
        )
            .into_response(),
        Outcome::Invalid { message, .. } => Html(pages::render_login(Some(&message))).into_response(),
    }
}

/// Fallback for anything outside the three routes.
async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(pages::NOT_FOUND_PAGE))
}

/// Flatten the axum request context into the transport-agnostic descriptor.
fn build_submission(
    fields: HashMap<String, String>,
    headers: &HeaderMap,
    addr: SocketAddr,
    method: &Method,
    uri: &Uri,
) -> Submission {
    let mut header_map = BTreeMap::new();
    for (name, value) in headers.iter() {
        header_map.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    Submission {
        fields,
        headers: header_map,
        peer_addr: addr.ip().to_string(),
        remote_port: addr.port(),
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
