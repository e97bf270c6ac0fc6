//! HTTP routes.

use super::client::ClientAddr;
use super::errors::{ErrorChannel, ErrorReport};
use super::usage::{examples_text, Usage};
use crate::models::Family;
use crate::output;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode, Uri};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

const SUBNET_MODULE: &str = "subnet";
const VERSION_MODULE: &str = "version";

const TEXT_PLAIN: &str = "text/plain;charset=UTF-8";

const SECURITY_HEADERS: [(&str, &str); 8] = [
    ("cross-origin-embedder-policy", "require-corp"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-site"),
    (
        "permissions-policy",
        "geolocation=(), midi=(), sync-xhr=(), microphone=(), camera=(), magnetometer=(), gyroscope=(), fullscreen=(), payment=()",
    ),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "1; mode=block"),
];

#[derive(Clone)]
pub(crate) struct AppState {
    errors: ErrorChannel,
    usage: Arc<Usage>,
    verbose: bool,
}

pub(crate) fn new(errors: ErrorChannel, verbose: bool) -> Router {
    let state = AppState {
        errors,
        usage: Arc::new(usage()),
        verbose,
    };

    let router = Router::new()
        .route("/", get(serve_help))
        .route("/version/", get(serve_version))
        .route("/subnet/", get(serve_subnet_usage))
        .route("/subnet/v4/", get(serve_v4_empty))
        .route("/subnet/v4/{*cidr}", get(serve_v4_subnet))
        .route("/subnet/v6/", get(serve_v6_empty))
        .route("/subnet/v6/{*cidr}", get(serve_v6_subnet))
        .with_state(state);

    with_layers(router)
}

/// Panic recovery inside, security headers outside, so a 500 gets them too.
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::map_response(security_headers))
}

fn usage() -> Usage {
    let mut usage = Usage::default();
    usage.register(
        SUBNET_MODULE,
        &[
            "/subnet/v4/192.168.0.1/24",
            "/subnet/v4/10.10.100.0/22",
            "/subnet/v6/fdd8:0c61:bf60:590f::/64",
            "/subnet/v6/2606:4700:a560::/48",
        ],
    );
    usage.register(VERSION_MODULE, &["/version/"]);
    usage
}

pub(crate) fn version_text() -> String {
    format!("{} v{}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

async fn serve_help(State(state): State<AppState>, client: ClientAddr, uri: Uri) -> Response {
    let body = format!("{}\n{}", version_text(), examples_text(&state.usage.all()));
    respond(&state, &client, &uri, body).await
}

async fn serve_version(State(state): State<AppState>, client: ClientAddr, uri: Uri) -> Response {
    respond(&state, &client, &uri, version_text()).await
}

async fn serve_subnet_usage(
    State(state): State<AppState>,
    client: ClientAddr,
    uri: Uri,
) -> Response {
    let body = examples_text(&state.usage.module(SUBNET_MODULE));
    respond(&state, &client, &uri, body).await
}

async fn serve_v4_empty(
    State(state): State<AppState>,
    client: ClientAddr,
    uri: Uri,
) -> Response {
    serve_subnet(&state, &client, &uri, "", Family::V4).await
}

async fn serve_v6_empty(
    State(state): State<AppState>,
    client: ClientAddr,
    uri: Uri,
) -> Response {
    serve_subnet(&state, &client, &uri, "", Family::V6).await
}

async fn serve_v4_subnet(
    State(state): State<AppState>,
    client: ClientAddr,
    uri: Uri,
    Path(cidr): Path<String>,
) -> Response {
    serve_subnet(&state, &client, &uri, &cidr, Family::V4).await
}

async fn serve_v6_subnet(
    State(state): State<AppState>,
    client: ClientAddr,
    uri: Uri,
    Path(cidr): Path<String>,
) -> Response {
    serve_subnet(&state, &client, &uri, &cidr, Family::V6).await
}

async fn serve_subnet(
    state: &AppState,
    client: &ClientAddr,
    uri: &Uri,
    cidr: &str,
    family: Family,
) -> Response {
    let body = match output::calculate(cidr.trim_start_matches('/'), family) {
        Ok(report) => report,
        Err(err) => {
            // Client input, not a server fault.
            log::debug!("Rejected {family} input {cidr:?}: {err}");
            format!("{err}\n")
        }
    };
    respond(state, client, uri, body + "\n").await
}

/// Build a plain text response, reporting failures to the error channel.
async fn respond(state: &AppState, client: &ClientAddr, uri: &Uri, body: String) -> Response {
    let response = Response::builder()
        .header(header::CONTENT_TYPE, TEXT_PLAIN)
        .body(Body::from(body));

    match response {
        Ok(response) => {
            if state.verbose {
                log::info!(
                    "{} => {uri}",
                    client.host().as_deref().unwrap_or("local")
                );
            }
            response
        }
        // Unreachable while the content type is a valid static value.
        Err(err) => {
            state
                .errors
                .report(ErrorReport::new(err, client.with_port(), uri.path()))
                .await;
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    log::error!("Handler panicked: {detail}");

    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error\n").into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    response
}
