use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const PORT_BOUNDS: (u16, u16) = (1, 65_535);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_MEDIA_DIR: &str = "media";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

/// Static-host configuration, read once at startup. Out-of-range or
/// malformed values fall back to their defaults rather than failing the
/// boot.
#[derive(Clone)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    media_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: parse_u16_in_bounds(std::env::var("PORT").ok(), DEFAULT_PORT, PORT_BOUNDS),
            dist_dir: PathBuf::from(
                parse_non_empty(std::env::var("DIST_DIR").ok())
                    .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()),
            ),
            media_dir: PathBuf::from(
                parse_non_empty(std::env::var("MEDIA_DIR").ok())
                    .unwrap_or_else(|| DEFAULT_MEDIA_DIR.to_string()),
            ),
            log_level: parse_log_level(std::env::var("LOG_LEVEL").ok(), DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_u16_in_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match parse_non_empty(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthPayload {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

async fn log_requests(State(config): State<ServerConfig>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    log_event(
        &config,
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;

    log_event(
        &config,
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }

    response
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    let index_fallback = config.dist_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index_fallback));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/media", ServeDir::new(&config.media_dir))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config.clone(), log_requests));

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": config.port,
            "dist_dir": config.dist_dir.display().to_string(),
            "media_dir": config.media_dir.display().to_string(),
        }),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parsing_enforces_bounds_and_defaults() {
        assert_eq!(
            parse_u16_in_bounds(Some("3000".to_string()), DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
        assert_eq!(
            parse_u16_in_bounds(Some(" 9090 ".to_string()), DEFAULT_PORT, PORT_BOUNDS),
            9090
        );
        assert_eq!(
            parse_u16_in_bounds(Some("0".to_string()), DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        assert_eq!(
            parse_u16_in_bounds(Some("not-a-port".to_string()), DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        assert_eq!(
            parse_u16_in_bounds(None, DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
    }

    #[test]
    fn blank_directory_overrides_fall_back_to_defaults() {
        assert_eq!(parse_non_empty(Some("   ".to_string())), None);
        assert_eq!(
            parse_non_empty(Some(" assets ".to_string())),
            Some("assets".to_string())
        );
        assert_eq!(parse_non_empty(None), None);
    }

    #[test]
    fn log_level_parsing_accepts_known_levels_only() {
        assert!(parse_log_level(Some("debug".to_string()), LogLevel::Info) == LogLevel::Debug);
        assert!(parse_log_level(Some("DEBUG".to_string()), LogLevel::Info) == LogLevel::Debug);
        assert!(parse_log_level(Some("verbose".to_string()), LogLevel::Info) == LogLevel::Info);
        assert!(parse_log_level(None, LogLevel::Info) == LogLevel::Info);
    }

    #[test]
    fn debug_events_rank_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn request_id_prefers_the_inbound_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-abc"));

        assert_eq!(resolve_request_id(&headers), "req-abc");
    }

    #[test]
    fn blank_or_missing_request_id_is_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));

        let empty = HeaderMap::new();
        let first = resolve_request_id(&empty);
        let second = resolve_request_id(&empty);
        assert_ne!(first, second);
    }
}
