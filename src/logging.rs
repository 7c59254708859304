use std::time::Instant;

use anyhow::Context;
use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIR: &str = "storage/logs";

/// One log line per request. Redirects issued by the access-token guard show
/// up here as 307s; the guard itself does not log.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

/// Installs console logging plus a daily-rolling JSON log file.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
///
/// - `RUST_LOG`: console filter (default `iceapple_admin=info,tower_http=warn`)
/// - `LOG_DIR`: directory for `iceapple-admin.json` (default `storage/logs`)
pub fn init_tracing() -> anyhow::Result<WorkerGuard> {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {log_dir}"))?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // JSON file layer for structured logs (can be ingested by Loki)
    let json_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "iceapple-admin.json");
    let (json_writer, guard) = tracing_appender::non_blocking(json_appender);

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_writer)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    info!(log_dir = %log_dir, "Tracing initialized");

    Ok(guard)
}
