//! Root span for `TracingLogger`, plus the per-request access log line.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
};
use std::time::Instant;
use tracing::Span;
use tracing_actix_web::RootSpanBuilder;
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Header naming the calling system.
pub static REQUEST_SOURCE_HEADER: &str = "X-Request-Source";

/// Request ID and start time, stored in the request extensions.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    started: Instant,
}

/// Opens one span per request carrying its request ID, its source and (once
/// authenticated) the caller uid. When the request finishes, an access line
/// is logged inside that span.
pub struct RequestSpan;

impl RootSpanBuilder for RequestSpan {
    fn on_request_start(request: &ServiceRequest) -> Span {
        // Reuse an ID set upstream (client or load balancer)
        let request_id = header_value(request, REQUEST_ID_HEADER)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let request_source =
            header_value(request, REQUEST_SOURCE_HEADER).unwrap_or_else(|| "-".to_string());

        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            request_source = %request_source,
            uid = tracing::field::Empty,
        );

        request.extensions_mut().insert(RequestContext {
            request_id,
            started: Instant::now(),
        });

        span
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        let _entered = span.enter();

        match outcome {
            Ok(res) => {
                let req = res.request();
                let latency = req
                    .extensions()
                    .get::<RequestContext>()
                    .map(|ctx| ctx.started.elapsed())
                    .unwrap_or_default();
                let client_ip = req
                    .connection_info()
                    .realip_remote_addr()
                    .unwrap_or("-")
                    .to_string();

                tracing::info!(
                    method = %req.method(),
                    path = %req.path(),
                    status = res.status().as_u16(),
                    latency = ?latency,
                    client_ip = %client_ip,
                    "request completed"
                );
            }
            Err(err) => {
                tracing::error!(
                    status = err.as_response_error().status_code().as_u16(),
                    error = %err,
                    "request failed"
                );
            }
        }
    }
}

fn header_value(req: &ServiceRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
}
