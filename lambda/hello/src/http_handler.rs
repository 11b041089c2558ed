use lambda_http::request::RequestContext;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use tracing::{error, info, warn};

use crate::error::{HelloError, ScanError};
use crate::table::{ScanPage, TableScanner};

const GREETING: &str = "Helloo ";

/// Request id from the API Gateway context, falling back to the Lambda
/// invocation id.
fn request_id(event: &Request) -> Option<String> {
    let gateway_id = match event.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx.request_id.clone(),
        Some(RequestContext::ApiGatewayV2(ctx)) => ctx.request_id.clone(),
        _ => None,
    };

    gateway_id.or_else(|| {
        event
            .lambda_context_ref()
            .map(|ctx| ctx.request_id.clone())
            .filter(|id| !id.is_empty())
    })
}

/// Consumes the scan result. Neither rows nor errors reach the response.
fn log_scan_outcome(outcome: Result<ScanPage, ScanError>) {
    match outcome {
        Ok(page) => {
            for item in &page.items {
                info!(?item, "scanned item");
            }
            info!(count = page.items.len(), "scan complete");
            if page.truncated {
                warn!("scan returned one page, remaining rows were not read");
            }
        }
        Err(e) => error!(error = %e, "failed to scan table"),
    }
}

/// Prefixes the body with the greeting, keeping text as text and binary
/// as binary. `None` when there is nothing to greet.
fn greet(body: &Body) -> Option<Body> {
    match body {
        Body::Empty => None,
        Body::Text(text) if text.is_empty() => None,
        Body::Text(text) => Some(Body::Text(format!("{}{}", GREETING, text))),
        Body::Binary(bytes) if bytes.is_empty() => None,
        Body::Binary(bytes) => {
            let mut greeted = GREETING.as_bytes().to_vec();
            greeted.extend_from_slice(bytes);
            Some(Body::Binary(greeted))
        }
    }
}

pub(crate) async fn function_handler<T>(table: &T, event: Request) -> Result<Response<Body>, Error>
where
    T: TableScanner + ?Sized,
{
    let request_id = request_id(&event);
    info!(request_id = request_id.as_deref().unwrap_or("<none>"), "processing request");

    log_scan_outcome(table.scan().await);

    let body = match greet(event.body()) {
        Some(body) => body,
        None => return Err(HelloError::NameNotProvided.into()),
    };

    let response = Response::builder().status(200).body(body)?;
    info!(
        status = response.status().as_u16(),
        body = ?response.body(),
        "responding"
    );

    Ok(response)
}
