//! End-to-end tests for tsreq.
//!
//! Entities are loaded from JSON fixtures, built into requests, encoded, and
//! the resulting bytes are taken apart again to check the wire format.
//!
//! ```text
//! cargo test -p tsreq-integration
//! ```

use std::sync::Once;

use serde::de::DeserializeOwned;
use tsreq_http::EncodedRequest;
use tsreq_http::multipart::{ParsedPart, extract_boundary, parse};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Deserialize an entity view from a JSON fixture.
pub fn fixture<T: DeserializeOwned>(json: &str) -> anyhow::Result<T> {
    init_tracing();
    Ok(serde_json::from_str(json)?)
}

/// The body of a single-document request as text.
#[must_use]
pub fn text(req: &EncodedRequest) -> String {
    String::from_utf8_lossy(&req.body).into_owned()
}

/// Take a multipart request apart.
pub fn parts(req: &EncodedRequest) -> anyhow::Result<Vec<ParsedPart>> {
    let boundary = extract_boundary(&req.content_type)?;
    Ok(parse(&req.body, &boundary)?)
}

mod test_encoding;
mod test_fixtures;
mod test_presence;
mod test_validation;
mod test_versioning;
