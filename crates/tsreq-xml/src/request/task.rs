//! Tasks.

use tsreq_core::RequestResult;

use crate::session::{XmlRequest, empty};

/// Run a task immediately. The body is the bare envelope.
pub fn run_now() -> RequestResult<XmlRequest> {
    empty()
}
