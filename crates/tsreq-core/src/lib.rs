//! Core types shared by the tsreq request builders.
//!
//! This crate provides the foundational pieces every request builder relies on:
//! the validation error type, the deprecation notice side channel, and the
//! server context used to pick versioned attribute schemes.

mod config;
mod error;
mod notice;
mod version;

pub use config::ServerContext;
pub use error::{ConfigError, RequestError, RequestResult};
pub use notice::Notice;
pub use version::ApiVersion;
