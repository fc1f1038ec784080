//! Synchronous request-building core for an interactive messages client.
//!
//! # Overview
//! Parses menu codes and row ids, validates URIs, and builds `HttpRequest`
//! values without touching the network (host-does-IO pattern). The caller
//! executes the round-trip and prints the `HttpResponse` as it came back.
//!
//! # Design
//! - `MessagesClient` is stateless; it holds only the base URI.
//! - Input problems (`InputError`) and URI problems (`ApiError`) are separate
//!   types so the caller can treat one as recoverable and the other as fatal.
//! - Response bodies are opaque strings; nothing here parses them.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::MessagesClient;
pub use error::{ApiError, InputError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{parse_row_id, Command, NewMessage, RequestIntent, RowId};
