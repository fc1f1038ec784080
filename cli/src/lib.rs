//! Interactive command-line client for a single "messages" REST endpoint.
//!
//! # Overview
//! Reads a base URI, then serves menu commands (`G1`, `GA`, `P`, `D`, `Q`)
//! from an input stream, sending one request per command and printing the raw
//! status and body. Requests are built by `messages-core`; this crate owns
//! the loop, the transport, and the error policy.
//!
//! # Design
//! - [`run`] takes its input, output streams, and [`Transport`] as parameters
//!   so whole sessions can be driven from tests.
//! - Fatal errors end [`run`] with an [`Exit`] whose [`Exit::code`] the binary
//!   passes to `std::process::exit`.

pub mod dispatcher;
pub mod error;
pub mod output;
pub mod session;
pub mod telemetry;
pub mod transport;

pub use dispatcher::run;
pub use error::{DispatchError, ErrorCategory, Exit};
pub use session::Session;
pub use transport::{Transport, TransportError, UreqTransport};
