//! Error taxonomy and exit codes for the interactive client.
//!
//! Every failure maps onto one `ErrorCategory`. Input and Unknown errors abort
//! the current operation only; URI and Connection errors end the process with
//! their own exit code so a calling script can tell them apart.

use std::io;

use messages_core::{ApiError, InputError};
use thiserror::Error;

use crate::transport::TransportError;

pub const INPUT_ERR: &str = "Please provide correctly formatted input.";
pub const URI_ERR: &str = "Error occured when setting URI";
pub const CONNECTION_ERR: &str = "Error querying connection";
pub const DEFAULT_ERR: &str = "An unknown error has occured. Sorry!";

pub const URI_EXIT_CODE: i32 = -3;
pub const CONNECTION_EXIT_CODE: i32 = -4;

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    UriError,
    ConnectionError,
}

impl Exit {
    pub const fn code(self) -> i32 {
        match self {
            Exit::Quit => 0,
            Exit::UriError => URI_EXIT_CODE,
            Exit::ConnectionError => CONNECTION_EXIT_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Uri,
    Connection,
    Unknown,
}

impl ErrorCategory {
    /// Text printed to the error stream.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCategory::Input => INPUT_ERR,
            ErrorCategory::Uri => URI_ERR,
            ErrorCategory::Connection => CONNECTION_ERR,
            ErrorCategory::Unknown => DEFAULT_ERR,
        }
    }

    /// `Some` for categories that terminate the process.
    pub const fn fatal_exit(self) -> Option<Exit> {
        match self {
            ErrorCategory::Input | ErrorCategory::Unknown => None,
            ErrorCategory::Uri => Some(Exit::UriError),
            ErrorCategory::Connection => Some(Exit::ConnectionError),
        }
    }
}

/// Anything that can go wrong while running one loop iteration.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Uri(#[from] ApiError),

    #[error(transparent)]
    Connection(#[from] TransportError),

    #[error("failed to read from input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl DispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DispatchError::Input(_) => ErrorCategory::Input,
            DispatchError::Uri(_) => ErrorCategory::Uri,
            DispatchError::Connection(_) => ErrorCategory::Connection,
            DispatchError::Read(_) | DispatchError::Write(_) => ErrorCategory::Unknown,
        }
    }
}
