//! Command codes, request intents, and the message payload.

use std::str::FromStr;

use crate::error::InputError;
use crate::http::HttpMethod;

/// Integer identifier of a single row on the remote resource.
pub type RowId = i32;

/// Template for the POST body. Single-quoted and never escaped; the remote
/// endpoint accepts this lenient form.
const MESSAGE_TEMPLATE_PREFIX: &str = "{'mTitle':'";
const MESSAGE_TEMPLATE_MIDDLE: &str = "', 'mMessage':'";
const MESSAGE_TEMPLATE_SUFFIX: &str = "'}";

/// A menu choice typed at the command prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetOne,
    GetAll,
    PostOne,
    DeleteOne,
    Quit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::GetOne,
        Command::GetAll,
        Command::PostOne,
        Command::DeleteOne,
        Command::Quit,
    ];

    /// Match a line exactly against the known codes. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "G1" => Some(Command::GetOne),
            "GA" => Some(Command::GetAll),
            "P" => Some(Command::PostOne),
            "D" => Some(Command::DeleteOne),
            "Q" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Command::GetOne => "G1",
            Command::GetAll => "GA",
            Command::PostOne => "P",
            Command::DeleteOne => "D",
            Command::Quit => "Q",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::GetOne => "Get One",
            Command::GetAll => "Get All",
            Command::PostOne => "Post One",
            Command::DeleteOne => "Delete One",
            Command::Quit => "Quit",
        }
    }
}

/// Title and message for a new row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub title: String,
    pub message: String,
}

impl NewMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Render the request body by plain substitution into the template.
    pub fn to_body(&self) -> String {
        let mut body = String::with_capacity(
            MESSAGE_TEMPLATE_PREFIX.len()
                + self.title.len()
                + MESSAGE_TEMPLATE_MIDDLE.len()
                + self.message.len()
                + MESSAGE_TEMPLATE_SUFFIX.len(),
        );
        body.push_str(MESSAGE_TEMPLATE_PREFIX);
        body.push_str(&self.title);
        body.push_str(MESSAGE_TEMPLATE_MIDDLE);
        body.push_str(&self.message);
        body.push_str(MESSAGE_TEMPLATE_SUFFIX);
        body
    }
}

/// One request the user asked for, built fresh each loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestIntent {
    GetOne(RowId),
    GetAll,
    PostOne(NewMessage),
    DeleteOne(RowId),
}

impl RequestIntent {
    pub fn method(&self) -> HttpMethod {
        match self {
            RequestIntent::GetOne(_) | RequestIntent::GetAll => HttpMethod::Get,
            RequestIntent::PostOne(_) => HttpMethod::Post,
            RequestIntent::DeleteOne(_) => HttpMethod::Delete,
        }
    }
}

/// Parse a row id line. Surrounding whitespace is ignored.
pub fn parse_row_id(line: &str) -> Result<RowId, InputError> {
    let trimmed = line.trim();
    RowId::from_str(trimmed).map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}
