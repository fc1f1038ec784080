//! Request builder for the messages endpoint.
//!
//! # Design
//! `MessagesClient` holds only the base URI, exactly as the user typed it,
//! and carries no mutable state between calls. The base is validated once in
//! `new`; per-row URIs are derived by appending `/{id}` and validated again
//! when built. Validation runs on the exact text that goes on the wire, so
//! anything `url` would quietly trim or percent-encode is refused instead.
//! The caller executes the actual HTTP round-trip.

use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{NewMessage, RequestIntent, RowId};

/// Stateless request builder bound to one base URI.
#[derive(Debug, Clone)]
pub struct MessagesClient {
    base_uri: String,
}

impl MessagesClient {
    /// Validate `base_uri` as an absolute URI and keep it verbatim.
    pub fn new(base_uri: &str) -> Result<Self, ApiError> {
        check_uri(base_uri)?;
        Ok(Self {
            base_uri: base_uri.to_string(),
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The URI `intent` targets, composed but not yet validated.
    pub fn target_uri(&self, intent: &RequestIntent) -> String {
        match intent {
            RequestIntent::GetOne(id) | RequestIntent::DeleteOne(id) => {
                format!("{}/{id}", self.base_uri)
            }
            RequestIntent::GetAll | RequestIntent::PostOne(_) => self.base_uri.clone(),
        }
    }

    pub fn build(&self, intent: &RequestIntent) -> Result<HttpRequest, ApiError> {
        match intent {
            RequestIntent::GetOne(id) => self.build_get_one(*id),
            RequestIntent::GetAll => self.build_get_all(),
            RequestIntent::PostOne(message) => self.build_post_one(message),
            RequestIntent::DeleteOne(id) => self.build_delete_one(*id),
        }
    }

    pub fn build_get_one(&self, id: RowId) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.row_uri(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_get_all(&self) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_uri()?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_post_one(&self, message: &NewMessage) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_uri()?,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(message.to_body()),
        })
    }

    pub fn build_delete_one(&self, id: RowId) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: self.row_uri(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    fn collection_uri(&self) -> Result<String, ApiError> {
        let uri = self.target_uri(&RequestIntent::GetAll);
        check_uri(&uri)?;
        Ok(uri)
    }

    fn row_uri(&self, id: RowId) -> Result<String, ApiError> {
        let uri = self.target_uri(&RequestIntent::GetOne(id));
        check_uri(&uri)?;
        Ok(uri)
    }
}

/// Succeeds when every character of `uri` is legal in RFC 3986 and the text
/// parses as an absolute URI. The parsed form is discarded so requests go
/// out with the text the user supplied.
fn check_uri(uri: &str) -> Result<(), ApiError> {
    if let Some((position, character)) = uri.char_indices().find(|&(_, c)| !is_uri_char(c)) {
        return Err(ApiError::IllegalCharacter {
            uri: uri.to_string(),
            character,
            position,
        });
    }
    Url::parse(uri).map(drop).map_err(|source| ApiError::InvalidUri {
        uri: uri.to_string(),
        source,
    })
}

/// Unreserved, reserved, and `%` for percent-encoded octets.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}
