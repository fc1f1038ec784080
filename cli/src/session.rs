use messages_core::{ApiError, HttpRequest, HttpResponse, MessagesClient, RequestIntent};
use tracing::info;

use crate::transport::{Transport, TransportError};

/// The validated base URI plus the transport shared for the whole run.
pub struct Session<'t, T> {
    client: MessagesClient,
    transport: &'t T,
}

impl<'t, T: Transport> Session<'t, T> {
    pub fn new(client: MessagesClient, transport: &'t T) -> Self {
        Self { client, transport }
    }

    pub fn base_uri(&self) -> &str {
        self.client.base_uri()
    }

    pub fn target_uri(&self, intent: &RequestIntent) -> String {
        self.client.target_uri(intent)
    }

    pub fn build(&self, intent: &RequestIntent) -> Result<HttpRequest, ApiError> {
        self.client.build(intent)
    }

    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        info!(method = %request.method, url = %request.url, "sending request");
        self.transport.send(request)
    }
}
