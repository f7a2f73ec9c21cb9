/// Failure talking to the server during a submission or challenge action.
///
/// None of these mutate client-side state; the user may retry manually.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a usable response (connection refused,
    /// timeout, TLS failure, ...).
    #[error("request failed: {0}")]
    Request(#[from] anyhow::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The server processed the request but rejected it.
    #[error("rejected by server: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// Create a request error from any error type.
    pub fn request(err: impl Into<anyhow::Error>) -> Self {
        Self::Request(err.into())
    }

    /// Check if this error is a rejection by the server, as opposed to
    /// the request not getting through at all.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
