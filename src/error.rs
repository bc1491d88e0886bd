use thiserror::Error;

/// User-facing message for a failure that has no more specific explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during classification.";

/// User-facing message when no response was received from the backend.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Could not connect to the server. Please try again later.";

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config_loader", "gateway")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejection of an upload candidate before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not an image: MIME type '{mime_type}' does not start with 'image/'")]
    NotAnImage { mime_type: String },

    #[error("no file selected")]
    MissingFile,
}

impl ValidationError {
    /// Text shown next to the upload control.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NotAnImage { .. } => "Please upload an image file.",
            ValidationError::MissingFile => "Please select a file to upload.",
        }
    }
}

/// Failure of a single request against the classification backend.
///
/// Every variant is terminal for the submission that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Non-2xx response carrying a `detail` string.
    #[error("server rejected request (HTTP {status}): {message}")]
    ServerMessage { status: u16, message: String },

    /// No response was received at all (DNS, refused connection, reset).
    #[error("transport failure: {reason}")]
    TransportFailure { reason: String },

    /// 2xx response whose body does not have the expected shape.
    #[error("malformed response: {details}")]
    MalformedResponse { details: String },

    #[error("request failed: {details}")]
    Unknown { details: String },
}

impl RequestError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            RequestError::ServerMessage { message, .. } => message.as_str(),
            RequestError::TransportFailure { .. } => CONNECTION_FAILURE_MESSAGE,
            RequestError::MalformedResponse { .. } => {
                "The server returned an unexpected response."
            }
            RequestError::Unknown { .. } => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// HTTP status for failures that came with a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::ServerMessage { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Misuse of a [`SubmissionSession`](crate::client::SubmissionSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a submission is already in progress")]
    SubmissionInProgress,
}

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Text suitable for showing next to the point of interaction.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(e) => e.user_message().to_string(),
            Error::Request(e) => e.user_message().to_string(),
            Error::Session(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}
