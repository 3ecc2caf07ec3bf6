const MIB: u64 = 1024 * 1024;

/// Every way a submission can fail. The `Display` text is what the error
/// banner shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("No image or video selected")]
    NoMediaSelected,
    #[error("A submission is already in progress")]
    AlreadyProcessing,
    #[error("File size exceeds {}MB limit", .limit / MIB)]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Failed to fetch image: {status}")]
    RemoteFetchFailed { status: u16 },
    #[error("Failed to process image: Server returned {status} {status_text}. Details: {body}")]
    ServerRejected {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Server response missing required {missing}")]
    MalformedResponse { missing: &'static str },
    #[error("{0}")]
    Unknown(String),
}

/// A request that never produced an HTTP response (network failure, CORS,
/// a browser API refusing to build the body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Network error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        SubmitError::Unknown(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
