use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the storefront client.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the CLI layer continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum SiteError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── REST backend ────────────────────────────────────────────────────
    #[error("api: {0}")]
    Api(#[from] ApiError),

    // ── Admin authentication ────────────────────────────────────────────
    #[error("auth: {0}")]
    Auth(#[from] AuthError),

    // ── Speech output ───────────────────────────────────────────────────
    #[error("speech: {0}")]
    Speech(#[from] SpeechError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── REST backend errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ─── Admin authentication errors ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the login; carries the message to show the admin.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response from server.")]
    InvalidResponse,

    #[error("credential store: {0}")]
    Credentials(String),
}

// ─── Speech errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("{provider} is not configured: {reason}")]
    NotConfigured { provider: String, reason: String },

    #[error("{provider} synthesis failed: {message}")]
    Synthesis { provider: String, message: String },

    #[error("writing audio failed: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
