use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(code(canvasboard::missing_input))]
    MissingInput(String),

    #[error("Canvas API error {status}: {body}")]
    #[diagnostic(code(canvasboard::upstream))]
    Upstream { status: u16, body: String },

    #[error("Failed to parse Canvas response: {0}")]
    #[diagnostic(code(canvasboard::parse))]
    Parse(String),

    #[error("Failed to reach Canvas: {0}")]
    #[diagnostic(code(canvasboard::transport))]
    Transport(String),

    #[error("{0}")]
    #[diagnostic(
        code(canvasboard::local_config),
        help("keys.json must hold a list of [name, token] pairs")
    )]
    LocalConfig(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(canvasboard::config))]
    Config(String),

    #[error("Render error: {0}")]
    #[diagnostic(code(canvasboard::render))]
    Render(String),

    #[error(transparent)]
    #[diagnostic(code(canvasboard::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller can fix this by changing their input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }

    /// Upstream HTTP status, if Canvas answered with an error
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Render(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CanvasResult<T> = Result<T, Error>;

/// Helper to create the missing-token error
pub fn missing_token_error() -> Error {
    Error::MissingInput("Missing Canvas API token.".to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create local credentials errors
pub fn local_config_error(message: &str) -> Error {
    Error::LocalConfig(message.to_string())
}

/// Helper to create upstream errors
pub fn upstream_error(status: u16, body: &str) -> Error {
    Error::Upstream {
        status,
        body: body.to_string(),
    }
}
