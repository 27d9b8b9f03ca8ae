use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Corpus request returned status {status} for {url}")]
    StatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corpus JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CorpusError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CorpusError::HttpError(_) | CorpusError::StatusError { .. } => ErrorSeverity::Medium,
            CorpusError::SerializationError(_) => ErrorSeverity::High,
            CorpusError::IoError(_) => ErrorSeverity::Critical,
            CorpusError::ConfigValidationError { .. }
            | CorpusError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CorpusError::HttpError(_) | CorpusError::StatusError { .. } => {
                format!("Could not download the corpus: {}", self)
            }
            CorpusError::IoError(e) => format!("Could not read the corpus file: {}", e),
            CorpusError::SerializationError(e) => {
                format!("The corpus is not a valid JSON array of texts: {}", e)
            }
            CorpusError::ConfigValidationError { .. }
            | CorpusError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CorpusError::HttpError(_) => "Check the network connection and the corpus URL",
            CorpusError::StatusError { .. } => "Make sure the corpus URL points to an existing file",
            CorpusError::IoError(_) => "Check that the path exists and is readable",
            CorpusError::SerializationError(_) => {
                "Each text needs id, title and tokens; each token needs form, lemma and pos"
            }
            CorpusError::ConfigValidationError { .. } => "Fix the config file; unknown tables and keys are rejected",
            _ => "Run with --help to see the accepted options",
        }
    }
}

/// Process exit status for an error that stops startup.
pub fn exit_code(err: &CorpusError) -> i32 {
    match err.severity() {
        ErrorSeverity::Critical => 3,
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
    }
}

pub type Result<T> = std::result::Result<T, CorpusError>;
