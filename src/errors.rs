use thiserror::Error;

/// Main error type for the tailwind-safelist crate
#[derive(Debug, Error)]
pub enum SafelistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed safelist pattern `{pattern}`: {message}")]
    MalformedPattern { pattern: String, message: String },

    #[error("Invalid content glob `{glob}`: {message}")]
    InvalidGlob { glob: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Failed to write output to {path}: {message}")]
    OutputError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, SafelistError>;
