use thiserror::Error;

/// Environment problems found by `Config::from_env` before the server starts
///
/// These never reach a request handler; `main` prints them and exits.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
