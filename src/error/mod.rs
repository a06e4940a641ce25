use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised inside an agent's scoring function.
///
/// These never escape a debate cycle: `DebateAgent::formulate_argument`
/// contains them and degrades to the fixed low-confidence fallback, so one
/// misbehaving agent cannot abort a whole cycle.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Malformed evidence record: {message}")]
    MalformedEvidence { message: String },

    #[error("Scoring failed: {message}")]
    Scoring { message: String },
}

/// Convenience result type for application-level operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config {
            message: message.into(),
        }
    }

    /// Create an analysis error with the given message.
    pub fn analysis(message: impl Into<String>) -> Self {
        AppError::Analysis {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("VERIDICT_CYCLES must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: VERIDICT_CYCLES must be positive"
        );

        let err = AgentError::Scoring {
            message: "empty subset".to_string(),
        };
        assert_eq!(err.to_string(), "Scoring failed: empty subset");
    }
}
