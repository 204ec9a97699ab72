use crate::core::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    MalformedJsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    SchemaError { message: String },

    #[error("Invalid template: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Template,
    Configuration,
    Output,
}

/// Handled failures are `High`; faults in the input content itself are `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl IndexError {
    pub fn schema(message: impl Into<String>) -> Self {
        IndexError::SchemaError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IndexError::FileAccessError { .. } | IndexError::MalformedJsonError { .. } => {
                ErrorCategory::Input
            }
            IndexError::SchemaError { .. } => ErrorCategory::Schema,
            IndexError::TemplateError(_) => ErrorCategory::Template,
            IndexError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IndexError::OutputError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IndexError::MalformedJsonError { .. } | IndexError::TemplateError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    /// Whether the usage line should follow the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            IndexError::SchemaError { .. } | IndexError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IndexError::SchemaError { message } => message.clone(),
            _ => {
                let mut message = self.to_string();
                let mut source = std::error::Error::source(self);
                while let Some(cause) = source {
                    let text = cause.to_string();
                    if !message.contains(&text) {
                        message.push_str("\n  caused by: ");
                        message.push_str(&text);
                    }
                    source = cause.source();
                }
                message
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
