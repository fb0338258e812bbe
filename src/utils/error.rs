use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parsing error: {0}")]
    CatalogParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Blueprint '{id}' is malformed: {field} {reason}")]
    InvalidBlueprintError {
        id: String,
        field: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, IdeaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Catalog,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IdeaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IdeaError::IoError(_) => ErrorCategory::Io,
            IdeaError::CatalogParseError(_) | IdeaError::InvalidBlueprintError { .. } => {
                ErrorCategory::Catalog
            }
            IdeaError::SerializationError(_) => ErrorCategory::Output,
            IdeaError::ConfigValidationError { .. } | IdeaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IdeaError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            IdeaError::ConfigValidationError { .. }
            | IdeaError::CatalogParseError(_)
            | IdeaError::InvalidBlueprintError { .. }
            | IdeaError::SerializationError(_) => ErrorSeverity::High,
            IdeaError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IdeaError::IoError(_) => {
                "Check that the catalog file exists and is readable".to_string()
            }
            IdeaError::CatalogParseError(_) => {
                "Fix the TOML syntax or enumerated values in the catalog file".to_string()
            }
            IdeaError::SerializationError(_) => "Retry with --format text".to_string(),
            IdeaError::ConfigValidationError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            IdeaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Adjust '{}': {}", field, reason)
            }
            IdeaError::InvalidBlueprintError { id, field, .. } => {
                format!("Fill in '{}' for blueprint '{}' in the catalog", field, id)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Invalid options: {}", self),
            ErrorCategory::Catalog => format!("The idea catalog could not be loaded: {}", self),
            ErrorCategory::Output => format!("Could not render results: {}", self),
        }
    }

    pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        IdeaError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_blueprint(id: &str, field: &str, reason: impl Into<String>) -> Self {
        IdeaError::InvalidBlueprintError {
            id: id.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
