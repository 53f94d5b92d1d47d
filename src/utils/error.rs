use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Catalog fetch failed: {message}")]
    CatalogFetch { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog validation failed: {message}")]
    CatalogValidation { message: String },

    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },

    #[error("Unknown menu item: {id}")]
    UnknownItem { id: u64 },

    #[error("Invalid intent '{input}': {reason}")]
    InvalidIntent { input: String, reason: String },

    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn catalog_fetch(message: impl Into<String>) -> Self {
        MenuError::CatalogFetch {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::CatalogFetch { .. } | MenuError::Http(_) => ErrorCategory::Network,
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MenuError::Serialization(_)
            | MenuError::CatalogValidation { .. }
            | MenuError::InvalidPrice { .. } => ErrorCategory::Data,
            MenuError::UnknownCategory { .. }
            | MenuError::UnknownItem { .. }
            | MenuError::InvalidIntent { .. } => ErrorCategory::Input,
            MenuError::Io(_) | MenuError::Csv(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::CatalogFetch { .. } | MenuError::Http(_) => {
                "Check the catalog URLs and your network connection, or use the embedded menu"
            }
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => {
                "Review the configuration file and command-line flags"
            }
            MenuError::CatalogValidation { .. } | MenuError::InvalidPrice { .. } => {
                "Fix the catalog data: item ids must be unique and prices non-negative"
            }
            MenuError::Serialization(_) => "Make sure the catalog is a valid JSON document",
            MenuError::UnknownCategory { .. } => "Run with --list to see the available categories",
            MenuError::UnknownItem { .. } => "Run with --list to see the item ids",
            MenuError::InvalidIntent { .. } => {
                "Use operations such as add:1, remove:1, category:mains, select:3, cart"
            }
            MenuError::Io(_) | MenuError::Csv(_) => "Check file permissions and available disk space",
        }
    }

    /// Message safe to show to a guest. Every catalog failure reads the same.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "We couldn't load the menu right now.".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Network => 2,
            ErrorCategory::System => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
