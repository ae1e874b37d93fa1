use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum PastelinkError {
    NotFound(String),
    AlreadyExists(String),
    InvalidQuery(String),
    AllocationExhausted(String),
    Validation(String),
    DateParse(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
}

impl PastelinkError {
    pub fn code(&self) -> &'static str {
        match self {
            PastelinkError::NotFound(_) => "E001",
            PastelinkError::AlreadyExists(_) => "E002",
            PastelinkError::InvalidQuery(_) => "E003",
            PastelinkError::AllocationExhausted(_) => "E004",
            PastelinkError::Validation(_) => "E005",
            PastelinkError::DateParse(_) => "E006",
            PastelinkError::DatabaseConfig(_) => "E007",
            PastelinkError::DatabaseConnection(_) => "E008",
            PastelinkError::DatabaseOperation(_) => "E009",
            PastelinkError::Serialization(_) => "E010",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            PastelinkError::NotFound(_) => "Resource Not Found",
            PastelinkError::AlreadyExists(_) => "Resource Already Exists",
            PastelinkError::InvalidQuery(_) => "Invalid Query",
            PastelinkError::AllocationExhausted(_) => "Identifier Allocation Exhausted",
            PastelinkError::Validation(_) => "Validation Error",
            PastelinkError::DateParse(_) => "Date Parse Error",
            PastelinkError::DatabaseConfig(_) => "Database Configuration Error",
            PastelinkError::DatabaseConnection(_) => "Database Connection Error",
            PastelinkError::DatabaseOperation(_) => "Database Operation Error",
            PastelinkError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PastelinkError::NotFound(msg)
            | PastelinkError::AlreadyExists(msg)
            | PastelinkError::InvalidQuery(msg)
            | PastelinkError::AllocationExhausted(msg)
            | PastelinkError::Validation(msg)
            | PastelinkError::DateParse(msg)
            | PastelinkError::DatabaseConfig(msg)
            | PastelinkError::DatabaseConnection(msg)
            | PastelinkError::DatabaseOperation(msg)
            | PastelinkError::Serialization(msg) => msg,
        }
    }

    /// HTTP status the API layer should answer with for this error.
    pub fn http_status(&self) -> StatusCode {
        match self {
            PastelinkError::NotFound(_) => StatusCode::NOT_FOUND,
            PastelinkError::AlreadyExists(_) => StatusCode::CONFLICT,
            PastelinkError::InvalidQuery(_)
            | PastelinkError::Validation(_)
            | PastelinkError::DateParse(_) => StatusCode::BAD_REQUEST,
            PastelinkError::AllocationExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            PastelinkError::DatabaseConfig(_)
            | PastelinkError::DatabaseConnection(_)
            | PastelinkError::DatabaseOperation(_)
            | PastelinkError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PastelinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PastelinkError {}

impl PastelinkError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        PastelinkError::NotFound(msg.into())
    }

    pub fn already_exists<T: Into<String>>(msg: T) -> Self {
        PastelinkError::AlreadyExists(msg.into())
    }

    pub fn invalid_query<T: Into<String>>(msg: T) -> Self {
        PastelinkError::InvalidQuery(msg.into())
    }

    pub fn allocation_exhausted<T: Into<String>>(msg: T) -> Self {
        PastelinkError::AllocationExhausted(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PastelinkError::Validation(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        PastelinkError::DateParse(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        PastelinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        PastelinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        PastelinkError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PastelinkError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for PastelinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        PastelinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PastelinkError {
    fn from(err: std::io::Error) -> Self {
        PastelinkError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PastelinkError {
    fn from(err: serde_json::Error) -> Self {
        PastelinkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PastelinkError {
    fn from(err: chrono::ParseError) -> Self {
        PastelinkError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PastelinkError>;
