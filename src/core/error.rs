use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Core error types for the holiday calendar
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Tray icon file could not be loaded or is not a usable image
    #[error("Tray icon unavailable at {}: {reason}", path.display())]
    IconResource { path: PathBuf, reason: String },

    /// Holiday table could not be built for the requested years
    #[error("Holiday data unavailable: {0}")]
    HolidayDataUnavailable(String),

    /// Date string sent by the date picker could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration and setup errors
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Calendar window creation or visibility change failed
    #[error("Window error: {0}")]
    WindowError(String),

    /// Launch-at-login entry could not be written or removed
    #[error("Auto-start error: {0}")]
    AutostartError(String),

    /// General system errors
    #[error("System error: {0}")]
    SystemError(String),

    /// Serialization/deserialization errors
    #[error("Data serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Errors surfaced by the GUI runtime
    #[error("Tauri error: {0}")]
    TauriError(#[from] tauri::Error),
}

impl CalendarError {
    /// Determines if this error should be shown to the user or handled silently
    pub fn should_notify_user(&self) -> bool {
        match self {
            CalendarError::IconResource { .. } => true,
            CalendarError::ConfigurationError(_) => true,
            CalendarError::AutostartError(_) => true,
            CalendarError::HolidayDataUnavailable(_) => true,
            CalendarError::InvalidDate(_) => false, // the picker never sends one in practice
            _ => false,
        }
    }

    /// Gets a short message fit for a notification or the calendar label
    pub fn user_message(&self) -> String {
        match self {
            CalendarError::IconResource { path, .. } => {
                format!("The tray icon at {} could not be loaded.", path.display())
            }
            CalendarError::HolidayDataUnavailable(_) => "Holiday data unavailable".to_string(),
            CalendarError::ConfigurationError(msg) => {
                format!("Configuration needs attention: {}", msg)
            }
            CalendarError::AutostartError(msg) => {
                format!("Auto-start could not be changed: {}", msg)
            }
            _ => "Calendar Widget encountered an issue but will continue working.".to_string(),
        }
    }

    /// Determines the severity level for logging and UI indication
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalendarError::InvalidDate(_) => ErrorSeverity::Low,
            CalendarError::HolidayDataUnavailable(_) => ErrorSeverity::Medium,
            CalendarError::AutostartError(_) => ErrorSeverity::Medium,
            CalendarError::ConfigurationError(_) => ErrorSeverity::Medium,
            CalendarError::IconResource { .. } => ErrorSeverity::High,
            CalendarError::TauriError(_) => ErrorSeverity::High,
            _ => ErrorSeverity::Low,
        }
    }
}

/// Sent over IPC as the display string.
impl Serialize for CalendarError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Error severity levels for appropriate handling and user communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Low severity - automatic recovery, minimal logging
    Low,
    /// Medium severity - log for debugging, may affect functionality
    Medium,
    /// High severity - requires user attention or action
    High,
}

/// Extension trait for Result types to add calendar-specific error handling
pub trait ResultExt<T> {
    /// Converts errors to CalendarError with context
    fn with_context(self, context: &str) -> Result<T>;

    /// Logs error and continues with default value (for non-critical operations)
    fn log_and_continue(self, default: T) -> T;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context(self, context: &str) -> Result<T> {
        self.map_err(|e| CalendarError::SystemError(format!("{}: {}", context, e)))
    }

    fn log_and_continue(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Non-critical operation failed: {}", e);
                default
            }
        }
    }
}
