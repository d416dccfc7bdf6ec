//! Error types for the fallible edges of the crate.
//!
//! The simulation itself cannot fail once constructed. The only runtime
//! failures are reading and validating [`crate::settings::Settings`] at startup.

use std::fmt;
use std::path::PathBuf;

/// Failure while loading or validating settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::settings::Settings`].
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A value parsed but is outside its usable range.
    Invalid {
        /// Name of the offending field (for logging).
        field: &'static str,
        /// Human-readable description of the constraint.
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to read settings from '{}': {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "failed to parse settings in '{}': {}", path.display(), source)
            }
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            SettingsError::Invalid { .. } => None,
        }
    }
}
