//! Unified error types for sfdx-scaffold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Project name ---

    /// No project name was supplied, or it was the empty string.
    #[error("a project name is required (--projectname)")]
    MissingProjectname,

    /// The first character of the project name is not an ASCII letter.
    #[error("project name '{0}' must start with a letter")]
    NameMustStartWithLetter(String),

    /// The project name contains characters outside `[A-Za-z0-9_]`.
    #[error("project name '{0}' may only contain letters, digits and underscores")]
    AlphaNumericName(String),

    #[error("project name '{0}' cannot end with an underscore")]
    EndWithUnderscore(String),

    #[error("project name '{0}' cannot contain two consecutive underscores")]
    DoubleUnderscore(String),

    // --- Template ---

    /// The template identifier is not one of: `standard`, `empty`, `analytics`.
    #[error("unknown template: {0} (supported: standard, empty, analytics)")]
    InvalidTemplate(String),

    /// The API version stamp is not of the form `NN.0`.
    #[error("invalid API version: {0} (expected a value such as 58.0)")]
    InvalidApiVersion(String),

    /// `--defaultpackagedir` is not a single relative directory name.
    #[error("invalid package directory: '{0}' (expected a single directory name)")]
    InvalidPackageDir(String),

    /// Handlebars rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Project ---

    /// Refused to generate into a directory that already exists.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// An embedded JSON asset could not be parsed or serialized.
    #[error("failed to process JSON for {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A filesystem I/O error, with the path that caused it.
    #[error("filesystem error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Stable error code reported to the user, independent of the message wording.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingProjectname => "MissingProjectname",
            Self::NameMustStartWithLetter(_) => "NameMustStartWithLetterError",
            Self::AlphaNumericName(_) => "AlphaNumericNameError",
            Self::EndWithUnderscore(_) => "EndWithUnderscoreError",
            Self::DoubleUnderscore(_) => "DoubleUnderscoreError",
            Self::InvalidTemplate(_) => "InvalidTemplate",
            Self::InvalidApiVersion(_) => "InvalidApiVersion",
            Self::InvalidPackageDir(_) => "InvalidPackageDir",
            Self::TemplateRender(_) => "TemplateRenderError",
            Self::DestinationExists(_) => "DestinationExistsError",
            Self::Json { .. } => "JsonError",
            Self::Io { .. } => "FilesystemError",
        }
    }

    /// True for the validation failures that are reported before any filesystem access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingProjectname
                | Self::NameMustStartWithLetter(_)
                | Self::AlphaNumericName(_)
                | Self::EndWithUnderscore(_)
                | Self::DoubleUnderscore(_)
                | Self::InvalidTemplate(_)
                | Self::InvalidApiVersion(_)
                | Self::InvalidPackageDir(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ScaffoldError::MissingProjectname.kind(), "MissingProjectname");
        assert_eq!(
            ScaffoldError::AlphaNumericName("a-b".into()).kind(),
            "AlphaNumericNameError"
        );
        assert_eq!(
            ScaffoldError::InvalidTemplate("foo".into()).kind(),
            "InvalidTemplate"
        );
        assert_eq!(
            ScaffoldError::DestinationExists(PathBuf::from("foo")).kind(),
            "DestinationExistsError"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = ScaffoldError::io(
            "foo/README.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("foo/README.md"));
        assert!(!err.is_validation());
    }
}
