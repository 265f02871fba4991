//! Error types for string bundle operations

use thiserror::Error;

/// Errors that can occur while resolving bundles or rendering templates
#[derive(Error, Debug)]
pub enum L10nError {
    /// Neither the requested locale nor the fallback locale is registered
    #[error(
        "No bundle for locale '{requested}' and no fallback bundle '{fallback}' registered"
    )]
    NoDefaultLocale {
        /// Locale the lookup asked for
        requested: String,
        /// Fallback locale that was also missing
        fallback: String,
    },

    /// A template placeholder had no value in the supplied arguments
    #[error("Missing value for placeholder '{name}'")]
    MissingPlaceholder {
        /// Placeholder name without a value
        name: String,
    },

    /// Fragment and placeholder counts do not line up
    #[error(
        "Invalid template: expected {} fragments for {placeholders} placeholders, got {fragments}",
        .placeholders + 1
    )]
    InvalidTemplate {
        /// Number of literal fragments supplied
        fragments: usize,
        /// Number of placeholder names supplied
        placeholders: usize,
    },

    /// A brace-syntax template could not be parsed
    #[error("Template syntax error at byte {position}: {reason}")]
    TemplateSyntax {
        /// Byte offset of the offending brace
        position: usize,
        /// What was wrong
        reason: String,
    },

    /// No bundle file exists for the locale
    #[error("No bundle file for locale '{locale}' in {dir}")]
    BundleNotFound {
        /// Locale that was requested
        locale: String,
        /// Directory that was searched
        dir: String,
    },

    /// A bundle file could not be deserialized
    #[error("Failed to parse bundle {path}: {reason}")]
    BundleParse {
        /// File path, or `<inline>` for text parsed directly
        path: String,
        /// Deserializer message
        reason: String,
    },

    /// Configuration values were rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for string bundle operations
pub type L10nResult<T> = Result<T, L10nError>;
