//! Error types for the adaptation layer
//!
//! Every fallible operation returns [`LumenResult`]. Errors fall into two
//! families:
//!
//! - **Configuration errors** are fatal to setup: an unsupported
//!   compatibility version, or an attempt to change a write-protected
//!   configuration. No half-built wrapper is ever returned.
//! - **Usage errors** are raised at the offending call and leave the
//!   adapter or iterator state untouched.
//!
//! Lookups that find nothing (a missing map key, an out-of-range index) are
//! not errors; they return `None`.

use thiserror::Error;

/// Result type alias for adaptation operations
pub type LumenResult<T> = std::result::Result<T, LumenError>;

/// Error types for the adaptation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LumenError {
    /// Requested compatibility version is outside the supported range
    #[error("Compatibility version {version} is out of range: {reason}")]
    VersionOutOfRange {
        /// The version as requested
        version: String,
        /// Why it was rejected
        reason: String,
    },

    /// A configuration setting was changed after write protection
    #[error("Configuration is write-protected; cannot change {setting}")]
    WriteProtected {
        /// Name of the setting
        setting: &'static str,
    },

    /// Malformed configuration input (file, version string, etc.)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `next()` was called on an exhausted iterator
    #[error("The collection has no more elements")]
    IteratorExhausted,

    /// The native collection changed structurally while being iterated
    #[error("The {collection} was modified while it was being iterated")]
    ConcurrentModification {
        /// Shape of the native collection
        collection: &'static str,
    },

    /// A lookup probe cannot be compared with the native collection's elements
    #[error("Cannot look up a value of native type {offending} in a {collection} holding {expected} values")]
    IncomparableProbe {
        /// Native type of the probe
        offending: &'static str,
        /// Native type of the elements it was compared with
        expected: &'static str,
        /// Shape of the native collection
        collection: &'static str,
    },

    /// No native value satisfies the requested type hint
    #[error("Cannot unwrap {model} to {hint}")]
    UnwrapFailed {
        /// Description of the model being unwrapped
        model: String,
        /// The requested hint
        hint: String,
    },

    /// The native value has no model representation
    #[error("Unsupported native type: {0}")]
    UnsupportedType(String),

    /// Mutation of a frozen native container
    #[error("Cannot modify a frozen {0}")]
    ImmutableContainer(&'static str),

    /// Value stored into a primitive array does not match its element kind
    #[error("Cannot store a {actual} value in an array of {expected}")]
    ElementKindMismatch {
        /// Element kind of the array
        expected: &'static str,
        /// Native type of the rejected value
        actual: &'static str,
    },

    /// Native-side positional write outside of the container's bounds
    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Container length
        len: usize,
    },
}

impl LumenError {
    /// Create a version-out-of-range error
    pub fn version_out_of_range(version: impl ToString, reason: impl Into<String>) -> Self {
        LumenError::VersionOutOfRange {
            version: version.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LumenError::InvalidConfig(message.into())
    }

    /// Create an unwrap failure
    pub fn unwrap_failed(model: impl Into<String>, hint: impl ToString) -> Self {
        LumenError::UnwrapFailed {
            model: model.into(),
            hint: hint.to_string(),
        }
    }

    /// True for errors raised while setting up a configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LumenError::VersionOutOfRange { .. }
                | LumenError::WriteProtected { .. }
                | LumenError::InvalidConfig(_)
        )
    }

    /// True for errors raised by a single operation on a model or native value
    pub fn is_usage_error(&self) -> bool {
        !self.is_configuration_error()
    }
}
