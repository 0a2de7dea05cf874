//! Error types for configuration operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Option key was not given as `<section>.<option>`.
    #[error("the option '{option}' is in an incorrect format; expected <section>.<option>")]
    InvalidOptionFormat {
        /// Option key as supplied by the caller.
        option: String,
    },
    /// Option key is not present in the static option registry.
    #[error("the option '{option}' is not a valid option")]
    UnknownOption {
        /// Option key as supplied by the caller.
        option: String,
    },
    /// Option is registered but no value could be resolved for it.
    #[error("the option '{option}' is not defined in the config or as an environment variable")]
    OptionNotSet {
        /// Canonical `section.name` key of the unresolved option.
        option: String,
    },
    /// The configuration file does not exist.
    #[error("the config file '{}' does not exist", path.display())]
    ConfigMissing {
        /// Path that was probed for the configuration file.
        path: PathBuf,
    },
    /// The configuration file exists but could not be parsed.
    #[error("malformed config at line {line}: {reason}")]
    ParseFailed {
        /// One-based line number of the offending line.
        line: usize,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Reading or writing the configuration file failed.
    #[error("failed to access the config file '{}'", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// No home directory could be determined for the default config path.
    #[error("could not determine a home directory for the config file")]
    HomeDirUnavailable,
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
