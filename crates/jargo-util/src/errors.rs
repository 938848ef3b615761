use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Jargo operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JargoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Jargo.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Jargo.toml for syntax errors"))]
    Manifest { message: String },

    /// An operation was configured with a missing or invalid option.
    #[error("Invalid option: {message}")]
    InvalidOption { message: String },

    /// Network request failed before any HTTP status was received.
    #[error("Network error: {message}")]
    Network { message: String },

    /// An upload failed from an underlying cause (I/O, connection loss).
    #[error("Upload to {url} failed: {message}")]
    Upload { url: String, message: String },

    /// An upload was answered with a non-success HTTP status.
    #[error("Upload to {url} failed with status {status}")]
    UploadStatus { url: String, status: u16 },

    /// A child process finished with a non-zero exit status.
    #[error("Process exited with code {code}")]
    ExitStatus { code: i32 },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Exit code reported when a run fails for a reason other than the child's
/// own status, such as an output processor rejecting captured text.
pub const EXIT_FAILURE: i32 = 1;

/// Convenience alias for `miette::Result<T>`.
pub type JargoResult<T> = miette::Result<T>;
