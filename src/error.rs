//! Error types for Gauntlet operations.
//!
//! This module defines [`GauntletError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Nothing in the tracker core is fatal to a running instance. A slot that
//! fails to parse degrades to the caller-supplied default; a value that fails
//! to encode aborts the write and leaves the last-known-good state in place.
//! Errors exist so callers can report the condition, not so they can unwind.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gauntlet operations.
#[derive(Debug, Error)]
pub enum GauntletError {
    /// Persisted slot content could not be parsed.
    ///
    /// Recovered transparently by `get` substituting the default; surfaced
    /// only as a diagnostic.
    #[error("Failed to parse slot '{key}': {message}")]
    SlotParse { key: String, message: String },

    /// A value could not be encoded into the slot's textual format.
    ///
    /// The write is aborted and the in-memory mirror is left untouched.
    #[error("Failed to encode slot '{key}': {message}")]
    SlotEncode { key: String, message: String },

    /// Catalog file not found at the expected location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gauntlet operations.
pub type Result<T> = std::result::Result<T, GauntletError>;
