// src/error.rs

//! Error type shared by every layer of the crate.
//!
//! Setup failures are terminal for the session: nothing here is retried
//! automatically. The embedding application decides whether to abort or
//! try again with a different build.

use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no native library mapping for platform '{os}'")]
    UnsupportedPlatform { os: String },

    #[error("failed to load native library '{library}': {reason}")]
    LibraryLoadFailed { library: String, reason: String },

    #[error("failed to bind symbol '{symbol}' from '{library}': {reason}")]
    SymbolBindFailed {
        symbol: String,
        library: String,
        reason: String,
    },

    #[error("native operation {operation} failed: {message}")]
    NativeOperationFailed {
        operation: &'static str,
        message: String,
    },

    #[error("invalid dimensions {width}x{height} at scale {scale_factor}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        scale_factor: f64,
    },

    #[error("frame buffer is {actual} bytes, expected {expected} (width * height * 4)")]
    FrameSizeMismatch { expected: usize, actual: usize },

    #[error("render session used from a thread other than the one that created it")]
    WrongThread,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn native(operation: &'static str, message: impl Into<String>) -> Self {
        Error::NativeOperationFailed {
            operation,
            message: message.into(),
        }
    }
}

/// Guarded single-writer/single-reader slot for a native diagnostic string.
///
/// Used where the native side reports an error through a callback or a
/// thread-global query that cannot return a value to the failing call.
/// Callers `clear` before an operation and `take` after it fails, so a
/// message never outlives the operation that produced it.
#[derive(Debug, Default)]
pub struct ErrorCell {
    message: Mutex<Option<String>>,
}

impl ErrorCell {
    pub const fn new() -> Self {
        Self {
            message: Mutex::new(None),
        }
    }

    pub fn set(&self, message: impl Into<String>) {
        if let Ok(mut slot) = self.message.lock() {
            *slot = Some(message.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.message.lock() {
            *slot = None;
        }
    }

    pub fn take(&self) -> Option<String> {
        self.message.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Takes the stored message or falls back to `default`.
    pub fn take_or(&self, default: &str) -> String {
        self.take().unwrap_or_else(|| default.to_string())
    }
}
