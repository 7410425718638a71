// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the nwise stream operators
//!
//! The operators never originate runtime errors of their own: failures
//! from upstream travel through them verbatim as [`StreamItem::Error`](crate::StreamItem).
//! The only error raised locally is a misconfigured window size, rejected
//! when the operator is constructed.
//!
//! # Examples
//!
//! ```
//! use nwise_core::{NwiseError, Result};
//!
//! fn read_sensor() -> Result<u32> {
//!     Err(NwiseError::stream_error("sensor offline"))
//! }
//! ```

/// Root error type for all nwise operations
#[derive(Debug, thiserror::Error)]
pub enum NwiseError {
    /// Stream processing encountered an error
    ///
    /// General failure reported by a source, or a user error that lost its
    /// concrete type while being cloned.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A window operator was configured with a size below one
    #[error("Invalid window size {size}: must be at least 1")]
    InvalidWindowSize {
        /// The rejected size
        size: usize,
    },
}

impl NwiseError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create an error for a rejected window size
    pub const fn invalid_window_size(size: usize) -> Self {
        Self::InvalidWindowSize { size }
    }
}

/// Specialized Result type for nwise operations
pub type Result<T> = std::result::Result<T, NwiseError>;

impl Clone for NwiseError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::InvalidWindowSize { size } => Self::InvalidWindowSize { size: *size },
        }
    }
}
