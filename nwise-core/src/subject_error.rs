// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::NwiseError;

/// Errors specific to subject operations (lifecycle and broadcasting).
///
/// These are distinct from stream errors: they are returned to the code
/// pushing into a [`Subject`](crate::Subject), never emitted downstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items or subscribers.
    #[error("Subject is closed")]
    Closed,
}

impl From<SubjectError> for NwiseError {
    fn from(error: SubjectError) -> Self {
        NwiseError::stream_error(error.to_string())
    }
}
