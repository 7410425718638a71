// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Common types used throughout the nwise-stream crate.

use core::fmt::{self, Display};
use core::num::NonZeroUsize;
use nwise_core::{NwiseError, Result};

/// Number of values a sliding window holds.
///
/// Always at least 1. Building one from `0` fails, so a misconfigured
/// [`nwise`](crate::NwiseExt::nwise) is rejected before any value flows.
///
/// # Examples
///
/// ```
/// use nwise_stream::WindowSize;
///
/// let size = WindowSize::new(3).unwrap();
/// assert_eq!(size.get(), 3);
///
/// assert!(WindowSize::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Window of two, the shape `pairwise` works with.
    pub const PAIR: WindowSize = WindowSize(NonZeroUsize::MIN.saturating_add(1));

    /// Validates `size`.
    ///
    /// # Errors
    ///
    /// Returns [`NwiseError::InvalidWindowSize`] when `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(NwiseError::invalid_window_size(size))
    }

    /// The size as a plain `usize`.
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = NwiseError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> Self {
        size.get()
    }
}

impl Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
