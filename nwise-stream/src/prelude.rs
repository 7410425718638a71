// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the operator extension traits.
//!
//! ```ignore
//! use nwise_stream::prelude::*;
//!
//! let windows = stream.nwise(3)?;
//! let pairs = other.pairwise();
//! ```

pub use crate::nwise::NwiseExt;
pub use crate::pairwise::PairwiseExt;
pub use crate::types::WindowSize;
