//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use deriva::prelude::*;
//! ```

pub use crate::classification::WindowedGaussianNB;
pub use crate::drift::{AdaptiveWidthDetector, DriftConfig};
pub use crate::error::{DerivaError, Result};
