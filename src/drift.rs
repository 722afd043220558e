//! Drift detection over scalar data streams.
//!
//! [`AdaptiveWidthDetector`] watches a single scalar signal through a bounded
//! buffer whose target width is recomputed every step from the live variance
//! of the buffered values. A new observation that deviates from the buffer
//! mean by more than `warning_level` (resp. `drift_level`) standard
//! deviations latches the warning (resp. drift) flag. Flags are one-shot:
//! once set they stay set until [`AdaptiveWidthDetector::reset`] is called by
//! the owner.
//!
//! # References
//!
//! - [Gama et al. 2004] "Learning with Drift Detection"
//! - [Bifet & Gavaldà 2007] "Learning from Time-Changing Data with Adaptive
//!   Windowing"
//!
//! # Example
//!
//! ```
//! use deriva::drift::AdaptiveWidthDetector;
//!
//! let mut detector = AdaptiveWidthDetector::new();
//! for i in 0..200 {
//!     detector.add_element(if i % 2 == 0 { 15.0 } else { -15.0 });
//! }
//! assert!(!detector.detected_change());
//!
//! detector.add_element(1000.0);
//! assert!(detector.detected_change());
//!
//! detector.reset();
//! assert!(!detector.detected_change());
//! ```

use crate::error::{DerivaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Configuration for [`AdaptiveWidthDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Minimum buffer width.
    pub min_width: usize,
    /// Maximum buffer width.
    pub max_width: usize,
    /// Deviation threshold for the warning flag, in standard deviations.
    pub warning_level: f64,
    /// Deviation threshold for the drift flag, in standard deviations.
    pub drift_level: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            min_width: 30,
            max_width: 100,
            warning_level: 2.0,
            drift_level: 3.0,
        }
    }
}

/// Variance-adaptive drift detector for a scalar stream.
///
/// Maintains a moving buffer of recent observations. The buffer is trimmed
/// against the *previous* step's target width before the width is recomputed
/// from the trimmed buffer, so capacity lags target by one step. Threshold
/// checks only run while the buffer is at least as long as the current
/// target width.
#[derive(Debug, Clone)]
pub struct AdaptiveWidthDetector {
    config: DriftConfig,
    buffer: VecDeque<f64>,
    buffer_sum: f64,
    buffer_mean: f64,
    buffer_variance: f64,
    width: usize,
    last_change: usize,
    detected_warning: bool,
    detected_drift: bool,
}

impl AdaptiveWidthDetector {
    /// Create a detector with the default configuration
    /// (`min_width=30`, `max_width=100`, `warning_level=2.0`, `drift_level=3.0`).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(DriftConfig::default())
    }

    /// Create a detector with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_width` is zero, `max_width < min_width`, or
    /// either level is not strictly positive.
    pub fn with_config(config: DriftConfig) -> Result<Self> {
        if config.min_width == 0 {
            return Err(DerivaError::InvalidHyperparameter {
                param: "min_width".to_string(),
                value: config.min_width.to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if config.max_width < config.min_width {
            return Err(DerivaError::InvalidHyperparameter {
                param: "max_width".to_string(),
                value: config.max_width.to_string(),
                constraint: ">= min_width".to_string(),
            });
        }
        if !(config.warning_level > 0.0) {
            return Err(DerivaError::InvalidHyperparameter {
                param: "warning_level".to_string(),
                value: config.warning_level.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        if !(config.drift_level > 0.0) {
            return Err(DerivaError::InvalidHyperparameter {
                param: "drift_level".to_string(),
                value: config.drift_level.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        Ok(Self::from_config(config))
    }

    fn from_config(config: DriftConfig) -> Self {
        Self {
            width: config.min_width,
            config,
            buffer: VecDeque::new(),
            buffer_sum: 0.0,
            buffer_mean: 0.0,
            buffer_variance: 0.0,
            last_change: 0,
            detected_warning: false,
            detected_drift: false,
        }
    }

    /// Ingest one scalar observation.
    ///
    /// Updates the buffer, its statistics, the target width, and evaluates
    /// the warning and drift thresholds against the freshly updated
    /// statistics. The two checks are independent; both flags may latch in
    /// the same call.
    pub fn add_element(&mut self, value: f64) {
        self.buffer.push_back(value);
        self.buffer_sum += value;
        // Trim against the previous step's width; capacity lags the
        // recomputed target by one step.
        if self.buffer.len() > self.width {
            if let Some(oldest) = self.buffer.pop_front() {
                self.buffer_sum -= oldest;
            }
        }

        let n = self.buffer.len();
        if n == 0 {
            self.buffer_mean = 0.0;
            self.buffer_variance = 0.0;
        } else {
            self.buffer_mean = self.buffer_sum / n as f64;
            self.buffer_variance = self
                .buffer
                .iter()
                .map(|x| (x - self.buffer_mean) * (x - self.buffer_mean))
                .sum::<f64>()
                / n as f64;
        }

        self.width = if n < self.config.min_width {
            self.config.min_width
        } else if n > self.config.max_width {
            self.config.max_width
        } else {
            let target = 2.0 * self.config.warning_level * self.config.warning_level
                * self.buffer_variance
                / (self.config.drift_level * self.config.drift_level);
            (target as usize).clamp(self.config.min_width, self.config.max_width)
        };

        let deviation = (value - self.buffer_mean).abs();
        let std_dev = self.buffer_variance.sqrt();
        if !self.detected_warning
            && n >= self.width
            && deviation > self.config.warning_level * std_dev
        {
            self.detected_warning = true;
            self.last_change = n;
        }
        if !self.detected_drift && n >= self.width && deviation > self.config.drift_level * std_dev
        {
            self.detected_drift = true;
            self.last_change = n;
        }
    }

    /// Whether the warning threshold has been crossed since the last reset.
    #[must_use]
    pub fn detected_warning_zone(&self) -> bool {
        self.detected_warning
    }

    /// Whether the drift threshold has been crossed since the last reset.
    #[must_use]
    pub fn detected_change(&self) -> bool {
        self.detected_drift
    }

    /// Restore the detector to its freshly constructed state.
    ///
    /// Must be called by the owner after consuming a drift signal; the
    /// one-shot flags never clear on their own.
    pub fn reset(&mut self) {
        self.width = self.config.min_width;
        self.buffer.clear();
        self.buffer_sum = 0.0;
        self.buffer_mean = 0.0;
        self.buffer_variance = 0.0;
        self.last_change = 0;
        self.detected_warning = false;
        self.detected_drift = false;
    }

    /// Current target buffer width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of observations currently buffered.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Mean of the buffered observations (zero when empty).
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.buffer_mean
    }

    /// Population variance of the buffered observations (zero when empty).
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.buffer_variance
    }

    /// Buffer length at the most recent flag transition (diagnostic).
    #[must_use]
    pub fn last_change(&self) -> usize {
        self.last_change
    }

    /// The detector's configuration.
    #[must_use]
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }
}

impl Default for AdaptiveWidthDetector {
    fn default() -> Self {
        Self::new()
    }
}
