//! Sliding-window Gaussian Naive Bayes for drifting streams.
//!
//! [`WindowedGaussianNB`] is a binary classifier trained on a bounded FIFO
//! window of recent `(features, label)` pairs. In adaptive mode the window
//! capacity is steered by an internal [`AdaptiveWidthDetector`] fed with the
//! first feature of every example: calm stretches let the window grow one
//! slot per step up to a ceiling, a drift signal collapses it back to its
//! floor so the model forgets the stale concept quickly.
//!
//! Per-class Gaussian parameters are recomputed from scratch over the whole
//! window every step the window is full. The recomputation is cheap (the
//! window is small by construction) and keeps the statistics exactly in sync
//! with the current window contents across capacity changes.
//!
//! # Example
//!
//! ```
//! use deriva::classification::WindowedGaussianNB;
//!
//! let mut model = WindowedGaussianNB::new().with_window_size(4);
//! model.learn_one(&[1.0], 0).unwrap();
//! model.learn_one(&[1.1], 0).unwrap();
//! model.learn_one(&[5.0], 1).unwrap();
//! model.learn_one(&[5.2], 1).unwrap();
//!
//! assert_eq!(model.predict_one(&[1.05]).unwrap(), 0);
//! assert_eq!(model.predict_one(&[5.1]).unwrap(), 1);
//! ```

use crate::drift::AdaptiveWidthDetector;
use crate::error::{DerivaError, Result};
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Number of classes the classifier supports.
const N_CLASSES: usize = 2;
/// Window capacity floor (and the initial capacity in adaptive mode).
const MIN_WIN_LEN: usize = 10;
/// Window capacity ceiling in adaptive mode.
const MAX_WIN_LEN: usize = 75;

/// Per-class Gaussian parameters over the current full window.
#[derive(Debug, Clone)]
struct ClassStats {
    counts: [f64; N_CLASSES],
    mean: [Vec<f64>; N_CLASSES],
    variance: [Vec<f64>; N_CLASSES],
}

/// Gaussian Naive Bayes over a drift-adaptive sliding window.
///
/// Supports exactly two classes, labelled `0` and `1`. Constructed via
/// [`WindowedGaussianNB::new`] for adaptive mode or
/// [`WindowedGaussianNB::with_window_size`] for a fixed window.
#[derive(Debug, Clone)]
pub struct WindowedGaussianNB {
    window: VecDeque<(Vec<f64>, usize)>,
    capacity: usize,
    detector: Option<AdaptiveWidthDetector>,
    var_smoothing: f64,
    n_features: Option<usize>,
    stats: Option<ClassStats>,
}

impl WindowedGaussianNB {
    /// Create a classifier in adaptive mode.
    ///
    /// The window starts at its floor capacity and is resized by an internal
    /// drift detector with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: VecDeque::new(),
            capacity: MIN_WIN_LEN,
            detector: Some(AdaptiveWidthDetector::new()),
            var_smoothing: 1e-9,
            n_features: None,
            stats: None,
        }
    }

    /// Fix the window capacity, disabling adaptive mode and the internal
    /// drift detector.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        assert!(window_size >= 1, "window_size must be at least 1");
        self.capacity = window_size;
        self.detector = None;
        self
    }

    /// Set the smoothing constant added to every variance entry for
    /// numerical stability. Defaults to `1e-9`.
    #[must_use]
    pub fn with_var_smoothing(mut self, var_smoothing: f64) -> Self {
        self.var_smoothing = var_smoothing;
        self
    }

    /// Update the model with a single labelled example.
    ///
    /// In adaptive mode the first feature is fed to the drift detector and
    /// the window capacity is adjusted before the example is stored. Once
    /// the window is full, the per-class statistics are recomputed from its
    /// current contents.
    ///
    /// # Errors
    ///
    /// Returns an error on an empty feature vector, a dimensionality that
    /// does not match earlier calls, or a label outside `{0, 1}`.
    pub fn learn_one(&mut self, x: &[f64], y: usize) -> Result<()> {
        self.check_features(x)?;
        if y >= N_CLASSES {
            return Err(DerivaError::InvalidLabel {
                label: y,
                n_classes: N_CLASSES,
            });
        }
        if self.n_features.is_none() {
            self.n_features = Some(x.len());
        }

        if let Some(detector) = self.detector.as_mut() {
            // The drift signal is the first feature only; the detector never
            // sees the rest of the vector.
            detector.add_element(x[0]);
            if detector.detected_change() {
                while self.window.len() > MIN_WIN_LEN {
                    self.window.pop_front();
                }
                self.capacity = MIN_WIN_LEN;
                detector.reset();
            } else if self.window.len() >= self.capacity && self.capacity < MAX_WIN_LEN {
                self.capacity += 1;
            }
        }

        self.window.push_back((x.to_vec(), y));
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }

        if self.window.len() >= self.capacity {
            self.refit();
        }
        Ok(())
    }

    /// Predict the class label of a single example.
    ///
    /// # Errors
    ///
    /// Returns [`DerivaError::NotReady`] while the window has never reached
    /// capacity, or a dimension mismatch error for a wrong-shaped input.
    pub fn predict_one(&self, x: &[f64]) -> Result<usize> {
        self.check_features(x)?;
        let Some(stats) = self.stats.as_ref() else {
            return Err(DerivaError::NotReady {
                have: self.window.len(),
                need: self.capacity,
            });
        };

        let total: f64 = stats.counts.iter().sum();
        let mut best_class = 0;
        let mut best_posterior = f64::NEG_INFINITY;
        for c in 0..N_CLASSES {
            let prior = stats.counts[c] / total;
            let mut likelihood = 1.0;
            for (j, &xj) in x.iter().enumerate() {
                let diff = xj - stats.mean[c][j];
                let variance = stats.variance[c][j];
                likelihood *=
                    (-0.5 * (diff * diff / variance + (2.0 * PI * variance).ln())).exp();
            }
            let posterior = prior * likelihood;
            // Strict comparison keeps the lowest class index on ties.
            if posterior > best_posterior {
                best_posterior = posterior;
                best_class = c;
            }
        }
        Ok(best_class)
    }

    /// Recompute the per-class statistics from the current window contents.
    ///
    /// One-pass accumulation in window order. The variance update reads the
    /// freshly updated mean rather than Welford's cross term; downstream
    /// behavior is defined against exactly this accumulation.
    fn refit(&mut self) {
        let Some(n_features) = self.n_features else {
            return;
        };

        let mut counts = [0.0_f64; N_CLASSES];
        let mut mean = [vec![0.0; n_features], vec![0.0; n_features]];
        let mut variance = [vec![0.0; n_features], vec![0.0; n_features]];
        for (x, y) in &self.window {
            let c = *y;
            counts[c] += 1.0;
            for (j, &xj) in x.iter().enumerate() {
                mean[c][j] += (xj - mean[c][j]) / counts[c];
                let centered = xj - mean[c][j];
                variance[c][j] += (centered * centered - variance[c][j]) / counts[c];
            }
        }
        for class_variance in &mut variance {
            for v in class_variance.iter_mut() {
                *v += self.var_smoothing;
            }
        }
        self.stats = Some(ClassStats {
            counts,
            mean,
            variance,
        });
    }

    fn check_features(&self, x: &[f64]) -> Result<()> {
        if x.is_empty() {
            return Err(DerivaError::empty_input("feature vector"));
        }
        if let Some(n_features) = self.n_features {
            if x.len() != n_features {
                return Err(DerivaError::dimension_mismatch(
                    "features",
                    n_features,
                    x.len(),
                ));
            }
        }
        Ok(())
    }

    /// Number of examples currently held in the window.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Current window capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the window capacity is steered by the internal drift detector.
    #[must_use]
    pub fn is_adaptive(&self) -> bool {
        self.detector.is_some()
    }

    /// Whether the window has ever reached capacity, i.e. whether
    /// [`WindowedGaussianNB::predict_one`] can answer.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.stats.is_some()
    }

    /// The smoothing constant added to every variance entry.
    #[must_use]
    pub fn var_smoothing(&self) -> f64 {
        self.var_smoothing
    }

    /// The internal drift detector, if the classifier is adaptive.
    #[must_use]
    pub fn detector(&self) -> Option<&AdaptiveWidthDetector> {
        self.detector.as_ref()
    }
}

impl Default for WindowedGaussianNB {
    fn default() -> Self {
        Self::new()
    }
}
