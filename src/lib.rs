//! Deriva: drift-adaptive online binary classification for data streams.
//!
//! Deriva classifies records arriving one at a time from a stream whose
//! statistical properties may change over time (concept drift). It keeps no
//! history beyond a bounded window of recent examples and reacts to
//! distributional change automatically: a variance-adaptive drift detector
//! steers the size of the training window, growing it while the stream is
//! calm and collapsing it when the underlying concept shifts.
//!
//! # Quick Start
//!
//! ```
//! use deriva::prelude::*;
//!
//! // Fixed four-example window over a one-feature stream.
//! let mut model = WindowedGaussianNB::new().with_window_size(4);
//! model.learn_one(&[1.0], 0).unwrap();
//! model.learn_one(&[1.1], 0).unwrap();
//! model.learn_one(&[5.0], 1).unwrap();
//! model.learn_one(&[5.2], 1).unwrap();
//!
//! assert_eq!(model.predict_one(&[1.05]).unwrap(), 0);
//! assert_eq!(model.predict_one(&[5.1]).unwrap(), 1);
//! ```
//!
//! Constructing the classifier without a window size enables adaptive mode,
//! where the window capacity follows the drift detector's verdict on the
//! first feature of every example.
//!
//! # Modules
//!
//! - [`drift`]: adaptive-width drift detection over a scalar signal
//! - [`classification`]: the windowed Gaussian Naive Bayes classifier
//! - [`error`]: error types and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod classification;
pub mod drift;
pub mod error;
pub mod prelude;
