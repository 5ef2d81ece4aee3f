//! Mathematical utilities: trend-line smoothing.
//!
//! Two distinct smoothers live here on purpose. Their windowing and
//! edge-handling semantics differ (centered/truncated vs. trailing with a
//! shorter output), so they stay separate named functions rather than one
//! configurable routine.

pub mod sma;
pub mod smooth;

pub use sma::*;
pub use smooth::*;
