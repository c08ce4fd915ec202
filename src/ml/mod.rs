//! Machine learning components.
//!
//! Inference-only building blocks for text category prediction.

pub mod category_classifier;
