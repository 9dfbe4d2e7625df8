//! Preview rendering hook.
//!
//! # Responsibility
//! - Model the markup pipeline's normalization hook as named, composable stages.
//! - Keep markup parsing itself outside core.

pub mod pipeline;
