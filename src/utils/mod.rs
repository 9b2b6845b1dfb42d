//! Utility functions shared across the application.
//!
//! - [`base62`] - bidirectional id/short-code codec

pub mod base62;
