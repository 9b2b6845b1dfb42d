//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.

pub mod short_link;

pub use short_link::ShortLink;
