//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_short_link_repository;

pub use pg_short_link_repository::PgShortLinkRepository;
