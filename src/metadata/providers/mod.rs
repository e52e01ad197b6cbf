//! Concrete movie source implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`MovieSource`](super::MovieSource) trait.

pub mod omdb;

pub use omdb::OmdbProvider;
