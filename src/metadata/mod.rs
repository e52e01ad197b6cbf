//! Movie metadata sources.
//!
//! # Module layout
//!
//! - [`provider`] -- [`MovieSource`] trait, response envelope and record types.
//! - [`providers`] -- Concrete source implementations (OMDb).

pub mod provider;
pub mod providers;

pub use provider::{ApiResponse, MovieDetail, MovieSource, Rating, SearchPage};
pub use providers::OmdbProvider;
