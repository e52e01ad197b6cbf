//! Cinematch - resolve a movie title to one canonical OMDb record
//!
//! This library crate exposes the resolver and its collaborators for the
//! binary and for integration testing.

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod metadata;
pub mod resolver;
pub mod translate;

pub use error::{Error, Result};
pub use events::{EventSink, MemorySink, ResolutionEvent, TracingSink};
pub use format::ResolvedMovie;
pub use metadata::{ApiResponse, MovieDetail, MovieSource, OmdbProvider, SearchPage};
pub use resolver::{LookupMode, Query, Reply, Resolver, ResolverSettings};
pub use translate::{Identity, PhraseBook, Translator};
