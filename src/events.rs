//! Diagnostic events emitted during resolution.
//!
//! The resolver reports what it is doing through an [`EventSink`]. Events are
//! fire-and-forget: a sink can never influence the outcome of a resolution.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ResolutionEvent
// ---------------------------------------------------------------------------

/// Something noteworthy that happened while resolving one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolutionEvent {
    /// A resolution began.
    Started {
        caller: String,
        title: Option<String>,
        imdb_id: Option<String>,
        year: Option<String>,
        language: String,
    },
    /// The original-language search found nothing; retrying in English.
    FallbackToEnglish {
        title: String,
    },
    /// The returned record does not match the requested title and year.
    TitleMismatch {
        requested_title: String,
        requested_year: String,
        returned_title: String,
        returned_year: String,
    },
    /// The resolution failed.
    Failed {
        caller: String,
        reason: String,
    },
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("none")
}

impl fmt::Display for ResolutionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionEvent::Started {
                caller,
                title,
                imdb_id,
                year,
                language,
            } => write!(
                f,
                "{caller} called with title: {}, imdbId: {}, year: {}, language: {language}",
                or_none(title),
                or_none(imdb_id),
                or_none(year),
            ),
            ResolutionEvent::FallbackToEnglish { title } => {
                write!(f, "Original title not found. Trying with English title: {title}")
            }
            ResolutionEvent::TitleMismatch {
                requested_title,
                requested_year,
                returned_title,
                returned_year,
            } => write!(
                f,
                "Warning: The returned movie ({returned_title}, {returned_year}) does not exactly \
                 match the requested title and year ({requested_title}, {requested_year})."
            ),
            ResolutionEvent::Failed { caller, reason } => {
                write!(f, "{caller} failed. Reason: {reason}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Receiver for [`ResolutionEvent`]s.
pub trait EventSink: Send + Sync {
    /// Deliver one event. Must not block for long or panic.
    fn emit(&self, event: ResolutionEvent);
}

/// Sink that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ResolutionEvent) {
        match &event {
            ResolutionEvent::TitleMismatch { .. } | ResolutionEvent::Failed { .. } => {
                tracing::warn!(target: "cinematch::introspect", "{}", event);
            }
            ResolutionEvent::Started { .. } | ResolutionEvent::FallbackToEnglish { .. } => {
                tracing::info!(target: "cinematch::introspect", "{}", event);
            }
        }
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in emission order.
    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.lock().clone()
    }

    /// Whether any recorded event satisfies `predicate`.
    pub fn any(&self, predicate: impl Fn(&ResolutionEvent) -> bool) -> bool {
        self.events.lock().iter().any(predicate)
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: ResolutionEvent) {
        self.events.lock().push(event);
    }
}
