//! Query resolution: turns a title or identifier into one movie record.
//!
//! A query in *direct* mode (IMDb identifier present) is a single lookup.
//! A query in *search* mode walks these stages, each strictly after the last:
//!
//! 1. strict title lookup in the requested language;
//! 2. broad search, best-match selection, then a detail lookup of the winner;
//! 3. when nothing was found and the language is not English, translate the
//!    title and repeat 1-2 once in English.
//!
//! If every stage misses the resolution fails with
//! [`Error::MovieNotFound`]. Nothing is cached or shared between calls.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use cinematch_match::{is_title_match, select_best};

use crate::error::{Error, Result};
use crate::events::{EventSink, ResolutionEvent};
use crate::format::ResolvedMovie;
use crate::metadata::{ApiResponse, MovieDetail, MovieSource};
use crate::translate::Translator;

/// Language the fallback search runs in.
pub const FALLBACK_LANGUAGE: &str = "en";

const NOT_FOUND: &str = "Movie not found";
const MISSING_API_KEY: &str =
    "OMDB API key is missing. Please set it in the environment variables.";

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A single resolution request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "imdbId")]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Which kind of lookup a [`Query`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode<'a> {
    /// Fetch by IMDb identifier; title and year are ignored.
    Direct { imdb_id: &'a str },
    /// Search by title.
    Search { title: &'a str },
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Query {
    /// Search-mode query for `title`.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Direct-mode query for `imdb_id`.
    pub fn imdb_id(imdb_id: impl Into<String>) -> Self {
        Self {
            imdb_id: Some(imdb_id.into()),
            ..Self::default()
        }
    }

    /// Constrain the query to a release year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Request results in `language`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The lookup mode. An identifier takes precedence over a title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] when neither is present.
    pub fn mode(&self) -> Result<LookupMode<'_>> {
        if let Some(imdb_id) = non_blank(&self.imdb_id) {
            return Ok(LookupMode::Direct { imdb_id });
        }
        non_blank(&self.title)
            .map(|title| LookupMode::Search { title })
            .ok_or_else(|| Error::InvalidQuery("either a title or an IMDb ID is required".into()))
    }

    /// The requested year, ignoring blanks.
    pub fn year(&self) -> Option<&str> {
        non_blank(&self.year)
    }

    /// The requested language, ignoring blanks.
    pub fn language(&self) -> Option<&str> {
        non_blank(&self.language)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = non_blank(&self.title)
            .or(non_blank(&self.imdb_id))
            .unwrap_or("<empty>");
        write!(f, "{subject}")?;
        if let Some(year) = self.year() {
            write!(f, " ({year})")?;
        }
        write!(f, " in {}", self.language().unwrap_or("default language"))
    }
}

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// Tool-style outcome: serialized record or a single failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// JSON-serialized [`ResolvedMovie`].
    Movie(String),
    /// User-visible failure message.
    Failed(String),
}

impl Reply {
    /// Whether the resolution succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Movie(_))
    }

    /// The reply text, whichever variant it is.
    pub fn as_str(&self) -> &str {
        match self {
            Reply::Movie(text) | Reply::Failed(text) => text,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Settings that do not come from a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Identifies this tool in diagnostic events, e.g. `"cinematch-v0.1.0"`.
    pub caller: String,
    /// Language used when a query names none.
    pub default_language: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            caller: format!("{}-v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            default_language: FALLBACK_LANGUAGE.to_string(),
        }
    }
}

/// Resolves queries against a [`MovieSource`].
///
/// Holds no per-query state, so one resolver can serve many concurrent
/// resolutions behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = Resolver::new(source, Arc::new(PhraseBook::builtin()), Arc::new(TracingSink));
/// let movie = resolver.resolve(&Query::title("Inception").with_year("2010")).await?;
/// ```
pub struct Resolver {
    source: Arc<dyn MovieSource>,
    translator: Arc<dyn Translator>,
    events: Arc<dyn EventSink>,
    settings: ResolverSettings,
}

impl Resolver {
    /// Create a resolver with default settings.
    pub fn new(
        source: Arc<dyn MovieSource>,
        translator: Arc<dyn Translator>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self::with_settings(source, translator, events, ResolverSettings::default())
    }

    /// Create a resolver with explicit settings.
    pub fn with_settings(
        source: Arc<dyn MovieSource>,
        translator: Arc<dyn Translator>,
        events: Arc<dyn EventSink>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            source,
            translator,
            events,
            settings,
        }
    }

    /// Resolve `query` into a single formatted record.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] when the source has no credentials.
    /// - [`Error::InvalidQuery`] when the query has neither title nor identifier.
    /// - [`Error::MovieNotFound`] when every strategy misses.
    /// - [`Error::Transport`] on network or decode failure.
    pub async fn resolve(&self, query: &Query) -> Result<ResolvedMovie> {
        if !self.source.is_available() {
            return Err(Error::Configuration(MISSING_API_KEY.into()));
        }

        let language = query.language().unwrap_or(&self.settings.default_language);
        self.events.emit(ResolutionEvent::Started {
            caller: self.settings.caller.clone(),
            title: query.title.clone(),
            imdb_id: query.imdb_id.clone(),
            year: query.year.clone(),
            language: language.to_string(),
        });

        let detail = match query.mode()? {
            LookupMode::Direct { imdb_id } => {
                match self.source.lookup_id(imdb_id, language).await? {
                    ApiResponse::Found(detail) => detail,
                    ApiResponse::Missing { error } => {
                        return Err(Error::not_found(error.unwrap_or_else(|| NOT_FOUND.into())))
                    }
                }
            }
            LookupMode::Search { title } => {
                let detail = self.search_and_fetch(title, query.year(), language).await?;
                if let Some(year) = query.year() {
                    self.check_match(&detail, title, year);
                }
                detail
            }
        };

        Ok(ResolvedMovie::from(detail))
    }

    /// Resolve `query`, catching every failure into a single message.
    ///
    /// Failures are reported once through the event sink and the log.
    pub async fn respond(&self, query: &Query) -> Reply {
        let result = self.resolve(query).await.and_then(|movie| {
            serde_json::to_string(&movie)
                .map_err(|e| Error::transport("Failed to serialize movie record", e))
        });

        match result {
            Ok(json) => Reply::Movie(json),
            Err(err) => {
                self.events.emit(ResolutionEvent::Failed {
                    caller: self.settings.caller.clone(),
                    reason: err.to_string(),
                });
                error!(
                    caller = %self.settings.caller,
                    kind = err.kind(),
                    error = %err,
                    "Resolution failed"
                );
                Reply::Failed(format!("The tool failed to run. Error: {err}"))
            }
        }
    }

    /// Search in the requested language, then once more in English after
    /// translation.
    async fn search_and_fetch(
        &self,
        title: &str,
        year: Option<&str>,
        language: &str,
    ) -> Result<MovieDetail> {
        if let Some(detail) = self.search_movie(title, year, language).await? {
            return Ok(detail);
        }

        if !language.eq_ignore_ascii_case(FALLBACK_LANGUAGE) {
            let english = self.translator.translate(title).await;
            if english != title {
                self.events.emit(ResolutionEvent::FallbackToEnglish {
                    title: english.clone(),
                });
                if let Some(detail) = self.search_movie(&english, year, FALLBACK_LANGUAGE).await? {
                    return Ok(detail);
                }
            }
        }

        Err(Error::not_found(NOT_FOUND))
    }

    /// Strict lookup first, then broad search with best-match selection.
    /// `Ok(None)` means both stages missed.
    async fn search_movie(
        &self,
        title: &str,
        year: Option<&str>,
        language: &str,
    ) -> Result<Option<MovieDetail>> {
        if let ApiResponse::Found(detail) = self.source.lookup_title(title, year, language).await? {
            debug!(title, language, "Exact title lookup hit");
            return Ok(Some(detail));
        }

        let candidates = match self.source.search(title, year).await? {
            ApiResponse::Found(page) if !page.results.is_empty() => page.results,
            _ => {
                debug!(title, "Broad search returned nothing");
                return Ok(None);
            }
        };

        let best = select_best(&candidates, title, year)?;
        info!(
            title,
            candidates = candidates.len(),
            chosen = %best.title,
            imdb_id = %best.imdb_id,
            "Selected best match from broad search"
        );

        Ok(self.source.lookup_id(&best.imdb_id, language).await?.found())
    }

    /// Emit a warning event when the record does not match what was asked for.
    fn check_match(&self, detail: &MovieDetail, title: &str, year: &str) {
        let returned_title = detail.title.as_deref().unwrap_or_default();
        let returned_year = detail.year.as_deref().unwrap_or_default();

        if !is_title_match(returned_title, title) || returned_year != year {
            self.events.emit(ResolutionEvent::TitleMismatch {
                requested_title: title.to_string(),
                requested_year: year.to_string(),
                returned_title: returned_title.to_string(),
                returned_year: returned_year.to_string(),
            });
        }
    }
}
