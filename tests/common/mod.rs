//! Shared test harness for resolver integration tests.
//!
//! Provides [`StubSource`], a scripted [`MovieSource`] that records every call,
//! [`CountingTranslator`], and [`TestHarness`] which wires both into a
//! [`Resolver`] together with a [`MemorySink`].

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use cinematch::metadata::{ApiResponse, MovieDetail, MovieSource, SearchPage};
use cinematch::{MemorySink, PhraseBook, Resolver, Result, Translator};
use cinematch_match::CandidateMovie;

/// One recorded call against [`StubSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LookupTitle {
        title: String,
        year: Option<String>,
        language: String,
    },
    Search {
        title: String,
        year: Option<String>,
    },
    LookupId {
        imdb_id: String,
        language: String,
    },
}

/// Scripted movie source. Anything not scripted answers `Response: "False"`.
#[derive(Default)]
pub struct StubSource {
    available: bool,
    exact: HashMap<(String, String), MovieDetail>,
    searches: HashMap<String, Vec<CandidateMovie>>,
    details: HashMap<String, MovieDetail>,
    calls: Mutex<Vec<Call>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Answer a strict lookup of `title` in `language`.
    pub fn with_exact(mut self, title: &str, language: &str, detail: MovieDetail) -> Self {
        self.exact
            .insert((title.to_string(), language.to_string()), detail);
        self
    }

    /// Answer a broad search for `title`.
    pub fn with_search(mut self, title: &str, results: Vec<CandidateMovie>) -> Self {
        self.searches.insert(title.to_string(), results);
        self
    }

    /// Answer an identifier lookup.
    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        let id = detail.imdb_id.clone().unwrap_or_default();
        self.details.insert(id, detail);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search { .. }))
            .count()
    }
}

#[async_trait]
impl MovieSource for StubSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn lookup_title(
        &self,
        title: &str,
        year: Option<&str>,
        language: &str,
    ) -> Result<ApiResponse<MovieDetail>> {
        self.calls.lock().push(Call::LookupTitle {
            title: title.to_string(),
            year: year.map(str::to_string),
            language: language.to_string(),
        });
        Ok(self
            .exact
            .get(&(title.to_string(), language.to_string()))
            .cloned()
            .map_or_else(|| ApiResponse::missing("Movie not found!"), ApiResponse::Found))
    }

    async fn search(&self, title: &str, year: Option<&str>) -> Result<ApiResponse<SearchPage>> {
        self.calls.lock().push(Call::Search {
            title: title.to_string(),
            year: year.map(str::to_string),
        });
        Ok(match self.searches.get(title) {
            Some(results) => ApiResponse::Found(SearchPage {
                total_results: Some(results.len().to_string()),
                results: results.clone(),
            }),
            None => ApiResponse::missing("Movie not found!"),
        })
    }

    async fn lookup_id(&self, imdb_id: &str, language: &str) -> Result<ApiResponse<MovieDetail>> {
        self.calls.lock().push(Call::LookupId {
            imdb_id: imdb_id.to_string(),
            language: language.to_string(),
        });
        Ok(self
            .details
            .get(imdb_id)
            .cloned()
            .map_or_else(|| ApiResponse::missing("Incorrect IMDb ID."), ApiResponse::Found))
    }
}

/// Phrase-book translator that counts invocations.
#[derive(Default)]
pub struct CountingTranslator {
    inner: PhraseBook,
    calls: AtomicUsize,
}

impl CountingTranslator {
    pub fn builtin() -> Self {
        Self {
            inner: PhraseBook::builtin(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(&self, title: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.translate(title).await
    }
}

/// Build a detail record with the fields the resolver looks at.
pub fn detail(title: &str, year: &str, imdb_id: &str) -> MovieDetail {
    MovieDetail {
        title: Some(title.to_string()),
        year: Some(year.to_string()),
        imdb_id: Some(imdb_id.to_string()),
        kind: Some("movie".to_string()),
        ..MovieDetail::default()
    }
}

/// Resolver wired to stubs, with handles kept for assertions.
pub struct TestHarness {
    pub resolver: Resolver,
    pub source: Arc<StubSource>,
    pub translator: Arc<CountingTranslator>,
    pub events: Arc<MemorySink>,
}

impl TestHarness {
    pub fn new(source: StubSource) -> Self {
        let source = Arc::new(source);
        let translator = Arc::new(CountingTranslator::builtin());
        let events = Arc::new(MemorySink::new());
        let resolver = Resolver::new(source.clone(), translator.clone(), events.clone());
        Self {
            resolver,
            source,
            translator,
            events,
        }
    }
}
