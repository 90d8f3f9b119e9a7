use log::debug;

use super::{MatchSet, NavigationCursor, Overlay};
use crate::services::{SearchHit, SearchRequest, SearchService};

/// What the UI should do after a search invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty term: drop highlights, empty the results panel, show the
    /// editable buffer.
    Cleared,
    /// Same term as last time: only the focus moved.
    Advanced { marker: usize },
    /// Same term, but there are no markers to cycle through.
    NothingToNavigate,
    /// New term with matches: fresh overlay and results, focus on `marker`.
    Updated {
        overlay: Overlay,
        results: Vec<SearchHit>,
        marker: usize,
    },
    /// New term, nothing found.
    NoMatches,
    /// The search service failed.
    Failed(String),
}

/// Per-search policy: term change versus repeat invocation, stale state
/// invalidation, and cursor bookkeeping. Holds no rendering state, so the
/// whole flow is testable without a terminal.
#[derive(Debug, Default)]
pub struct SearchSession {
    last_term: String,
    pub cursor: NavigationCursor,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_term(&self) -> &str {
        &self.last_term
    }

    /// One user-initiated search action over the current document.
    ///
    /// An unchanged term never re-invokes the service and never regenerates
    /// the overlay; it only advances the cursor. A changed term always
    /// searches the document as it is now. `last_term` is updated for every
    /// processed term regardless of outcome.
    pub fn submit(
        &mut self,
        term: &str,
        document: &str,
        service: &dyn SearchService,
    ) -> SearchOutcome {
        let term = term.trim();

        if term.is_empty() {
            debug!("empty search term, clearing session");
            self.cursor.reset();
            self.last_term.clear();
            return SearchOutcome::Cleared;
        }

        if term == self.last_term {
            debug!("term unchanged, advancing cursor");
            return match self.cursor.advance() {
                Some(marker) => SearchOutcome::Advanced { marker },
                None => SearchOutcome::NothingToNavigate,
            };
        }

        debug!("term changed to {:?}, searching", term);
        let request = SearchRequest {
            data: document.to_string(),
            search_term: term.to_string(),
        };
        let outcome = match service.search(&request) {
            Ok(response) if !response.results.is_empty() => {
                let matches = MatchSet::from_response(&response);
                let overlay = Overlay::build(document, &matches);
                if overlay.marker_count() == 0 {
                    // Matched values that never occur literally in the
                    // buffer leave nothing to highlight.
                    self.cursor.reset();
                    SearchOutcome::NoMatches
                } else {
                    // Reset before the first advance so a new search always
                    // starts at marker 0.
                    self.cursor = NavigationCursor::new(overlay.marker_count());
                    match self.cursor.advance() {
                        Some(marker) => SearchOutcome::Updated {
                            overlay,
                            results: response.results,
                            marker,
                        },
                        None => SearchOutcome::NoMatches,
                    }
                }
            }
            Ok(_) => {
                debug!("no matches for {:?}", term);
                self.cursor.reset();
                SearchOutcome::NoMatches
            }
            Err(e) => {
                self.cursor.reset();
                SearchOutcome::Failed(e.to_string())
            }
        };
        self.last_term = term.to_string();
        outcome
    }

    /// Forget the session entirely, e.g. when the buffer is cleared.
    pub fn reset(&mut self) {
        self.last_term.clear();
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{SearchMatch, SearchResponse};
    use anyhow::anyhow;
    use std::cell::Cell;

    /// Scripted service: returns a fixed response and counts invocations.
    struct Scripted {
        response: Option<SearchResponse>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn with_matches(values: &[&str]) -> Self {
            Self {
                response: Some(SearchResponse {
                    results: values
                        .iter()
                        .map(|v| SearchHit {
                            value: v.to_string(),
                            path: None,
                        })
                        .collect(),
                    matches: values
                        .iter()
                        .map(|v| SearchMatch {
                            value: v.to_string(),
                        })
                        .collect(),
                }),
                calls: Cell::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                response: Some(SearchResponse::default()),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: Cell::new(0),
            }
        }
    }

    impl SearchService for Scripted {
        fn search(&self, _request: &SearchRequest) -> anyhow::Result<SearchResponse> {
            self.calls.set(self.calls.get() + 1);
            match &self.response {
                Some(response) => Ok(response.clone()),
                None => Err(anyhow!("connection refused")),
            }
        }
    }

    #[test]
    fn test_repeat_search_cycles_without_recalling_service() {
        let service = Scripted::with_matches(&["aa"]);
        let mut session = SearchSession::new();

        match session.submit("aa", "aa bb aa", &service) {
            SearchOutcome::Updated { overlay, marker, .. } => {
                assert_eq!(overlay.marker_count(), 2);
                assert_eq!(marker, 0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            session.submit("aa", "aa bb aa", &service),
            SearchOutcome::Advanced { marker: 1 }
        );
        assert_eq!(
            session.submit("aa", "aa bb aa", &service),
            SearchOutcome::Advanced { marker: 0 }
        );
        assert_eq!(service.calls.get(), 1);
    }

    #[test]
    fn test_changed_term_searches_again_and_restarts_at_zero() {
        let service = Scripted::with_matches(&["b"]);
        let mut session = SearchSession::new();

        session.submit("b", "b b", &service);
        session.submit("b", "b b", &service);
        match session.submit("bee", "b b", &service) {
            SearchOutcome::Updated { marker, .. } => assert_eq!(marker, 0),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(service.calls.get(), 2);
        assert_eq!(session.last_term(), "bee");
    }

    #[test]
    fn test_empty_term_clears_session() {
        let service = Scripted::with_matches(&["x"]);
        let mut session = SearchSession::new();

        session.submit("x", "x", &service);
        assert_eq!(session.submit("  ", "x", &service), SearchOutcome::Cleared);
        assert_eq!(session.last_term(), "");
        assert_eq!(session.cursor.current(), None);
        assert_eq!(session.cursor.total(), 0);
    }

    #[test]
    fn test_no_matches_resets_cursor() {
        let service = Scripted::empty();
        let mut session = SearchSession::new();

        assert_eq!(session.submit("y", "x", &service), SearchOutcome::NoMatches);
        assert_eq!(session.cursor.total(), 0);
        assert_eq!(session.last_term(), "y");
    }

    #[test]
    fn test_service_failure_is_reported_and_term_remembered() {
        let service = Scripted::failing();
        let mut session = SearchSession::new();

        match session.submit("x", "x", &service) {
            SearchOutcome::Failed(msg) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        // Repeating the failed term is a navigation attempt, not a retry.
        assert_eq!(
            session.submit("x", "x", &service),
            SearchOutcome::NothingToNavigate
        );
        assert_eq!(service.calls.get(), 1);
    }

    #[test]
    fn test_reset_forgets_term_so_next_submit_searches_again() {
        let service = Scripted::with_matches(&["x"]);
        let mut session = SearchSession::new();

        session.submit("x", "x", &service);
        session.reset();
        assert_eq!(session.last_term(), "");
        assert_eq!(session.cursor.current(), None);
        assert_eq!(session.cursor.total(), 0);

        match session.submit("x", "x", &service) {
            SearchOutcome::Updated { marker, .. } => assert_eq!(marker, 0),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(service.calls.get(), 2);
    }

    #[test]
    fn test_matches_absent_from_buffer_count_as_no_matches() {
        let service = Scripted::with_matches(&["zzz"]);
        let mut session = SearchSession::new();

        assert_eq!(
            session.submit("zzz", "buffer without it", &service),
            SearchOutcome::NoMatches
        );
    }
}
