//! Search session state machine
//!
//! Drives the search page independently of any UI toolkit:
//!
//! ```text
//! Idle --begin_search--> Loading --finish_search(Ok)--> Success
//!                                \-finish_search(Err)-> Error
//! ```
//!
//! From `Success` or `Error`, a search refused by validation returns to
//! `Idle`; an accepted one goes straight to `Loading`.
//!
//! Every accepted search gets a new generation number. Only the completion
//! carrying the latest generation is applied (last write wins), so a slow
//! response to an earlier search can never overwrite a newer one.

use std::fmt::Display;

use tracing::{debug, warn};

use crate::media::MediaType;
use crate::models::SearchResultItem;

pub const TOKEN_ERROR_MESSAGE: &str =
    "Failed to get authorization token. Please ensure the backend is running.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching search results. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Reasons a search is refused before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchValidation {
    #[error("Please enter a search term.")]
    EmptyTerm,
    #[error("Authorization token not available. Please refresh or try again.")]
    MissingToken,
}

/// An accepted search, to be sent by the caller and completed with
/// [`SearchSession::finish_search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub term: String,
    pub media: MediaType,
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSession {
    /// Text in the search box
    pub term: String,
    /// Selected media filter
    pub media: MediaType,
    /// Results of the last successful search
    pub results: Vec<SearchResultItem>,
    pub status: SearchStatus,
    /// User-visible error, if any
    pub error: Option<String>,
    token: Option<String>,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn set_media(&mut self, media: MediaType) {
        self.media = media;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Record the outcome of the token request made on page load.
    pub fn token_loaded<E: Display>(&mut self, result: Result<String, E>) {
        match result {
            Ok(token) if !token.is_empty() => {
                debug!("Authorization token obtained");
                self.token = Some(token);
            }
            Ok(_) => {
                warn!("Token endpoint returned an empty token");
                self.error = Some(TOKEN_ERROR_MESSAGE.to_string());
            }
            Err(e) => {
                warn!("Error generating token: {e}");
                self.error = Some(TOKEN_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Validate the current inputs and move to `Loading`.
    ///
    /// On a validation failure the error is shown and the session drops back
    /// to `Idle`, unless a search is still loading. Earlier results stay on
    /// screen.
    pub fn begin_search(&mut self) -> Result<SearchRequest, SearchValidation> {
        if let Err(reason) = self.validate() {
            self.error = Some(reason.to_string());
            if !self.is_loading() {
                self.status = SearchStatus::Idle;
            }
            return Err(reason);
        }

        let token = self.token.clone().ok_or(SearchValidation::MissingToken)?;

        self.generation += 1;
        self.status = SearchStatus::Loading;
        self.error = None;
        self.results.clear();

        Ok(SearchRequest {
            generation: self.generation,
            term: self.term.clone(),
            media: self.media,
            token,
        })
    }

    /// Apply a search outcome. Returns `false` if the search was superseded
    /// and the outcome was dropped.
    pub fn finish_search<E: Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<SearchResultItem>, E>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping superseded search {generation} (latest is {})",
                self.generation
            );
            return false;
        }

        match result {
            Ok(results) => {
                debug!("Search {generation} returned {} results", results.len());
                self.results = results;
                self.status = SearchStatus::Success;
            }
            Err(e) => {
                warn!("Error fetching search results: {e}");
                self.results.clear();
                self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
                self.status = SearchStatus::Error;
            }
        }
        true
    }

    fn validate(&self) -> Result<(), SearchValidation> {
        if self.term.is_empty() {
            return Err(SearchValidation::EmptyTerm);
        }
        if self.token.is_none() {
            return Err(SearchValidation::MissingToken);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> SearchResultItem {
        SearchResultItem {
            id,
            title: format!("Track {id}"),
            artist: "Daft Punk".to_string(),
            artwork: "https://example.com/a.jpg".to_string(),
            release_date: "1/1/2001".to_string(),
            kind: "song".to_string(),
        }
    }

    fn ready_session() -> SearchSession {
        let mut session = SearchSession::new();
        session.token_loaded::<String>(Ok("tok".to_string()));
        session.set_term("daft punk");
        session
    }

    #[test]
    fn empty_term_is_rejected_without_request() {
        let mut session = SearchSession::new();
        session.token_loaded::<String>(Ok("tok".to_string()));

        let err = session.begin_search().unwrap_err();
        assert_eq!(err, SearchValidation::EmptyTerm);
        assert_eq!(session.error.as_deref(), Some("Please enter a search term."));
        assert_eq!(session.status, SearchStatus::Idle);
    }

    #[test]
    fn missing_token_is_rejected() {
        let mut session = SearchSession::new();
        session.set_term("daft punk");

        let err = session.begin_search().unwrap_err();
        assert_eq!(err, SearchValidation::MissingToken);
        assert_eq!(
            session.error.as_deref(),
            Some("Authorization token not available. Please refresh or try again.")
        );
        assert_eq!(session.status, SearchStatus::Idle);
    }

    #[test]
    fn token_failure_sets_error() {
        let mut session = SearchSession::new();
        session.token_loaded(Err("connection refused"));

        assert!(!session.has_token());
        assert_eq!(session.error.as_deref(), Some(TOKEN_ERROR_MESSAGE));
    }

    #[test]
    fn begin_search_clears_previous_state() {
        let mut session = ready_session();
        session.results = vec![item(1)];
        session.error = Some("old".to_string());

        let request = session.begin_search().unwrap();

        assert_eq!(request.term, "daft punk");
        assert_eq!(request.media, MediaType::All);
        assert_eq!(request.token, "tok");
        assert!(session.is_loading());
        assert!(session.results.is_empty());
        assert!(session.error.is_none());
    }

    #[test]
    fn success_replaces_results() {
        let mut session = ready_session();
        session.set_media(MediaType::Music);
        let request = session.begin_search().unwrap();
        assert_eq!(request.media, MediaType::Music);

        assert!(session.finish_search::<String>(request.generation, Ok(vec![item(1), item(2)])));
        assert_eq!(session.status, SearchStatus::Success);
        assert_eq!(session.results.len(), 2);
    }

    #[test]
    fn failure_sets_error_and_clears_results() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();

        session.finish_search::<&str>(request.generation, Err("500"));
        assert_eq!(session.status, SearchStatus::Error);
        assert_eq!(session.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
        assert!(session.results.is_empty());
    }

    #[test]
    fn superseded_completion_is_dropped() {
        let mut session = ready_session();
        let first = session.begin_search().unwrap();
        let second = session.begin_search().unwrap();
        assert!(second.generation > first.generation);

        assert!(session.finish_search::<String>(second.generation, Ok(vec![item(2)])));
        let snapshot = session.clone();

        assert!(!session.finish_search::<String>(first.generation, Ok(vec![item(1)])));
        assert_eq!(session, snapshot);
    }

    #[test]
    fn validation_failure_keeps_previous_results() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();
        session.finish_search::<String>(request.generation, Ok(vec![item(1)]));

        session.set_term("");
        assert!(session.begin_search().is_err());
        assert_eq!(session.results, vec![item(1)]);
    }

    #[test]
    fn validation_failure_returns_to_idle() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();
        session.finish_search::<String>(request.generation, Ok(vec![item(1)]));
        assert_eq!(session.status, SearchStatus::Success);

        session.set_term("");
        assert_eq!(session.begin_search(), Err(SearchValidation::EmptyTerm));
        assert_eq!(session.status, SearchStatus::Idle);
        assert_eq!(session.error.as_deref(), Some("Please enter a search term."));
    }

    #[test]
    fn validation_failure_after_error_returns_to_idle() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();
        session.finish_search::<&str>(request.generation, Err("timeout"));

        session.set_term("");
        assert!(session.begin_search().is_err());
        assert_eq!(session.status, SearchStatus::Idle);
    }

    #[test]
    fn validation_failure_while_loading_keeps_loading() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();

        session.set_term("");
        assert!(session.begin_search().is_err());
        assert!(session.is_loading());

        assert!(session.finish_search::<String>(request.generation, Ok(vec![item(1)])));
        assert_eq!(session.status, SearchStatus::Success);
    }

    #[test]
    fn new_search_after_error_clears_error() {
        let mut session = ready_session();
        let request = session.begin_search().unwrap();
        session.finish_search::<&str>(request.generation, Err("timeout"));

        session.begin_search().unwrap();
        assert!(session.error.is_none());
        assert!(session.is_loading());
    }
}
