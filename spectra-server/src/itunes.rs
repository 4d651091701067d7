//! iTunes Search API client and record reshaping

use serde::Deserialize;
use spectra_core::date;
use spectra_core::models::{
    SearchResultItem, PLACEHOLDER_ARTWORK, UNKNOWN_ARTIST, UNKNOWN_DATE, UNKNOWN_TYPE, UNTITLED,
};
use tracing::debug;

pub const ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Result cap sent upstream and enforced on the way back.
pub const RESULT_LIMIT: usize = 25;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    results: Vec<ItunesRecord>,
}

/// The subset of an iTunes search record the proxy reads.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesRecord {
    pub track_id: Option<u64>,
    pub collection_id: Option<u64>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub collection_censored_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub artwork_url60: Option<String>,
    pub release_date: Option<String>,
    pub kind: Option<String>,
}

fn first_non_empty<'a, const N: usize>(candidates: [&'a Option<String>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}

impl ItunesRecord {
    /// Reshape into a search item. Records with neither a track nor a
    /// collection id have no identity and are skipped.
    pub fn into_item(self) -> Option<SearchResultItem> {
        let id = self
            .track_id
            .filter(|id| *id != 0)
            .or(self.collection_id.filter(|id| *id != 0))?;

        let title = first_non_empty([
            &self.track_name,
            &self.collection_name,
            &self.collection_censored_name,
            &self.artist_name,
        ])
        .unwrap_or(UNTITLED);

        let artist = first_non_empty([&self.artist_name]).unwrap_or(UNKNOWN_ARTIST);
        let artwork =
            first_non_empty([&self.artwork_url100, &self.artwork_url60]).unwrap_or(PLACEHOLDER_ARTWORK);

        let release_date = match first_non_empty([&self.release_date]) {
            Some(raw) => date::format_short(raw),
            None => UNKNOWN_DATE.to_string(),
        };

        let kind = first_non_empty([&self.kind]).unwrap_or(UNKNOWN_TYPE);

        Some(SearchResultItem {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            artwork: artwork.to_string(),
            release_date,
            kind: kind.to_string(),
        })
    }
}

/// Reshape upstream records, keeping upstream order and the result cap.
pub fn format_results(records: Vec<ItunesRecord>) -> Vec<SearchResultItem> {
    records
        .into_iter()
        .filter_map(ItunesRecord::into_item)
        .take(RESULT_LIMIT)
        .collect()
}

/// Client for the iTunes Search API.
#[derive(Clone, Debug)]
pub struct ItunesClient {
    search_url: String,
    http: reqwest::Client,
}

impl ItunesClient {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Run one search. `term` and `media` are forwarded untouched; absent
    /// values are left off the upstream query.
    pub async fn search(
        &self,
        term: Option<&str>,
        media: Option<&str>,
    ) -> Result<Vec<SearchResultItem>, UpstreamError> {
        let limit = RESULT_LIMIT.to_string();
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(3);
        if let Some(term) = term {
            params.push(("term", term));
        }
        if let Some(media) = media {
            params.push(("media", media));
        }
        params.push(("limit", limit.as_str()));

        let resp = self.http.get(&self.search_url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let envelope: SearchEnvelope = resp.json().await?;
        let received = envelope.results.len();
        let items = format_results(envelope.results);
        debug!("iTunes returned {received} records, {} usable", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn title_falls_back_to_artist_name() {
        let record = ItunesRecord {
            track_id: Some(1),
            artist_name: some("X"),
            ..Default::default()
        };

        let item = record.into_item().unwrap();
        assert_eq!(item.title, "X");
        assert_eq!(item.artist, "X");
    }

    #[test]
    fn title_preference_order() {
        let record = ItunesRecord {
            track_id: Some(1),
            collection_name: some("Discovery"),
            collection_censored_name: some("Discovery (Clean)"),
            artist_name: some("Daft Punk"),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().title, "Discovery");

        let record = ItunesRecord {
            track_id: Some(1),
            track_name: some(""),
            collection_censored_name: some("Discovery (Clean)"),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().title, "Discovery (Clean)");
    }

    #[test]
    fn all_defaults() {
        let record = ItunesRecord {
            collection_id: Some(7),
            ..Default::default()
        };

        let item = record.into_item().unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.title, UNTITLED);
        assert_eq!(item.artist, UNKNOWN_ARTIST);
        assert_eq!(item.artwork, PLACEHOLDER_ARTWORK);
        assert_eq!(item.release_date, UNKNOWN_DATE);
        assert_eq!(item.kind, UNKNOWN_TYPE);
    }

    #[test]
    fn id_prefers_track_id() {
        let record = ItunesRecord {
            track_id: Some(10),
            collection_id: Some(20),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().id, 10);

        let record = ItunesRecord {
            track_id: Some(0),
            collection_id: Some(20),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().id, 20);
    }

    #[test]
    fn record_without_id_is_skipped() {
        let record = ItunesRecord {
            artist_name: some("X"),
            ..Default::default()
        };
        assert!(record.into_item().is_none());
    }

    #[test]
    fn artwork_prefers_larger() {
        let record = ItunesRecord {
            track_id: Some(1),
            artwork_url100: some("https://a/100.jpg"),
            artwork_url60: some("https://a/60.jpg"),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().artwork, "https://a/100.jpg");

        let record = ItunesRecord {
            track_id: Some(1),
            artwork_url60: some("https://a/60.jpg"),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().artwork, "https://a/60.jpg");
    }

    #[test]
    fn release_date_is_shortened() {
        let record = ItunesRecord {
            track_id: Some(1),
            release_date: some("2001-03-12T08:00:00Z"),
            ..Default::default()
        };
        assert_eq!(record.into_item().unwrap().release_date, "3/12/2001");
    }

    #[test]
    fn parses_upstream_json() {
        let json = r#"{
            "resultCount": 2,
            "results": [
                {"wrapperType": "track", "kind": "song", "trackId": 697194953,
                 "collectionId": 697194737, "artistName": "Daft Punk",
                 "collectionName": "Random Access Memories",
                 "trackName": "Get Lucky (feat. Pharrell Williams & Nile Rodgers)",
                 "artworkUrl60": "https://is1.mzstatic.com/60x60bb.jpg",
                 "artworkUrl100": "https://is1.mzstatic.com/100x100bb.jpg",
                 "releaseDate": "2013-04-19T07:00:00Z"},
                {"wrapperType": "collection", "collectionId": 5,
                 "collectionCensoredName": "Clean Cut", "trackName": null}
            ]
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        let items = format_results(envelope.results);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 697194953);
        assert_eq!(items[0].kind, "song");
        assert_eq!(items[0].release_date, "4/19/2013");
        assert_eq!(items[1].title, "Clean Cut");
        assert_eq!(items[1].kind, UNKNOWN_TYPE);
    }

    #[test]
    fn results_are_capped() {
        let records = (1..=40)
            .map(|id| ItunesRecord {
                track_id: Some(id),
                ..Default::default()
            })
            .collect();

        let items = format_results(records);
        assert_eq!(items.len(), RESULT_LIMIT);
        assert_eq!(items.first().unwrap().id, 1);
        assert_eq!(items.last().unwrap().id, RESULT_LIMIT as u64);
    }
}
