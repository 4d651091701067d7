use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const PLACEHOLDER_ARTWORK: &str = "https://via.placeholder.com/100";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNKNOWN_TYPE: &str = "Unknown Type";

/// A catalog search hit, reshaped from the upstream record.
///
/// Every field is populated; missing upstream data falls back to the
/// constants above. Identity is `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub artwork: String,
    pub release_date: String,
    pub kind: String,
}

/// Favourites hold copies of search hits.
pub type FavouriteItem = SearchResultItem;

/// Body of `POST /generate-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of every API error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
