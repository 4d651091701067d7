//! Media type filter for catalog searches

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media filter accepted by the iTunes Search API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    #[default]
    All,
    Movie,
    Podcast,
    Music,
    Audiobook,
    ShortFilm,
    TvShow,
    Software,
    Ebook,
}

impl MediaType {
    /// Every media type, in the order the search bar lists them.
    pub const ALL: [MediaType; 9] = [
        MediaType::All,
        MediaType::Movie,
        MediaType::Podcast,
        MediaType::Music,
        MediaType::Audiobook,
        MediaType::ShortFilm,
        MediaType::TvShow,
        MediaType::Software,
        MediaType::Ebook,
    ];

    /// Query-string value sent upstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::All => "all",
            MediaType::Movie => "movie",
            MediaType::Podcast => "podcast",
            MediaType::Music => "music",
            MediaType::Audiobook => "audiobook",
            MediaType::ShortFilm => "shortFilm",
            MediaType::TvShow => "tvShow",
            MediaType::Software => "software",
            MediaType::Ebook => "ebook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::All => "All",
            MediaType::Movie => "Movie",
            MediaType::Podcast => "Podcast",
            MediaType::Music => "Music",
            MediaType::Audiobook => "Audiobook",
            MediaType::ShortFilm => "Short Film",
            MediaType::TvShow => "TV Show",
            MediaType::Software => "Software",
            MediaType::Ebook => "eBook",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type: {0}")]
pub struct UnknownMediaType(pub String);

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMediaType(s.to_string()))
    }
}
