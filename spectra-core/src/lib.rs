//! spectra-core - shared types and logic for SpectraFlow
//!
//! Holds everything both the server and the web frontend need: the search
//! item model, media types, access tokens, the HTTP API client, the
//! favourites store and the search session state machine.

pub mod access_token;
pub mod client;
pub mod date;
pub mod favourites;
pub mod hmac_utils;
pub mod media;
pub mod models;
pub mod session;

pub use access_token::{AccessClaims, TokenError, TokenSigner};
pub use client::{ClientError, SpectraClient};
pub use favourites::{Favourites, FavouritesStorage, MemoryStorage};
pub use media::MediaType;
pub use models::{FavouriteItem, SearchResultItem};
pub use session::{SearchRequest, SearchSession, SearchStatus, SearchValidation};
