//! Movie database records and the fetch status wrapper.
//!
//! The record types mirror the JSON served by the backend (`GET /api/movies/...`),
//! which in turn passes through the OMDb field names. Deserialization is lenient
//! about the quirks of that chain: `Response` may be a bool or a `"True"`/`"False"`
//! string, `imdbRating` may be a number, a numeric string or `"N/A"`, and string
//! fields the backend leaves `null` become empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Message recorded in state when a request failed on the transport channel.
pub const FAILED_TO_RETRIEVE: &str = "Failed to retrieve data from server";

/// One row of a search result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieListEntry {
    #[serde(rename = "imdbID", alias = "imdbId", default, deserialize_with = "null_as_default")]
    pub imdb_id: String,
    #[serde(alias = "title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(alias = "year", default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(rename = "Type", alias = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(alias = "poster", default, deserialize_with = "null_as_default")]
    pub poster: String,
}

/// Body of `GET /api/movies/search/{term}`.
///
/// `response == false` is a logical failure reported by the upstream API; the
/// accompanying `error` is meant for the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieListResult {
    #[serde(alias = "response", default, deserialize_with = "lenient_flag")]
    pub response: bool,
    #[serde(alias = "error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Search", alias = "entries", default, deserialize_with = "null_as_default")]
    pub entries: Vec<MovieListEntry>,
}

/// A single third-party rating, e.g. `Rotten Tomatoes: 71%`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    #[serde(alias = "source", default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(alias = "value", default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Body of `GET /api/movies/{imdbID}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetailsEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rated: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub released: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub runtime: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actors: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plot: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metascore: String,
    #[serde(rename = "imdbRating", default, deserialize_with = "lenient_rating")]
    pub imdb_rating: Option<f64>,
    #[serde(rename = "imdbVotes", default, deserialize_with = "null_as_default")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", alias = "imdbId", default, deserialize_with = "null_as_default")]
    pub imdb_id: String,
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "DVD", default, deserialize_with = "null_as_default")]
    pub dvd: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub box_office: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ratings: Vec<Rating>,
    #[serde(alias = "response", default, deserialize_with = "lenient_flag")]
    pub response: bool,
    #[serde(alias = "error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wire-level success flag shared by both backend bodies.
pub trait WireResponse {
    /// `true` if the upstream API reported success.
    fn response(&self) -> bool;

    /// Human-readable error from the upstream API, if any.
    fn error(&self) -> Option<&str>;
}

impl WireResponse for MovieListResult {
    fn response(&self) -> bool {
        self.response
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl WireResponse for MovieDetailsEntry {
    fn response(&self) -> bool {
        self.response
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Where a fetched value currently stands.
///
/// Separates "never fetched" from "the request failed", which a nullable field
/// cannot do. A logical failure (`response == false`) is still `Loaded`: the
/// backend answered, it just had nothing good to say.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// No response has been applied yet.
    Unloaded,
    /// The backend answered with a well-formed body.
    Loaded(T),
    /// The transport channel failed; holds the user-facing message.
    Failed(String),
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Self::Unloaded
    }
}

impl<T> Fetched<T> {
    /// Returns the loaded value, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Unloaded | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unloaded(&self) -> bool {
        matches!(self, Self::Unloaded)
    }

    /// The standard transport failure.
    #[must_use]
    pub fn transport_failure() -> Self {
        Self::Failed(FAILED_TO_RETRIEVE.to_string())
    }
}

impl<T: WireResponse> Fetched<T> {
    /// `true` only for a loaded body whose upstream call succeeded.
    #[must_use]
    pub fn response(&self) -> bool {
        self.loaded().is_some_and(WireResponse::response)
    }

    /// The message to show when [`response`](Self::response) is `false`.
    ///
    /// `None` for an unloaded value or a logical failure without a message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(value) => value.error(),
            Self::Failed(message) => Some(message),
        }
    }
}

impl Fetched<MovieListResult> {
    /// Result rows, empty unless a body is loaded.
    #[must_use]
    pub fn entries(&self) -> &[MovieListEntry] {
        self.loaded().map_or(&[], |result| result.entries.as_slice())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => flag,
        Some(Flag::Text(text)) => text.trim().eq_ignore_ascii_case("true"),
        None => false,
    })
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RatingValue {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RatingValue>::deserialize(deserializer)? {
        Some(RatingValue::Number(value)) => Some(value),
        Some(RatingValue::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
