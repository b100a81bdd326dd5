//! [`MovieFetcher`] backed by the Zellij host's `web_request`.

use std::collections::BTreeMap;

use url::Url;
use zellij_tile::prelude::{web_request, HttpVerb};

use super::{endpoints, protocol, FetchRequest, MovieFetcher};
use crate::domain::{MovieBrowserError, Result};

/// Sends requests to the backend through the host.
///
/// Requests are refused until [`grant_web_access`](Self::grant_web_access) is
/// called, since the host drops them silently without the permission.
#[derive(Debug, Clone)]
pub struct ZellijFetcher {
    base_url: Url,
    web_access: bool,
}

impl ZellijFetcher {
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            web_access: false,
        }
    }

    pub fn grant_web_access(&mut self) {
        self.web_access = true;
    }

    /// Resolves `request` to the URL it will be sent to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the base URL cannot
    /// carry the route.
    pub fn url_for(&self, request: &FetchRequest) -> Result<Url> {
        request.validate()?;
        match request {
            FetchRequest::Search { term } => endpoints::search_url(&self.base_url, term),
            FetchRequest::Details { imdb_id } => endpoints::details_url(&self.base_url, imdb_id),
        }
    }
}

impl MovieFetcher for ZellijFetcher {
    #[tracing::instrument(level = "debug", skip(self))]
    fn request(&mut self, request: FetchRequest) -> Result<()> {
        if !self.web_access {
            return Err(MovieBrowserError::Transport(
                "web access permission not granted".to_string(),
            ));
        }

        let url = self.url_for(&request)?;
        tracing::debug!(url = %url, "issuing web request");

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        web_request(
            url.as_str(),
            HttpVerb::Get,
            headers,
            Vec::new(),
            protocol::request_context(&request),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> ZellijFetcher {
        ZellijFetcher::new(endpoints::parse_base("http://localhost:5000").unwrap())
    }

    #[test]
    fn requests_are_refused_without_web_access() {
        let mut fetcher = fetcher();

        let err = fetcher.request(FetchRequest::search("batman")).unwrap_err();

        assert!(matches!(err, MovieBrowserError::Transport(_)));
    }

    #[test]
    fn url_for_validates_before_building() {
        let fetcher = fetcher();

        assert!(matches!(
            fetcher.url_for(&FetchRequest::search("bat")),
            Err(MovieBrowserError::InvalidRequest(_))
        ));
        assert!(matches!(
            fetcher.url_for(&FetchRequest::details("")),
            Err(MovieBrowserError::InvalidRequest(_))
        ));
        assert_eq!(
            fetcher.url_for(&FetchRequest::details("tt1")).unwrap().as_str(),
            "http://localhost:5000/api/movies/tt1"
        );
    }
}
