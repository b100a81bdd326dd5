//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the moviebrowser library and the Zellij
//! plugin system: it owns the [`AppState`](moviebrowser::AppState) and the
//! HTTP fetcher, translates host events into library events, and runs the
//! resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: Request `WebAccess`; nothing is fetched until granted
//! 3. **Initial route**: Once granted, open the configured `movie` or run the
//!    configured `search`
//! 4. **Update**: Keys and `WebRequestResult`s go through `handle_event`
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`map_key`] (focus dependent)
//! - `WebRequestResult` → `Event::FetchCompleted` when the context is ours
//! - `PermissionRequestResult(Granted)` → enable the fetcher

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use moviebrowser::api::{protocol, ZellijFetcher};
use moviebrowser::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

struct State {
    app: moviebrowser::AppState,
    fetcher: ZellijFetcher,
    initial_search: Option<String>,
    initial_movie: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: moviebrowser::initialize(&config),
            fetcher: ZellijFetcher::new(config.api_url),
            initial_search: None,
            initial_movie: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests web access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        moviebrowser::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_url = %config.api_url, "parsed configuration");
        self.app = moviebrowser::initialize(&config);
        self.fetcher = ZellijFetcher::new(config.api_url);
        self.initial_search = config.initial_search;
        self.initial_movie = config.initial_movie;

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key(&self.app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match protocol::decode_completion(status, &body, &context) {
                    Some(completion) => Event::FetchCompleted(completion),
                    None => {
                        tracing::debug!(status, "ignoring web request result with unknown context");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        moviebrowser::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, &mut self.fetcher, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Enables the fetcher and runs the configured initial route.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
                self.fetcher.grant_web_access();

                if let Some(imdb_id) = self.initial_movie.take() {
                    self.dispatch(&Event::OpenMovie(imdb_id))
                } else if let Some(term) = self.initial_search.take() {
                    self.dispatch(&Event::Search(term))
                } else {
                    false
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - searches will fail");
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
