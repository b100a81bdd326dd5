//! Side effects the plugin shim executes after an event is handled.
//!
//! Backend requests are not actions: operations hand them to the
//! [`MovieFetcher`](crate::api::MovieFetcher) directly. Actions cover host
//! calls that have nothing to do with state.

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` outside the search box.
    CloseFocus,
}
