//! Fragment-based routing between the uploader and the viewer.
//!
//! The route is a pure function of the text after `#`: split on `/`,
//! drop empty segments, and take `view/<id>` as the viewer. Everything
//! else is home. There is no history stack.

use std::fmt;

use tracing::debug;

/// The view selected by the current fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Upload widget and file list.
    Home,
    /// Single-file viewer.
    View {
        /// Raw id segment from the fragment.
        id: String,
    },
}

impl Route {
    /// Route for viewing `id`.
    pub fn view(id: impl fmt::Display) -> Self {
        Self::View { id: id.to_string() }
    }

    /// Parse a fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let segments: Vec<&str> = fragment.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["view", id, ..] => Self::View {
                id: (*id).to_string(),
            },
            _ => Self::Home,
        }
    }

    /// Parse the fragment of a full URL. A URL without `#` is home.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('#') {
            Some((_, fragment)) => Self::from_fragment(fragment),
            None => Self::Home,
        }
    }

    /// The fragment that selects this route.
    pub fn fragment(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::View { id } => format!("#/view/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

/// Holds the current route and re-evaluates it on fragment changes.
#[derive(Debug, Clone)]
pub struct HashRouter {
    current: Route,
}

impl HashRouter {
    /// Evaluate the starting URL once.
    pub fn start(initial_url: &str) -> Self {
        let current = Route::from_url(initial_url);
        debug!(route = %current, "Router started");
        Self { current }
    }

    /// The currently selected route.
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Handle a fragment-change event.
    pub fn on_fragment_change(&mut self, fragment: &str) -> &Route {
        self.current = Route::from_fragment(fragment);
        debug!(route = %self.current, "Route changed");
        &self.current
    }
}
