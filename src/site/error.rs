// site/error.rs - Video gallery error taxonomy
//
// Every failure of a fetch cycle ends up here. The UI does not distinguish
// kinds beyond `Configuration` (which switches to the static fallback);
// everything else collapses into one generic error panel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryError {
    /// Carries the configured handle so the fallback can link to that channel
    #[error("YouTube API key not configured")]
    Configuration { handle: String },

    #[error("channel not found for handle {handle}")]
    ChannelNotFound { handle: String },

    #[error("{context}: HTTP status {status}")]
    Http { status: u16, context: String },

    #[error("no videos found")]
    EmptyResult,

    #[error("request failed: {0}")]
    Transport(String),
}

impl GalleryError {
    /// Whether the static fallback cards should replace the error panel
    pub fn wants_fallback(&self) -> bool {
        self.fallback_handle().is_some()
    }

    /// Channel handle the fallback cards should link to
    pub fn fallback_handle(&self) -> Option<&str> {
        match self {
            GalleryError::Configuration { handle } => Some(handle),
            _ => None,
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl From<leptos::prelude::ServerFnError> for GalleryError {
    fn from(err: leptos::prelude::ServerFnError) -> Self {
        GalleryError::Transport(err.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        GalleryError::Transport(err.to_string())
    }
}
