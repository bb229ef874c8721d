// site/config.rs - Video gallery configuration
//
// The credential and channel handle are deploy-time inputs. On the server
// they come from the environment (a `.env` file is honoured); tests build
// them directly.

use serde::{Deserialize, Serialize};

/// Value shipped in templates before a real key is filled in
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

pub const DEFAULT_CHANNEL_HANDLE: &str = "@Dr.VarunPaediatrican";
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub api_key: Option<String>,
    pub channel_handle: String,
    /// `maxResults` for the search call
    pub page_size: u32,
    pub api_base: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            channel_handle: DEFAULT_CHANNEL_HANDLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The credential, unless it is missing, blank or still the placeholder
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    /// Load from `YOUTUBE_*` environment variables
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        use std::env;

        dotenv::dotenv().ok();
        let defaults = Self::default();

        let page_size = match env::var("YOUTUBE_PAGE_SIZE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid YOUTUBE_PAGE_SIZE '{}'", raw);
                defaults.page_size
            }),
            Err(_) => defaults.page_size,
        };

        Self {
            api_key: env::var("YOUTUBE_API_KEY").ok(),
            channel_handle: env::var("YOUTUBE_CHANNEL_HANDLE")
                .unwrap_or(defaults.channel_handle),
            page_size,
            api_base: env::var("YOUTUBE_API_BASE").unwrap_or(defaults.api_base),
        }
    }
}

/// Public channel page for a handle such as `@Dr.VarunPaediatrican`
pub fn channel_url(handle: &str) -> String {
    format!("https://www.youtube.com/{}", handle)
}
