// site/model/mod.rs - Shared data models for client and server
//
// These structs travel between the server function and the hydrated
// client, and feed the widget state machines in `state/`.

use serde::{Deserialize, Serialize};

use crate::site::format;

/// Category tag that matches every blog card
pub const ALL_CATEGORIES: &str = "all";

/// A filter button on the blog page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Tag compared against `BlogPost::category`
    pub tag: String,
    /// Button label
    pub label: String,
}

impl Category {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
        }
    }
}

/// Blog post summary shown as a card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published: String,
    pub read_minutes: u32,
}

/// Parent testimonial shown in the carousel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub relation: String,
    pub rating: u8,
    pub text: String,
}

/// A channel video: search snippet merged with its details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    /// RFC 3339 timestamp as returned by the API
    pub published_at: String,
    pub thumbnail_url: Option<String>,
    /// ISO-8601 duration, `PT0S` when the details lookup had nothing
    pub duration: String,
    pub view_count: u64,
}

impl Video {
    /// Autoplaying player URL for the modal
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", self.id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn duration_label(&self) -> String {
        format::format_duration(&self.duration)
    }

    /// Card date, e.g. `Jan 15, 2025`
    pub fn short_date(&self) -> String {
        format::short_date(&self.published_at)
    }

    /// Modal date, e.g. `January 15, 2025`
    pub fn long_date(&self) -> String {
        format::long_date(&self.published_at)
    }
}

/// One page of channel videos plus the continuation cursor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPage {
    pub videos: Vec<Video>,
    /// `None` when there are no further pages
    pub next_page_token: Option<String>,
}
