// site/feed.rs - YouTube Data API wire types and the fetch pipeline
//
// One fetch cycle is three dependent calls, issued strictly in order:
//   1. channels?forHandle=...        -> channel id
//   2. search?channelId=...&order=date -> one page of video snippets
//   3. videos?id=a,b,c               -> durations and view counts
// Details are merged onto snippets by video id, never by position.
//
// The HTTP side lives behind `VideoApi` so the pipeline can be exercised
// with an in-memory implementation.

use std::collections::HashMap;

use serde::Deserialize;

use crate::site::config::GalleryConfig;
use crate::site::error::GalleryError;
use crate::site::model::{Video, VideoPage};

/// Used when the details lookup has no entry for a video
pub const ZERO_DURATION: &str = "PT0S";

/// `channels?part=id&forHandle=...`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChannelItem {
    pub id: String,
}

/// `search?part=snippet,id&type=video&order=date`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Largest available of high, medium, default
    pub fn best_url(&self) -> Option<String> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|thumb| thumb.url.clone())
            .next()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// `videos?part=contentDetails,statistics&id=...`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoDetailsItem>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetailsItem {
    pub id: String,
    pub content_details: Option<ContentDetails>,
    pub statistics: Option<Statistics>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

/// Counts arrive as decimal strings
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
}

/// The three read-only endpoints the gallery needs
///
/// Implementations report non-success statuses as `GalleryError::Http`
/// and connection or decode failures as `GalleryError::Transport`.
#[allow(async_fn_in_trait)]
pub trait VideoApi {
    async fn channels_for_handle(
        &self,
        api_key: &str,
        handle: &str,
    ) -> Result<ChannelListResponse, GalleryError>;

    async fn search_channel_videos(
        &self,
        api_key: &str,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<SearchListResponse, GalleryError>;

    async fn video_details(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<VideoListResponse, GalleryError>;
}

/// Run one fetch cycle: resolve the channel, list a page, merge details
///
/// Fails with `Configuration` before any call is made when there is no
/// usable credential.
pub async fn fetch_video_page<A: VideoApi>(
    api: &A,
    config: &GalleryConfig,
    page_token: Option<&str>,
) -> Result<VideoPage, GalleryError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| GalleryError::Configuration {
            handle: config.channel_handle.clone(),
        })?;

    let channels = api
        .channels_for_handle(api_key, &config.channel_handle)
        .await?;
    let channel_id = channels
        .items
        .into_iter()
        .next()
        .map(|item| item.id)
        .ok_or_else(|| GalleryError::ChannelNotFound {
            handle: config.channel_handle.clone(),
        })?;
    tracing::debug!("Resolved {} to channel {}", config.channel_handle, channel_id);

    let search = api
        .search_channel_videos(api_key, &channel_id, config.page_size, page_token)
        .await?;
    let snippets: Vec<(String, Snippet)> = search
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id.map(|id| (id, item.snippet)))
        .collect();
    if snippets.is_empty() {
        return Err(GalleryError::EmptyResult);
    }
    tracing::debug!("Search returned {} videos", snippets.len());

    let ids: Vec<String> = snippets.iter().map(|(id, _)| id.clone()).collect();
    let details = api.video_details(api_key, &ids).await?;

    Ok(VideoPage {
        videos: merge_details(snippets, details),
        next_page_token: search.next_page_token.filter(|token| !token.is_empty()),
    })
}

/// Pair each snippet with its details by id, keeping snippet order
pub fn merge_details(snippets: Vec<(String, Snippet)>, details: VideoListResponse) -> Vec<Video> {
    let mut by_id: HashMap<String, VideoDetailsItem> = details
        .items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();

    snippets
        .into_iter()
        .map(|(id, snippet)| {
            let detail = by_id.remove(&id);
            let duration = detail
                .as_ref()
                .and_then(|d| d.content_details.as_ref())
                .and_then(|c| c.duration.clone())
                .unwrap_or_else(|| ZERO_DURATION.to_string());
            let view_count = detail
                .as_ref()
                .and_then(|d| d.statistics.as_ref())
                .and_then(|s| s.view_count.as_deref())
                .and_then(|count| count.parse().ok())
                .unwrap_or(0);

            Video {
                thumbnail_url: snippet.thumbnails.best_url(),
                id,
                title: snippet.title,
                description: snippet.description,
                published_at: snippet.published_at,
                duration,
                view_count,
            }
        })
        .collect()
}
