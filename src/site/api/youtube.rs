// site/api/youtube.rs - YouTube Data API v3 client
//
// Thin reqwest wrapper implementing `VideoApi`. The key is passed as the
// `key` query parameter, the way the public API expects it.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::site::config::GalleryConfig;
use crate::site::error::GalleryError;
use crate::site::feed::{ChannelListResponse, SearchListResponse, VideoApi, VideoListResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct YouTubeClient {
    http: Client,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(config: &GalleryConfig) -> Result<Self, GalleryError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}/{endpoint}` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T, GalleryError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", context, status.as_u16());
            return Err(GalleryError::Http {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl VideoApi for YouTubeClient {
    async fn channels_for_handle(
        &self,
        api_key: &str,
        handle: &str,
    ) -> Result<ChannelListResponse, GalleryError> {
        self.get_json(
            "channels",
            &[("key", api_key), ("forHandle", handle), ("part", "id")],
            "channel lookup",
        )
        .await
    }

    async fn search_channel_videos(
        &self,
        api_key: &str,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<SearchListResponse, GalleryError> {
        let max_results = max_results.to_string();
        let mut query = vec![
            ("key", api_key),
            ("channelId", channel_id),
            ("part", "snippet,id"),
            ("order", "date"),
            ("maxResults", max_results.as_str()),
            ("type", "video"),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        self.get_json("search", &query, "video search").await
    }

    async fn video_details(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<VideoListResponse, GalleryError> {
        let ids = video_ids.join(",");
        self.get_json(
            "videos",
            &[("key", api_key), ("id", ids.as_str()), ("part", "contentDetails,statistics")],
            "video details",
        )
        .await
    }
}
