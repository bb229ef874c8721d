// tests/video_feed_tests.rs
// Fetch pipeline tests against an in-memory YouTube API

use std::cell::RefCell;

use pediatric_site::site::config::GalleryConfig;
use pediatric_site::site::error::GalleryError;
use pediatric_site::site::feed::*;
use pediatric_site::site::state::{GalleryView, VideoGallery};

/// Canned responses plus a log of every call made
#[derive(Default)]
struct FakeApi {
    channel_ids: Vec<String>,
    search: RefCell<Vec<SearchListResponse>>,
    details: String,
    channel_status: Option<u16>,
    search_status: Option<u16>,
    details_status: Option<u16>,
    /// Connection-level failure on the search call
    search_transport: Option<String>,
    calls: RefCell<Vec<String>>,
}

fn http_error(status: Option<u16>, context: &str) -> Result<(), GalleryError> {
    match status {
        Some(status) => Err(GalleryError::Http {
            status,
            context: context.to_string(),
        }),
        None => Ok(()),
    }
}

impl FakeApi {
    fn healthy() -> Self {
        FakeApi {
            channel_ids: vec!["UC123".to_string()],
            search: RefCell::new(vec![search_page(&["v1", "v2"], Some("PAGE2"))]),
            details: r#"{"items": [
                {"id": "v2", "contentDetails": {"duration": "PT1H2M3S"}, "statistics": {"viewCount": "1234"}},
                {"id": "v1", "contentDetails": {"duration": "PT45S"}, "statistics": {"viewCount": "9"}}
            ]}"#
            .to_string(),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn search_page(ids: &[&str], token: Option<&str>) -> SearchListResponse {
    let items: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id": {{"videoId": "{id}"}}, "snippet": {{
                    "title": "Video {id}",
                    "description": "About {id}",
                    "publishedAt": "2025-01-15T09:00:00Z",
                    "thumbnails": {{"high": {{"url": "https://i.ytimg.com/vi/{id}/hqdefault.jpg"}}}}
                }}}}"#
            )
        })
        .collect();
    let token = token
        .map(|t| format!(r#""nextPageToken": "{t}","#))
        .unwrap_or_default();
    let json = format!(r#"{{{token} "items": [{}]}}"#, items.join(","));
    serde_json::from_str(&json).expect("valid search fixture")
}

impl VideoApi for FakeApi {
    async fn channels_for_handle(
        &self,
        api_key: &str,
        handle: &str,
    ) -> Result<ChannelListResponse, GalleryError> {
        self.calls
            .borrow_mut()
            .push(format!("channels:{api_key}:{handle}"));
        http_error(self.channel_status, "channel lookup")?;
        let items: Vec<String> = self
            .channel_ids
            .iter()
            .map(|id| format!(r#"{{"id": "{id}"}}"#))
            .collect();
        Ok(serde_json::from_str(&format!(r#"{{"items": [{}]}}"#, items.join(","))).expect("valid channel fixture"))
    }

    async fn search_channel_videos(
        &self,
        _api_key: &str,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<SearchListResponse, GalleryError> {
        self.calls.borrow_mut().push(format!(
            "search:{channel_id}:{max_results}:{}",
            page_token.unwrap_or("-")
        ));
        http_error(self.search_status, "video search")?;
        if let Some(reason) = &self.search_transport {
            return Err(GalleryError::Transport(reason.clone()));
        }
        let mut pages = self.search.borrow_mut();
        if pages.is_empty() {
            Ok(SearchListResponse::default())
        } else {
            Ok(pages.remove(0))
        }
    }

    async fn video_details(
        &self,
        _api_key: &str,
        video_ids: &[String],
    ) -> Result<VideoListResponse, GalleryError> {
        self.calls
            .borrow_mut()
            .push(format!("videos:{}", video_ids.join(",")));
        http_error(self.details_status, "video details")?;
        Ok(serde_json::from_str(&self.details).expect("valid details fixture"))
    }
}

fn configured() -> GalleryConfig {
    GalleryConfig::with_api_key("test-key")
}

// ===== Credential checks =====

#[tokio::test]
async fn test_missing_key_fails_before_any_call() {
    let api = FakeApi::healthy();
    let result = fetch_video_page(&api, &GalleryConfig::default(), None).await;

    assert_eq!(
        result,
        Err(GalleryError::Configuration {
            handle: "@Dr.VarunPaediatrican".to_string()
        })
    );
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_placeholder_key_counts_as_missing() {
    let api = FakeApi::healthy();
    let config = GalleryConfig::with_api_key("YOUR_API_KEY_HERE");
    let result = fetch_video_page(&api, &config, None).await;

    assert!(result.unwrap_err().wants_fallback());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_fallback_links_to_configured_channel() {
    let api = FakeApi::healthy();
    let config = GalleryConfig {
        channel_handle: "@other.clinic".to_string(),
        ..GalleryConfig::default()
    };
    let mut gallery = VideoGallery::new();

    let request = gallery.begin_load().expect("idle gallery accepts a load");
    let outcome = fetch_video_page(&api, &config, None).await;
    gallery.settle(request, outcome);

    assert!(api.calls().is_empty());
    assert!(!gallery.is_loading());
    assert_eq!(gallery.view(), GalleryView::Fallback);
    assert_eq!(
        gallery.fallback_url(),
        Some("https://www.youtube.com/@other.clinic")
    );
}

// ===== Pipeline =====

#[tokio::test]
async fn test_calls_are_issued_in_order() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    fetch_video_page(&api, &configured(), None).await?;

    assert_eq!(
        api.calls(),
        vec![
            "channels:test-key:@Dr.VarunPaediatrican".to_string(),
            "search:UC123:12:-".to_string(),
            "videos:v1,v2".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_page_merges_details_by_id() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    let page = fetch_video_page(&api, &configured(), None).await?;

    assert_eq!(page.videos.len(), 2);
    assert_eq!(page.next_page_token.as_deref(), Some("PAGE2"));

    let first = &page.videos[0];
    assert_eq!(first.id, "v1");
    assert_eq!(first.duration_label(), "0:45");
    assert_eq!(first.view_count, 9);
    assert_eq!(
        first.thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/v1/hqdefault.jpg")
    );

    let second = &page.videos[1];
    assert_eq!(second.duration_label(), "1:02:03");
    assert_eq!(second.view_count, 1234);
    assert_eq!(second.short_date(), "Jan 15, 2025");
    Ok(())
}

#[tokio::test]
async fn test_page_token_is_forwarded() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    fetch_video_page(&api, &configured(), Some("PAGE2")).await?;

    assert_eq!(api.calls()[1], "search:UC123:12:PAGE2");
    Ok(())
}

#[tokio::test]
async fn test_custom_page_size_is_used() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    let mut config = configured();
    config.page_size = 6;
    fetch_video_page(&api, &config, None).await?;

    assert_eq!(api.calls()[1], "search:UC123:6:-");
    Ok(())
}

#[tokio::test]
async fn test_empty_next_token_means_last_page() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    *api.search.borrow_mut() = vec![search_page(&["v1"], Some(""))];
    let page = fetch_video_page(&api, &configured(), None).await?;

    assert_eq!(page.next_page_token, None);
    Ok(())
}

// ===== Failures =====

#[tokio::test]
async fn test_unknown_handle_is_channel_not_found() {
    let api = FakeApi {
        channel_ids: vec![],
        ..FakeApi::healthy()
    };
    let result = fetch_video_page(&api, &configured(), None).await;

    assert_eq!(
        result,
        Err(GalleryError::ChannelNotFound {
            handle: "@Dr.VarunPaediatrican".to_string()
        })
    );
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_http_error_stops_the_cycle() {
    let api = FakeApi {
        search_status: Some(403),
        ..FakeApi::healthy()
    };
    let result = fetch_video_page(&api, &configured(), None).await;

    match result {
        Err(GalleryError::Http { status, .. }) => assert_eq!(status, 403),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    // No details call after a failed search
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn test_channel_lookup_http_error_stops_the_cycle() {
    let api = FakeApi {
        channel_status: Some(403),
        ..FakeApi::healthy()
    };
    let result = fetch_video_page(&api, &configured(), None).await;

    match result {
        Err(GalleryError::Http { status, context }) => {
            assert_eq!(status, 403);
            assert_eq!(context, "channel lookup");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
    // Neither search nor details after a failed lookup
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_details_http_error_fails_the_cycle() {
    let api = FakeApi {
        details_status: Some(500),
        ..FakeApi::healthy()
    };
    let result = fetch_video_page(&api, &configured(), None).await;

    match result {
        Err(GalleryError::Http { status, context }) => {
            assert_eq!(status, 500);
            assert_eq!(context, "video details");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert_eq!(api.calls().len(), 3);
}

#[tokio::test]
async fn test_search_without_videos_is_empty_result() {
    let api = FakeApi::healthy();
    api.search.borrow_mut().clear();
    let result = fetch_video_page(&api, &configured(), None).await;

    assert_eq!(result, Err(GalleryError::EmptyResult));
    assert_eq!(api.calls().len(), 2);
}

// ===== Full gallery cycle =====

#[tokio::test]
async fn test_gallery_first_page_then_load_more() -> anyhow::Result<()> {
    let api = FakeApi::healthy();
    api.search.borrow_mut().push(search_page(&["v2", "v3"], None));
    let config = configured();
    let mut gallery = VideoGallery::new();

    let request = gallery.begin_load().expect("idle gallery accepts a load");
    assert!(gallery.is_loading());
    assert!(gallery.begin_load_more().is_none());
    let outcome = fetch_video_page(&api, &config, request.cursor.as_deref()).await;
    gallery.finish(request, outcome);

    assert!(!gallery.is_loading());
    assert_eq!(gallery.view(), GalleryView::Ready);
    assert!(gallery.load_more_visible());

    let request = gallery.begin_load_more().expect("cursor pending");
    assert!(gallery.begin_load_more().is_none());
    assert_eq!(gallery.load_more_label(), "Loading...");
    let outcome = fetch_video_page(&api, &config, request.cursor.as_deref()).await;
    gallery.finish(request, outcome);

    let ids: Vec<&str> = gallery.videos().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["v1", "v2", "v3"]);
    assert!(!gallery.load_more_visible());
    assert!(!gallery.is_loading());
    assert_eq!(api.calls()[4], "search:UC123:12:PAGE2");
    Ok(())
}

#[tokio::test]
async fn test_gallery_failure_on_every_endpoint_clears_loading_flag() {
    let failing = [
        FakeApi {
            channel_status: Some(404),
            ..FakeApi::healthy()
        },
        FakeApi {
            search_status: Some(403),
            ..FakeApi::healthy()
        },
        FakeApi {
            details_status: Some(503),
            ..FakeApi::healthy()
        },
    ];

    for api in failing {
        let mut gallery = VideoGallery::new();
        let request = gallery.begin_load().expect("idle gallery accepts a load");
        let outcome = fetch_video_page(&api, &configured(), None).await;
        gallery.settle(request, outcome);

        assert!(!gallery.is_loading());
        assert!(gallery.error_visible());
        assert!(!gallery.grid_visible());
        assert!(matches!(gallery.last_error(), Some(GalleryError::Http { .. })));
    }
}

#[tokio::test]
async fn test_gallery_transport_failure_shows_error_panel() {
    let api = FakeApi {
        search_transport: Some("connection reset".to_string()),
        ..FakeApi::healthy()
    };
    let mut gallery = VideoGallery::new();

    let request = gallery.begin_load().expect("idle gallery accepts a load");
    let outcome = fetch_video_page(&api, &configured(), None).await;
    gallery.settle(request, outcome);

    assert!(!gallery.is_loading());
    assert!(gallery.error_visible());
    assert!(!gallery.loading_visible());
    assert_eq!(
        gallery.last_error(),
        Some(&GalleryError::Transport("connection reset".to_string()))
    );
    // No details call after the search failed
    assert_eq!(api.calls().len(), 2);
    assert!(gallery.begin_load().is_some());
}

#[tokio::test]
async fn test_gallery_failure_clears_loading_flag() {
    let api = FakeApi {
        search_status: Some(500),
        ..FakeApi::healthy()
    };
    let mut gallery = VideoGallery::new();

    let request = gallery.begin_load().expect("idle gallery accepts a load");
    let outcome = fetch_video_page(&api, &configured(), None).await;
    gallery.finish(request, outcome);

    assert!(!gallery.is_loading());
    assert!(gallery.error_visible());
    assert!(!gallery.loading_visible());
    assert!(gallery.begin_load().is_some());
}
