// site/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real implementation on the server and
// an HTTP stub on the client. The YouTube credential stays on the server;
// the browser receives already merged video pages.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::site::error::GalleryError;
use crate::site::model::VideoPage;

/// Outcome of one fetch cycle as seen by the gallery
pub type PageResult = Result<VideoPage, GalleryError>;

#[cfg(feature = "ssr")]
async fn gallery_config() -> crate::site::config::GalleryConfig {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::site::config::GalleryConfig;

    // First try the reactive context (tests provide it this way)
    if let Some(config) = use_context::<GalleryConfig>() {
        return config;
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(config) = req.app_data::<Data<GalleryConfig>>() {
                return config.as_ref().clone();
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    GalleryConfig::from_env()
}

/// Fetch one page of channel videos, continuing from `page_token` if given
///
/// Gallery failures come back inside the `Ok` so the client can tell a
/// missing credential apart from a broken request.
#[server(LoadVideoPage, "/api")]
pub async fn load_video_page(page_token: Option<String>) -> Result<PageResult, ServerFnError> {
    use crate::site::api::YouTubeClient;
    use crate::site::feed::fetch_video_page;

    let config = gallery_config().await;
    tracing::info!(
        "Video page request: channel={}, continuation={}",
        config.channel_handle,
        page_token.is_some()
    );

    let client = match YouTubeClient::new(&config) {
        Ok(client) => client,
        Err(e) => return Ok(Err(e)),
    };
    let outcome = fetch_video_page(&client, &config, page_token.as_deref()).await;

    match &outcome {
        Ok(page) => tracing::info!("Video page loaded: {} videos", page.videos.len()),
        Err(e) => tracing::error!("Video page failed: {}", e),
    }

    Ok(outcome)
}

/// Client-side wrapper collapsing transport failures into `GalleryError`
pub async fn fetch_page(page_token: Option<String>) -> PageResult {
    load_video_page(page_token)
        .await
        .map_err(GalleryError::from)
        .and_then(|outcome| outcome)
}
