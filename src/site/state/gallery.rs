// site/state/gallery.rs - Video gallery state
//
// A fetch cycle is split in two halves so the loading flag can guard it
// without holding a borrow across the network await:
//
//   let request = gallery.begin_load()?;      // flag set, None if busy
//   let outcome = fetch(request.cursor).await;
//   gallery.finish(request, outcome);         // flag cleared, always
//
// There is no cancellation: a request that is in flight simply blocks new
// ones until it finishes.

use std::collections::HashSet;

use crate::site::config::channel_url;
use crate::site::content;
use crate::site::error::GalleryError;
use crate::site::model::{Video, VideoPage};

/// Which panel the video section shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryView {
    /// Nothing requested yet
    #[default]
    Idle,
    /// First page in flight
    Loading,
    /// Video grid visible
    Ready,
    /// Generic error panel
    Error,
    /// Static sample cards linking to the channel
    Fallback,
}

/// Ticket for one in-flight fetch cycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation cursor; `None` for a first-page load
    pub cursor: Option<String>,
}

impl PageRequest {
    /// Continuations append to the grid, first pages replace it
    pub fn appends(&self) -> bool {
        self.cursor.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoGallery {
    videos: Vec<Video>,
    page_cursor: Option<String>,
    loading: bool,
    view: GalleryView,
    last_error: Option<GalleryError>,
    /// Channel page the fallback cards open
    fallback_url: Option<String>,
}

impl VideoGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn page_cursor(&self) -> Option<&str> {
        self.page_cursor.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> GalleryView {
        self.view
    }

    pub fn last_error(&self) -> Option<&GalleryError> {
        self.last_error.as_ref()
    }

    pub fn fallback_url(&self) -> Option<&str> {
        self.fallback_url.as_deref()
    }

    /// Start a first-page load; `None` while another cycle is in flight
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        self.begin(None)
    }

    /// Start loading the page after the current cursor
    ///
    /// `None` while another cycle is in flight or when there is no cursor.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        let cursor = self.page_cursor.clone()?;
        self.begin(Some(cursor))
    }

    fn begin(&mut self, cursor: Option<String>) -> Option<PageRequest> {
        if self.loading {
            tracing::debug!("Video fetch already in flight, ignoring request");
            return None;
        }

        self.loading = true;
        if cursor.is_none() {
            self.view = GalleryView::Loading;
        }
        Some(PageRequest { cursor })
    }

    /// Apply the outcome of a cycle started with `begin_load*`
    pub fn finish(&mut self, request: PageRequest, outcome: Result<VideoPage, GalleryError>) {
        self.loading = false;

        match outcome {
            Ok(page) if page.videos.is_empty() => self.fail(GalleryError::EmptyResult),
            Ok(page) => {
                tracing::info!(
                    "Loaded {} videos (append: {})",
                    page.videos.len(),
                    request.appends()
                );
                if request.appends() {
                    self.append(page.videos);
                } else {
                    self.videos = page.videos;
                    self.fallback_url = None;
                }
                self.page_cursor = page.next_page_token.filter(|token| !token.is_empty());
                self.last_error = None;
                self.view = GalleryView::Ready;
            }
            Err(err) => self.fail(err),
        }
    }

    /// `finish`, then swap in the sample cards when the credential is missing
    ///
    /// The sample cards link to the handle the server was configured with.
    pub fn settle(&mut self, request: PageRequest, outcome: Result<VideoPage, GalleryError>) {
        let fallback_handle = outcome
            .as_ref()
            .err()
            .and_then(GalleryError::fallback_handle)
            .map(str::to_string);

        self.finish(request, outcome);
        if let Some(handle) = fallback_handle {
            self.show_fallback(content::fallback_videos(), channel_url(&handle));
        }
    }

    /// Skips ids already on screen so overlapping pages do not duplicate cards
    fn append(&mut self, videos: Vec<Video>) {
        let mut seen: HashSet<String> = self.videos.iter().map(|v| v.id.clone()).collect();
        for video in videos {
            if seen.insert(video.id.clone()) {
                self.videos.push(video);
            } else {
                tracing::debug!("Skipping duplicate video {}", video.id);
            }
        }
    }

    fn fail(&mut self, err: GalleryError) {
        tracing::error!("Error loading videos: {}", err);
        self.view = GalleryView::Error;
        self.last_error = Some(err);
    }

    /// Replace the grid with static cards; leaves the flag and cursor alone
    pub fn show_fallback(&mut self, videos: Vec<Video>, channel_url: String) {
        self.videos = videos;
        self.fallback_url = Some(channel_url);
        self.view = GalleryView::Fallback;
    }

    /// Spinner is up until the first page settles, and during load-more
    pub fn loading_visible(&self) -> bool {
        self.loading || matches!(self.view, GalleryView::Idle | GalleryView::Loading)
    }

    pub fn error_visible(&self) -> bool {
        self.view == GalleryView::Error
    }

    pub fn grid_visible(&self) -> bool {
        matches!(self.view, GalleryView::Ready | GalleryView::Fallback)
    }

    /// The "load more" affordance, shown iff a cursor is pending
    pub fn load_more_visible(&self) -> bool {
        self.view == GalleryView::Ready && self.page_cursor.is_some()
    }

    pub fn load_more_label(&self) -> &'static str {
        if self.loading {
            "Loading..."
        } else {
            "Load More Videos"
        }
    }

    pub fn find(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }
}
