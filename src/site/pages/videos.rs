// site/pages/videos.rs - Video gallery page
//
// Owns one `VideoGallery` for the lifetime of the page. Every fetch goes
// through `begin_load*` / `settle`, so overlapping clicks are dropped and
// the loading flag is cleared whatever the outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::site::components::*;
use crate::site::model::Video;
use crate::site::server_fns::fetch_page;
use crate::site::state::{GalleryView, PageRequest, VideoGallery};

/// Run one fetch cycle for `request` and apply the result
fn run_cycle(gallery: RwSignal<VideoGallery>, request: Option<PageRequest>) {
    let Some(request) = request else {
        return;
    };

    spawn_local(async move {
        let outcome = fetch_page(request.cursor.clone()).await;

        // The page may have been left while the request was in flight
        let applied = gallery.try_update(|g| g.settle(request, outcome));
        if applied.is_none() {
            tracing::debug!("Video page unmounted before fetch completed");
        }
    });
}

/// Body overflow to write when the modal state goes from `was_open` to `open`
///
/// Nothing is written on the first run while the modal is closed, so the
/// page's own overflow style is left alone until a video is opened.
fn scroll_lock_change(was_open: Option<bool>, open: bool) -> Option<bool> {
    match was_open {
        None if !open => None,
        Some(prev) if prev == open => None,
        _ => Some(open),
    }
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

#[component]
pub fn VideosPage() -> impl IntoView {
    let gallery = RwSignal::new(VideoGallery::new());
    let selected = RwSignal::new(None::<Video>);

    let load_first = move || run_cycle(gallery, gallery.try_update(VideoGallery::begin_load).flatten());
    let load_more = move || run_cycle(gallery, gallery.try_update(VideoGallery::begin_load_more).flatten());

    // Initial load once mounted in the browser
    Effect::new(move |_| load_first());

    let scroll_locked = Arc::new(AtomicBool::new(false));
    Effect::new({
        let scroll_locked = Arc::clone(&scroll_locked);
        move |was_open: Option<bool>| {
            let open = selected.with(Option::is_some);
            if let Some(lock) = scroll_lock_change(was_open, open) {
                set_body_scroll_locked(lock);
                scroll_locked.store(lock, Ordering::Relaxed);
            }
            open
        }
    });
    on_cleanup(move || {
        if scroll_locked.load(Ordering::Relaxed) {
            set_body_scroll_locked(false);
        }
    });

    let videos = Memo::new(move |_| gallery.with(|g| g.videos().to_vec()));
    let is_fallback = Memo::new(move |_| gallery.with(|g| g.view() == GalleryView::Fallback));
    let load_more_label = Signal::derive(move || gallery.with(VideoGallery::load_more_label));
    let busy = Signal::derive(move || gallery.with(VideoGallery::is_loading));

    let on_select = Callback::new(move |id: String| {
        let video = gallery.with(|g| g.find(&id).cloned());
        selected.set(video);
    });
    let on_close = Callback::new(move |()| selected.set(None));
    let on_retry = Callback::new(move |()| load_first());
    let on_load_more = Callback::new(move |()| load_more());

    let grid = move || {
        let videos = videos.get();
        if is_fallback.get() {
            let url = gallery.with(|g| g.fallback_url().unwrap_or_default().to_string());
            videos
                .into_iter()
                .map(|video| view! { <FallbackCard video=video channel_url=url.clone() /> })
                .collect_view()
                .into_any()
        } else {
            videos
                .into_iter()
                .map(|video| view! { <VideoCard video=video on_select=on_select /> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="bg-gray-50 py-16 min-h-screen">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Video Library"
                    subtitle="Short, practical videos on child health from our YouTube channel."
                />

                <Show when=move || gallery.with(VideoGallery::loading_visible)>
                    <Loading message="Loading videos..." />
                </Show>

                <Show when=move || gallery.with(VideoGallery::error_visible)>
                    <ErrorDisplay
                        message="We couldn't load the latest videos right now. Please try again later."
                        on_retry=on_retry
                    />
                </Show>

                <Show when=move || gallery.with(VideoGallery::grid_visible)>
                    <div id="videos-grid" class="videos-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {grid}
                    </div>
                </Show>

                <Show when=move || gallery.with(VideoGallery::load_more_visible)>
                    <LoadMoreButton label=load_more_label busy=busy on_click=on_load_more />
                </Show>
            </div>

            {move || selected.get().map(|video| view! {
                <ModalWrapper on_close=on_close>
                    <VideoPlayer video=video />
                </ModalWrapper>
            })}
        </div>
    }
}
