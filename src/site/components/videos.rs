// site/components/videos.rs - Video gallery components
//
// - VideoCard: thumbnail card that opens the player modal
// - FallbackCard: static sample card linking to the channel
// - VideoPlayer: modal body with the embedded player
// - LoadMoreButton: pagination control

use leptos::prelude::*;

use super::common::Badge;
use crate::site::format::{format_view_count, text_to_html};
use crate::site::model::Video;

/// Video card for the gallery grid
///
/// Title and description are inserted as text, so markup in them is shown
/// literally rather than parsed.
#[component]
pub fn VideoCard(
    video: Video,
    /// Click handler receiving the video id
    on_select: Callback<String>,
) -> impl IntoView {
    let id = video.id.clone();

    view! {
        <div
            class="video-card group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 cursor-pointer border border-gray-100 overflow-hidden"
            on:click=move |_| on_select.run(id.clone())
        >
            <VideoThumbnail video=video.clone() />
            <VideoInfo video=video />
        </div>
    }
}

/// Sample card shown when the gallery is not configured
#[component]
pub fn FallbackCard(
    video: Video,
    /// Channel page opened for any click
    channel_url: String,
) -> impl IntoView {
    view! {
        <a
            class="video-card group block bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 border border-gray-100 overflow-hidden"
            href=channel_url
            target="_blank"
            rel="noopener noreferrer"
        >
            <VideoThumbnail video=video.clone() />
            <VideoInfo video=video />
        </a>
    }
}

#[component]
fn VideoThumbnail(video: Video) -> impl IntoView {
    view! {
        <div class="video-thumbnail relative aspect-video bg-gray-100">
            {match video.thumbnail_url.clone() {
                Some(src) => view! {
                    <img class="w-full h-full object-cover" src=src alt=video.title.clone() loading="lazy" />
                }.into_any(),
                None => view! {
                    <div class="w-full h-full flex items-center justify-center text-gray-300 text-5xl">"▶"</div>
                }.into_any(),
            }}
            <div class="play-button absolute inset-0 flex items-center justify-center opacity-80 group-hover:opacity-100 transition-opacity">
                <span class="w-14 h-14 rounded-full bg-red-600 text-white flex items-center justify-center text-xl shadow-lg">"▶"</span>
            </div>
            <div class="absolute bottom-2 right-2">
                <Badge variant="dark">{video.duration_label()}</Badge>
            </div>
        </div>
    }
}

#[component]
fn VideoInfo(video: Video) -> impl IntoView {
    view! {
        <div class="video-info p-5">
            <h3 class="video-title font-bold text-gray-900 mb-2 line-clamp-2 group-hover:text-emerald-600 transition-colors">
                {video.title.clone()}
            </h3>
            <p class="video-description text-gray-600 text-sm mb-4 line-clamp-3">
                {video.description.clone()}
            </p>
            <div class="video-meta flex justify-between items-center text-xs text-gray-500">
                <span class="video-date">{video.short_date()}</span>
                <span class="video-duration">{video.duration_label()}</span>
            </div>
        </div>
    }
}

/// Modal body: autoplaying embed plus details
#[component]
pub fn VideoPlayer(video: Video) -> impl IntoView {
    view! {
        <div>
            <div class="aspect-video bg-black">
                <iframe
                    id="modal-video"
                    class="w-full h-full"
                    src=video.embed_url()
                    title=video.title.clone()
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </div>
            <div class="p-6 space-y-3">
                <h2 id="modal-title" class="text-2xl font-bold text-gray-900">{video.title.clone()}</h2>
                <div class="flex gap-4 text-sm text-gray-500">
                    <span id="modal-date">{video.long_date()}</span>
                    {(video.view_count > 0).then(|| view! {
                        <span>{format_view_count(video.view_count)}</span>
                    })}
                </div>
                <p
                    id="modal-description"
                    class="text-gray-600 leading-relaxed"
                    inner_html=text_to_html(&video.description)
                ></p>
                <a
                    id="modal-youtube-link"
                    class="inline-block px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors"
                    href=video.watch_url()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Watch on YouTube"
                </a>
            </div>
        </div>
    }
}

/// "Load more" control
#[component]
pub fn LoadMoreButton(
    label: Signal<&'static str>,
    busy: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-more-container text-center mt-10">
            <button
                id="load-more"
                type="button"
                class="px-6 py-3 bg-emerald-500 text-white rounded-lg hover:bg-emerald-600 transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed font-medium shadow-sm"
                disabled=move || busy.get()
                on:click=move |_| on_click.run(())
            >
                {move || label.get()}
            </button>
        </div>
    }
}
