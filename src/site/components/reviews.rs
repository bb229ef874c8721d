// site/components/reviews.rs - Parent reviews carousel
//
// Renders `state::Carousel` and wires it to the outside world: the
// auto-rotate interval, hover, page visibility and the arrow keys.

use leptos::prelude::*;

use super::common::StarRating;
use crate::site::model::Review;
use crate::site::state::carousel::AUTO_ROTATE_INTERVAL;
use crate::site::state::Carousel;

/// Single testimonial card
#[component]
pub fn ReviewCard(
    review: Review,
    /// Whether the card is part of the visible pair
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || {
            if active.get() {
                "review-card active min-w-[368px] bg-white rounded-2xl shadow-md p-8 border border-emerald-100 transition-opacity opacity-100"
            } else {
                "review-card min-w-[368px] bg-white rounded-2xl shadow-sm p-8 border border-gray-100 transition-opacity opacity-60"
            }
        }>
            <StarRating rating=review.rating />
            <p class="review-text text-gray-700 italic my-4 leading-relaxed">
                "\u{201c}" {review.text.clone()} "\u{201d}"
            </p>
            <div class="review-author">
                <h4 class="font-bold text-gray-900">{review.author.clone()}</h4>
                <span class="text-sm text-gray-500">{review.relation.clone()}</span>
            </div>
        </div>
    }
}

/// Two-at-a-time rotating reviews with prev/next buttons and dots
#[component]
pub fn ReviewsCarousel(reviews: Vec<Review>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(reviews.len()));
    let total = carousel.with_untracked(Carousel::total);

    // Restart the interval whenever rotation toggles or the user navigates
    let timer_key = Memo::new(move |_| carousel.with(|c| (c.auto_rotating(), c.timer_epoch())));
    let timer = StoredValue::new(None::<IntervalHandle>);
    Effect::new(move |_| {
        let (rotating, _) = timer_key.get();
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        timer.set_value(None);

        if rotating {
            match set_interval_with_handle(move || carousel.update(Carousel::tick), AUTO_ROTATE_INTERVAL) {
                Ok(handle) => timer.set_value(Some(handle)),
                Err(_) => tracing::warn!("Could not start review auto-rotation"),
            }
        }
    });
    on_cleanup(move || {
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let visibility = window_event_listener_untyped("visibilitychange", move |_| {
        let hidden = document().hidden();
        carousel.update(|c| c.set_page_hidden(hidden));
    });
    let arrows = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
        "ArrowLeft" => carousel.update(Carousel::prev),
        "ArrowRight" => carousel.update(Carousel::next),
        _ => {}
    });
    on_cleanup(move || {
        visibility.remove();
        arrows.remove();
    });

    let controls = Memo::new(move |_| carousel.with(Carousel::controls));

    view! {
        <div
            class="reviews-carousel relative"
            on:mouseenter=move |_| carousel.update(|c| c.set_hovered(true))
            on:mouseleave=move |_| carousel.update(|c| c.set_hovered(false))
        >
            <div class="overflow-hidden">
                <div
                    class="reviews-container flex gap-8 transition-transform duration-500 ease-in-out"
                    style:transform=move || carousel.with(Carousel::transform)
                >
                    {reviews.into_iter().enumerate().map(|(index, review)| {
                        let active = Signal::derive(move || carousel.with(|c| c.card_active(index)));
                        view! { <ReviewCard review=review active=active /> }
                    }).collect_view()}
                </div>
            </div>

            <div class="carousel-controls flex items-center justify-center gap-6 mt-8">
                <button
                    type="button"
                    class="prev-btn w-10 h-10 rounded-full bg-white shadow border border-gray-200 disabled:opacity-40 disabled:cursor-not-allowed"
                    aria-label="Previous reviews"
                    disabled=move || controls.get().prev_disabled
                    on:click=move |_| carousel.update(Carousel::prev)
                >
                    "‹"
                </button>

                <div class="carousel-indicators flex gap-2">
                    {(0..total).map(|index| view! {
                        <button
                            type="button"
                            class=move || {
                                if carousel.with(|c| c.indicator_active(index)) {
                                    "indicator active w-3 h-3 rounded-full bg-emerald-500"
                                } else {
                                    "indicator w-3 h-3 rounded-full bg-gray-300"
                                }
                            }
                            aria-label=format!("Show reviews {}", index + 1)
                            on:click=move |_| carousel.update(|c| c.go_to(index))
                        ></button>
                    }).collect_view()}
                </div>

                <button
                    type="button"
                    class="next-btn w-10 h-10 rounded-full bg-white shadow border border-gray-200 disabled:opacity-40 disabled:cursor-not-allowed"
                    aria-label="Next reviews"
                    disabled=move || controls.get().next_disabled
                    on:click=move |_| carousel.update(Carousel::next)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
