// site/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the site.
// Philosophy: Pure, stateless components that receive all data via props.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div id="loading" class="loading-container flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-emerald-500"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error panel component
///
/// One generic message regardless of what went wrong, with an optional
/// retry action.
#[component]
pub fn ErrorDisplay(
    /// The message to display
    message: &'static str,
    /// Retry handler; the button is hidden without one
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div id="error" class="error-container bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Unable to load videos"</h3>
                <p class="text-red-600 text-sm">{message}</p>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="mt-3 px-4 py-2 bg-white text-red-700 rounded-lg border border-red-200 hover:bg-red-100 transition-colors"
                        on:click=move |_| retry.run(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Modal wrapper component
///
/// Provides the backdrop and close control. Visibility is decided by the
/// parent; closing via backdrop, button or Escape all call `on_close`.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div id="video-modal" class="modal show fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6">
            // Backdrop with blur
            <div
                class="absolute inset-0 bg-gray-900/70 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            // Modal Content
            <div
                class="modal-content relative bg-white rounded-2xl shadow-2xl w-full max-w-4xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="modal-close absolute top-3 right-3 z-10 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                    on:click=move |_| on_close.run(())
                    title="Close"
                >
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                    </svg>
                </button>

                <div class="overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Star rating display component
///
/// Displays a whole-star rating out of five.
#[component]
pub fn StarRating(
    /// The rating value (0 to 5)
    rating: u8,
) -> impl IntoView {
    let full_stars = usize::from(rating.min(5));
    let empty_stars = 5 - full_stars;

    view! {
        <div class="review-rating flex items-center gap-0.5" title=format!("Rating: {} of 5", full_stars)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}
            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200 text-lg">"★"</span>
            }).collect_view()}
        </div>
    }
}

/// Badge component
///
/// A small pill for category and duration labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-emerald-100 text-emerald-800 border border-emerald-200",
        "dark" => "px-2 py-0.5 text-xs font-semibold rounded bg-black/75 text-white",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Page section heading with subtitle
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(default = "")]
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-10">
            <h2 class="text-3xl font-bold text-gray-900 mb-2">{title}</h2>
            {(!subtitle.is_empty()).then(|| view! {
                <p class="text-gray-500 max-w-2xl mx-auto">{subtitle}</p>
            })}
        </div>
    }
}

/// Element that fades and slides in the first time it scrolls into view
///
/// Uses an `IntersectionObserver` with a 10% threshold and the bottom
/// 50px of the viewport excluded. Server-rendered markup starts hidden.
/// The observer is disconnected when the element unmounts.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);
    let watcher = StoredValue::new_local(None::<RevealObserver>);
    release_on_cleanup(watcher);

    Effect::new(move |_| {
        if let Some(el) = node.get() {
            let observer = observe_once(&el, move || revealed.set(true));
            watcher.set_value(observer);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || {
                let motion = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-5"
                };
                format!("transition-all duration-[600ms] ease-out {} {}", motion, class)
            }
        >
            {children()}
        </div>
    }
}

/// Drop whatever `slot` holds when the current owner is cleaned up
pub(crate) fn release_on_cleanup<T: 'static>(slot: StoredValue<Option<T>, LocalStorage>) {
    on_cleanup(move || {
        slot.try_set_value(None);
    });
}

type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, leptos::web_sys::IntersectionObserver)>;

/// A live observer together with the JS callback it calls into
struct RevealObserver {
    observer: leptos::web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    el: &leptos::web_sys::HtmlElement,
    on_visible: impl Fn() + 'static,
) -> Option<RevealObserver> {
    use wasm_bindgen::JsCast;
    use leptos::web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let on_visible = Rc::new(on_visible);
    let notify = Rc::clone(&on_visible);
    let callback = ObserverCallback::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    notify();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            Some(RevealObserver {
                observer,
                _callback: callback,
            })
        }
        Err(_) => {
            tracing::warn!("IntersectionObserver unavailable, revealing immediately");
            on_visible();
            None
        }
    }
}
