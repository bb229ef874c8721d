// site/pages/blog.rs - Blog listing page
//
// Category filter over static post summaries. Alt+M jumps keyboard focus
// to the posts region.

use leptos::prelude::*;

use crate::site::components::*;
use crate::site::content;
use crate::site::state::BlogFilter;

#[component]
pub fn BlogPage() -> impl IntoView {
    let filter = RwSignal::new(BlogFilter::default());
    let region = NodeRef::<leptos::html::Section>::new();

    let shortcut = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.alt_key() && ev.key() == "m" {
            ev.prevent_default();
            if let Some(el) = region.get() {
                let _ = el.focus();
            }
        }
    });
    on_cleanup(move || shortcut.remove());

    view! {
        <div class="bg-gray-50 py-16">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Health Blog"
                    subtitle="Practical guidance for parents, from the first weeks to the school years."
                />
                <CategoryButtons categories=content::blog_categories() filter=filter />
                <BlogGrid posts=content::blog_posts() filter=filter region=region />
            </div>
        </div>
    }
}
