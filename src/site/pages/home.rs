// site/pages/home.rs - Landing page
//
// Practice introduction plus the parent reviews carousel.

use leptos::prelude::*;

use crate::site::components::*;
use crate::site::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <section class="hero bg-gradient-to-br from-emerald-50 to-sky-50 py-20">
                <div class="max-w-5xl mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Gentle, expert care for every stage of childhood"
                    </h1>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto mb-8">
                        "Newborn check-ups, vaccinations, growth monitoring and the answers you need at 2 a.m."
                    </p>
                    <div class="flex justify-center gap-4">
                        <a href="/videos" class="px-6 py-3 bg-emerald-500 text-white rounded-lg hover:bg-emerald-600 transition-colors font-medium">
                            "Watch our videos"
                        </a>
                        <a href="/blog" class="px-6 py-3 bg-white text-gray-700 rounded-lg border border-gray-300 hover:bg-gray-50 transition-colors font-medium">
                            "Read the blog"
                        </a>
                    </div>
                </div>
            </section>

            <section id="reviews" class="reviews py-20 bg-white">
                <div class="max-w-5xl mx-auto px-4">
                    <SectionHeading
                        title="What Parents Say"
                        subtitle="Stories from families we have had the privilege to care for."
                    />
                    <ReviewsCarousel reviews=content::reviews() />
                </div>
            </section>
        </div>
    }
}
