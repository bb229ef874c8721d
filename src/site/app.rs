// site/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags, routing and the shared page chrome.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::site::pages::{BlogPage, HomePage, VideosPage};

pub const SITE_TITLE: &str = "Dr. Varun | Paediatrician";

/// Root application component
///
/// Sets up:
/// - Meta tags for SEO
/// - Router with one route per page
/// - Header navigation and footer
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content="Paediatric care, parenting advice and child health videos" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/pediatric_site.css" />

        <Router>
            <SiteHeader />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/videos") view=VideosPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <A href="/">
                    <span class="text-xl font-bold text-emerald-600">"Dr. Varun"</span>
                </A>
                <div class="flex gap-6 text-gray-600 font-medium">
                    <A href="/">"Home"</A>
                    <A href="/blog">"Blog"</A>
                    <A href="/videos">"Videos"</A>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 py-8">
            <div class="max-w-6xl mx-auto px-4 text-center text-gray-500 text-sm">
                <p>"© 2025 Dr. Varun Paediatric Clinic. Built with Leptos and Actix."</p>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-emerald-500 text-white rounded-lg hover:bg-emerald-600 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}

/// Full HTML document used by the server for every route
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
