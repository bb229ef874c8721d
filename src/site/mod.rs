// site/mod.rs - Root module for the Leptos site
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - config.rs / error.rs: gallery configuration and error taxonomy
// - format.rs: duration, date and text formatting helpers
// - content.rs: static blog posts, reviews and fallback videos
// - state/: pure widget state machines (blog filter, carousel, gallery)
// - feed.rs: YouTube wire types and the three-step fetch pipeline
// - api/: reqwest-backed YouTube client (SSR only)
// - server_fns.rs: server function declarations (both client and server)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod error;
pub mod format;
pub mod content;
pub mod state;
pub mod feed;

// API module for talking to YouTube (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
