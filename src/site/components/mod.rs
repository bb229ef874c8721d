// site/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the site.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Modal, Reveal, etc.)
// - blog.rs: Blog filter buttons and cards
// - reviews.rs: Reviews carousel
// - videos.rs: Video cards, player modal body, load-more control

pub mod common;
pub mod blog;
pub mod reviews;
pub mod videos;

// Re-export commonly used components for convenience
pub use common::*;
pub use blog::*;
pub use reviews::*;
pub use videos::*;
