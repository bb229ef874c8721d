// site/api/mod.rs - Server-side API modules
//
// This module is only compiled with the `ssr` feature. The credential never
// leaves the server; the browser only sees merged `VideoPage`s.

pub mod youtube;

pub use youtube::YouTubeClient;
