// site/pages/mod.rs - Page components module
//
// Each page is a top-level route component that composes
// multiple smaller components from the components module.

pub mod home;
pub mod blog;
pub mod videos;

pub use home::HomePage;
pub use blog::BlogPage;
pub use videos::VideosPage;
