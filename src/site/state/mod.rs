// site/state/mod.rs - Pure widget state
//
// Each widget keeps its logic state here as a plain struct. Components hold
// one inside a signal and render from it; nothing is read back from the DOM.
//
// - blog.rs: category filter
// - carousel.rs: reviews carousel slide machine
// - gallery.rs: video gallery loading / paging / view state

pub mod blog;
pub mod carousel;
pub mod gallery;

pub use blog::BlogFilter;
pub use carousel::{Carousel, CarouselControls};
pub use gallery::{GalleryView, PageRequest, VideoGallery};
