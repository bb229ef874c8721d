// site/state/carousel.rs - Reviews carousel slide machine
//
// Reviews are shown two at a time. Transitions wrap around in both
// directions, but the prev/next buttons report themselves disabled at the
// ends, so button navigation appears to stop while the timer, the dots and
// the arrow keys keep cycling.

use std::time::Duration;

/// Interval between automatic advances
pub const AUTO_ROTATE_INTERVAL: Duration = Duration::from_millis(4000);

pub const REVIEWS_PER_SLIDE: usize = 2;

/// Rendered card width in pixels (min-width plus border)
pub const CARD_WIDTH_PX: i64 = 400;

/// Gap between cards in pixels (2rem)
pub const CARD_GAP_PX: i64 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
    hovered: bool,
    hidden: bool,
    /// Bumped on every manual navigation so the timer restarts
    interactions: u64,
}

/// What the navigation controls should look like for the current slide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Carousel {
    /// One slide per pair of reviews, rounded up
    pub fn new(review_count: usize) -> Self {
        Self {
            current: 0,
            total: review_count.div_ceil(REVIEWS_PER_SLIDE),
            hovered: false,
            hidden: false,
            interactions: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Automatic advance; does not count as an interaction
    pub fn tick(&mut self) {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
    }

    pub fn next(&mut self) {
        self.tick();
        self.interactions += 1;
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
        self.interactions += 1;
    }

    /// Jump to `index`, clamped into range
    pub fn go_to(&mut self, index: usize) {
        if self.total > 0 {
            self.current = index.min(self.total - 1);
        }
        self.interactions += 1;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_page_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn auto_rotating(&self) -> bool {
        self.total > 1 && !self.hovered && !self.hidden
    }

    /// Changes whenever the auto-rotate timer must be cancelled and restarted
    pub fn timer_epoch(&self) -> u64 {
        self.interactions
    }

    pub fn controls(&self) -> CarouselControls {
        CarouselControls {
            prev_disabled: self.current == 0,
            next_disabled: self.total == 0 || self.current == self.total - 1,
        }
    }

    /// Horizontal translation of the review strip in pixels
    pub fn offset_px(&self) -> i64 {
        -(self.current as i64 * REVIEWS_PER_SLIDE as i64 * (CARD_WIDTH_PX + CARD_GAP_PX))
    }

    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset_px())
    }

    /// Whether the review at `index` belongs to the visible pair
    pub fn card_active(&self, index: usize) -> bool {
        index / REVIEWS_PER_SLIDE == self.current
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        index == self.current
    }
}
