// site/state/blog.rs - Blog category filter

use crate::site::model::{BlogPost, ALL_CATEGORIES};

/// Active category on the blog page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogFilter {
    active: String,
}

impl Default for BlogFilter {
    fn default() -> Self {
        Self {
            active: ALL_CATEGORIES.to_string(),
        }
    }
}

impl BlogFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Make `tag` the sole active category. Re-selecting is a no-op.
    pub fn select(&mut self, tag: &str) {
        if self.active != tag {
            self.active = tag.to_string();
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active == tag
    }

    pub fn shows(&self, post: &BlogPost) -> bool {
        self.active == ALL_CATEGORIES || post.category == self.active
    }

    /// Posts to display, in their original order
    pub fn visible<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|post| self.shows(post)).collect()
    }
}

/// Accessible name for the card at `index` (0-based) in document order
pub fn card_label(index: usize) -> String {
    format!("Blog post {}", index + 1)
}
