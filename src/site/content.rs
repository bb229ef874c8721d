// site/content.rs - Static page content
//
// Blog summaries, parent reviews and the fallback video cards are part of
// the site itself, not fetched from anywhere.

use crate::site::model::{BlogPost, Category, Review, Video, ALL_CATEGORIES};

pub fn blog_categories() -> Vec<Category> {
    vec![
        Category::new(ALL_CATEGORIES, "All Posts"),
        Category::new("newborn-care", "Newborn Care"),
        Category::new("nutrition", "Nutrition"),
        Category::new("vaccination", "Vaccination"),
        Category::new("development", "Development"),
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    let post = |id, title: &str, excerpt: &str, category: &str, published: &str, read_minutes| BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        published: published.to_string(),
        read_minutes,
    };

    vec![
        post(
            1,
            "The First Two Weeks at Home",
            "Feeding cues, sleep patterns and the warning signs every new parent should know.",
            "newborn-care",
            "Jan 12, 2025",
            6,
        ),
        post(
            2,
            "Starting Solids Without the Stress",
            "When to begin, which first foods work best, and how to spot an allergy early.",
            "nutrition",
            "Jan 4, 2025",
            5,
        ),
        post(
            3,
            "Understanding the Immunisation Schedule",
            "A month-by-month walk through the vaccines your child receives in the first five years.",
            "vaccination",
            "Dec 18, 2024",
            8,
        ),
        post(
            4,
            "Milestones: What Is Normal at 18 Months?",
            "Walking, first words and play. A range, not a deadline.",
            "development",
            "Dec 2, 2024",
            4,
        ),
        post(
            5,
            "Umbilical Cord Care",
            "Keeping the stump clean and dry, and when redness means a visit to the clinic.",
            "newborn-care",
            "Nov 20, 2024",
            3,
        ),
        post(
            6,
            "Picky Eaters and Iron",
            "Simple swaps that keep toddlers' iron levels up without a battle at the table.",
            "nutrition",
            "Nov 8, 2024",
            5,
        ),
    ]
}

pub fn reviews() -> Vec<Review> {
    let review = |author: &str, relation: &str, text: &str| Review {
        author: author.to_string(),
        relation: relation.to_string(),
        rating: 5,
        text: text.to_string(),
    };

    vec![
        review(
            "Priya S.",
            "Mother of two",
            "Doctor explained everything patiently and never rushed us. Our daughter actually looks forward to her check-ups.",
        ),
        review(
            "Rahul M.",
            "Father of a newborn",
            "Calm, clear advice at two in the morning when we were panicking about a fever. We could not ask for more.",
        ),
        review(
            "Ananya K.",
            "Mother of a toddler",
            "The vaccination reminders and the gentle way shots are handled made a huge difference for my son.",
        ),
        review(
            "Vikram R.",
            "Father of twins",
            "Twins means double the questions. Every single one was answered with care and good humour.",
        ),
        review(
            "Meera J.",
            "Mother of three",
            "We have trusted this clinic with all three of our children. Thorough, kind and always available.",
        ),
        review(
            "Arjun P.",
            "Father of a 5-year-old",
            "Practical nutrition advice that finally got our picky eater to try vegetables. Highly recommended.",
        ),
    ]
}

/// Sample cards shown when the YouTube API is not configured
pub fn fallback_videos() -> Vec<Video> {
    let video = |title: &str, description: &str, published_at: &str, duration: &str| Video {
        id: "dQw4w9WgXcQ".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        published_at: published_at.to_string(),
        thumbnail_url: Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
        duration: duration.to_string(),
        view_count: 0,
    };

    vec![
        video(
            "Pediatric Care Tips",
            "Essential tips for pediatric care and child health management.",
            "2025-01-15T00:00:00Z",
            "PT5M30S",
        ),
        video(
            "Child Nutrition Guidelines",
            "Comprehensive guide to proper nutrition for growing children.",
            "2025-01-10T00:00:00Z",
            "PT8M45S",
        ),
        video(
            "Emergency Pediatric Care",
            "What to do in pediatric emergency situations and when to seek help.",
            "2025-01-05T00:00:00Z",
            "PT12M20S",
        ),
    ]
}
