// tests/component_render_tests.rs
// Server-side render tests for the site components

use leptos::prelude::*;

use pediatric_site::site::components::*;
use pediatric_site::site::content;
use pediatric_site::site::model::Video;
use pediatric_site::site::state::BlogFilter;

fn render<V: IntoView + 'static>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

fn video(title: &str, description: &str) -> Video {
    Video {
        id: "abc123".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        published_at: "2025-01-15T09:30:00Z".to_string(),
        thumbnail_url: None,
        duration: "PT4M5S".to_string(),
        view_count: 1234,
    }
}

// ===== Video components =====

#[test]
fn test_video_card_escapes_markup() {
    let html = render(|| {
        view! {
            <VideoCard
                video=video("<script>alert(1)</script>", "<b>not bold</b>")
                on_select=Callback::new(|_: String| {})
            />
        }
    });

    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;b&gt;not bold&lt;/b&gt;"));
    assert!(html.contains("Jan 15, 2025"));
    assert!(html.contains("4:05"));
}

#[test]
fn test_fallback_card_links_to_channel() {
    let sample = content::fallback_videos().remove(0);
    let html = render(move || {
        view! {
            <FallbackCard
                video=sample
                channel_url="https://www.youtube.com/@Dr.VarunPaediatrican".to_string()
            />
        }
    });

    assert!(html.contains(r#"href="https://www.youtube.com/@Dr.VarunPaediatrican""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains("Pediatric Care Tips"));
    assert!(html.contains("5:30"));
}

#[test]
fn test_video_player_details() {
    let html = render(|| {
        view! { <VideoPlayer video=video("Croup explained", "<i>Barking</i> cough\nSee a doctor") /> }
    });

    assert!(html.contains("https://www.youtube.com/embed/abc123?autoplay=1&amp;rel=0")
        || html.contains("https://www.youtube.com/embed/abc123?autoplay=1&rel=0"));
    assert!(html.contains("January 15, 2025"));
    assert!(html.contains("1,234 views"));
    assert!(html.contains("&lt;i&gt;Barking&lt;/i&gt; cough<br>See a doctor"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("https://www.youtube.com/watch?v=abc123"));
}

#[test]
fn test_load_more_button_label() {
    let html = render(|| {
        view! {
            <LoadMoreButton
                label=Signal::derive(|| "Load More Videos")
                busy=Signal::derive(|| false)
                on_click=Callback::new(|_: ()| {})
            />
        }
    });

    assert!(html.contains(r#"id="load-more""#));
    assert!(html.contains("Load More Videos"));
}

// ===== Common components =====

#[test]
fn test_error_display_retry_button_is_optional() {
    let without = render(|| view! { <ErrorDisplay message="Something went wrong" /> });
    assert!(without.contains("Something went wrong"));
    assert!(!without.contains("Try again"));

    let with = render(|| {
        view! { <ErrorDisplay message="Something went wrong" on_retry=Callback::new(|_: ()| {}) /> }
    });
    assert!(with.contains("Try again"));
}

#[test]
fn test_loading_default_message() {
    let html = render(|| view! { <Loading /> });
    assert!(html.contains(r#"id="loading""#));
    assert!(html.contains("Loading..."));
}

#[test]
fn test_star_rating_counts() {
    let html = render(|| view! { <StarRating rating=4 /> });
    assert_eq!(html.matches("text-yellow-400").count(), 4);
    assert_eq!(html.matches("text-gray-200").count(), 1);
}

// ===== Blog components =====

#[test]
fn test_category_buttons_mark_one_active() {
    let html = render(|| {
        let filter = RwSignal::new(BlogFilter::default());
        filter.update(|f| f.select("nutrition"));
        view! { <CategoryButtons categories=content::blog_categories() filter=filter /> }
    });

    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 4);
    assert!(html.contains(r#"data-category="nutrition""#));
}

#[test]
fn test_blog_grid_labels_follow_document_order() {
    let html = render(|| {
        let filter = RwSignal::new(BlogFilter::default());
        filter.update(|f| f.select("vaccination"));
        let region = NodeRef::new();
        view! { <BlogGrid posts=content::blog_posts() filter=filter region=region /> }
    });

    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains(r#"aria-label="Blog post 3""#));
    assert!(html.contains(r#"tabindex="0""#));
}

#[test]
fn test_blog_grid_shows_all_posts_by_default() {
    let html = render(|| {
        let filter = RwSignal::new(BlogFilter::default());
        let region = NodeRef::new();
        view! { <BlogGrid posts=content::blog_posts() filter=filter region=region /> }
    });

    assert_eq!(html.matches("<article").count(), content::blog_posts().len());
    assert!(!html.contains("No posts in this category yet."));
}

#[test]
fn test_review_card_shows_author_and_stars() {
    let review = content::reviews().remove(0);
    let author = review.author.clone();
    let html = render(move || {
        view! { <ReviewCard review=review active=Signal::derive(|| true) /> }
    });

    assert!(html.contains(&author));
    assert!(html.contains("text-yellow-400"));
}
