// site/components/blog.rs - Blog listing components
//
// - CategoryButtons: filter controls, exactly one marked active
// - BlogCard: post summary card
// - BlogGrid: filtered, focusable card list

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use super::common::{Badge, Reveal};
use crate::site::model::{BlogPost, Category};
use crate::site::state::blog::card_label;
use crate::site::state::BlogFilter;

/// Category filter buttons
#[component]
pub fn CategoryButtons(
    /// Available categories, "all" first
    categories: Vec<Category>,
    /// Shared filter state
    filter: RwSignal<BlogFilter>,
) -> impl IntoView {
    view! {
        <div class="blog-categories flex flex-wrap justify-center gap-3 mb-10" role="toolbar">
            {categories.into_iter().map(|category| {
                let tag = StoredValue::new(category.tag.clone());
                let select = move || tag.with_value(|tag| filter.update(|f| f.select(tag)));

                view! {
                    <button
                        type="button"
                        data-category=category.tag.clone()
                        class=move || {
                            let active = tag.with_value(|tag| filter.with(|f| f.is_active(tag)));
                            if active {
                                "category-btn active px-5 py-2 rounded-full bg-emerald-500 text-white font-medium shadow-sm"
                            } else {
                                "category-btn px-5 py-2 rounded-full bg-white text-gray-700 border border-gray-200 hover:bg-emerald-50 font-medium"
                            }
                        }
                        aria-pressed=move || tag.with_value(|tag| filter.with(|f| f.is_active(tag))).to_string()
                        on:click=move |_| select()
                        on:keydown=move |ev: KeyboardEvent| {
                            let key = ev.key();
                            if key == "Enter" || key == " " {
                                ev.prevent_default();
                                select();
                            }
                        }
                    >
                        {category.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Blog post card
#[component]
pub fn BlogCard(
    post: BlogPost,
    /// Accessible name, e.g. "Blog post 3"
    label: String,
) -> impl IntoView {
    let category = post.category.clone();
    let category_label = post.category.replace('-', " ");
    view! {
        <article
            class="blog-card bg-white rounded-xl shadow-sm hover:shadow-lg transition-shadow border border-gray-100 p-6 h-full flex flex-col animate-fade-in focus:outline-2 focus:outline-emerald-500"
            data-category=category
            aria-label=label
            tabindex="0"
        >
            <div class="flex justify-between items-center mb-3 text-xs text-gray-500">
                <Badge variant="green">{category_label}</Badge>
                <span>{post.published.clone()}</span>
            </div>
            <h3 class="text-lg font-bold text-gray-900 mb-2">{post.title.clone()}</h3>
            <p class="text-gray-600 text-sm flex-1">{post.excerpt.clone()}</p>
            <span class="mt-4 text-xs text-gray-400">{format!("{} min read", post.read_minutes)}</span>
        </article>
    }
}

/// Filtered post list
///
/// Cards are keyed by (category, id) so switching category re-mounts them
/// and the entrance animation plays again.
#[component]
pub fn BlogGrid(
    posts: Vec<BlogPost>,
    filter: RwSignal<BlogFilter>,
    /// Focus target for the Alt+M shortcut
    region: NodeRef<leptos::html::Section>,
) -> impl IntoView {
    let posts = StoredValue::new(posts);
    let visible = move || {
        let active = filter.with(|f| f.active().to_string());
        posts.with_value(|posts| {
            filter.with(|f| {
                posts
                    .iter()
                    .enumerate()
                    .filter(|(_, post)| f.shows(post))
                    .map(|(index, post)| (active.clone(), index, post.clone()))
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <section node_ref=region class="blog-posts outline-none" tabindex="-1" aria-label="Blog posts">
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! {
                    <p class="text-center text-gray-500 py-16">"No posts in this category yet."</p>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=visible
                        key=|(active, _, post)| (active.clone(), post.id)
                        children=move |(_, index, post)| view! {
                            <Reveal>
                                <BlogCard post=post label=card_label(index) />
                            </Reveal>
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
