//! Home Page Component
//!
//! Profile guard plus the post feed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{PostCard, PostForm};
use crate::context::use_app_context;
use crate::handlers;
use crate::shell::BrowserShell;
use crate::store::{store_set_posts, use_social_store, SocialStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    // Users without a profile are sent to registration before anything loads
    Effect::new(move |_| {
        let Some(actor) = ctx.actor() else { return };
        let config = ctx.config();
        spawn_local(async move {
            if let Some(profile) = handlers::check_home(&actor, &BrowserShell, &config).await {
                store.me().set(Some(profile));
                store_set_posts(&store, handlers::load_posts(&actor, &BrowserShell).await);
            }
        });
    });

    view! {
        <section id="home-page">
            {move || store.me().get().map(|me| view! {
                <div class="bg-white p-4 rounded-lg shadow mb-4">
                    <p class="text-lg">"Welcome, " {me.username}</p>
                    <p class="text-sm text-gray-500">{me.bio}</p>
                    {me.id.map(|id| view! { <p class="text-xs text-gray-400">{id}</p> })}
                </div>
            })}
            <Show
                when=move || store.me().get().is_some()
                fallback=|| view! { <p class="text-gray-500">"Checking your profile..."</p> }
            >
                <PostForm />
                <div id="posts-list">
                    {move || {
                        store.posts().get()
                            .into_iter()
                            .map(|post| view! { <PostCard post=post /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
