//! Post Card Component
//!
//! A post with its comments, edit/delete actions and a comment form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CommentForm, CommentItem};
use crate::context::use_app_context;
use crate::handlers;
use crate::models::Post;
use crate::shell::BrowserShell;
use crate::store::{store_set_posts, use_social_store};

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    let id = post.id;
    let author_url = ctx.config().profile_url(&post.author);
    let posted_at = post.display_time();

    let on_edit = move |_| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            store_set_posts(&store, handlers::edit_post(&actor, &BrowserShell, id).await);
        });
    };

    let on_delete = move |_| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            store_set_posts(&store, handlers::delete_post(&actor, &BrowserShell, id).await);
        });
    };

    let comments = post.comments
        .into_iter()
        .map(|comment| view! { <CommentItem post_id=id comment=comment /> })
        .collect_view();

    view! {
        <div class="bg-white p-4 rounded-lg shadow mb-4">
            <a class="text-sm text-gray-700" href=author_url>{post.author}</a>
            <p class="text-lg text-black">{post.content}</p>
            <small class="text-gray-500">{posted_at}</small>
            <div class="post-actions flex gap-2">
                <button class="text-red-500" on:click=on_delete>"Delete"</button>
                <button class="text-blue-500" on:click=on_edit>"Edit"</button>
            </div>
            <div id=format!("comments-{}", id)>
                {comments}
                <CommentForm post_id=id />
            </div>
        </div>
    }
}
