//! Comment Components

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::models::Comment;
use crate::shell::BrowserShell;
use crate::store::{store_set_posts, use_social_store};

/// One comment under a post
#[component]
pub fn CommentItem(post_id: u64, comment: Comment) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();
    let comment_id = comment.id;

    let on_edit = move |_| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            let posts = handlers::edit_comment(&actor, &BrowserShell, post_id, comment_id).await;
            store_set_posts(&store, posts);
        });
    };

    let on_delete = move |_| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            let posts = handlers::delete_comment(&actor, &BrowserShell, post_id, comment_id).await;
            store_set_posts(&store, posts);
        });
    };

    view! {
        <div class="mt-4 bg-gray-100 p-2 rounded">
            <p class="text-sm text-gray-700">{comment.author}</p>
            <p>{comment.content}</p>
            <button class="text-blue-500" on:click=on_edit>"Edit"</button>
            <button class="text-red-500" on:click=on_delete>"Delete"</button>
        </div>
    }
}

/// Inline "add a comment" form
#[component]
pub fn CommentForm(post_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = text.get();
        if content.trim().is_empty() { return; }
        let Some(actor) = ctx.actor() else { return };

        spawn_local(async move {
            let posts = handlers::add_comment(&actor, &BrowserShell, post_id, &content).await;
            if posts.is_some() {
                set_text.set(String::new());
            }
            store_set_posts(&store, posts);
        });
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a comment..."
                class="mt-2 p-2 w-full border rounded"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="mt-2 bg-blue-500 text-white p-2 rounded">"Comment"</button>
        </form>
    }
}
