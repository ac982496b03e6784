//! Post Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::handlers;
use crate::shell::BrowserShell;
use crate::store::{store_set_posts, use_social_store};

/// Form for publishing a new post; the feed reloads afterwards
#[component]
pub fn PostForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    let (content, set_content) = signal(String::new());

    let create_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        if text.trim().is_empty() { return; }
        let Some(actor) = ctx.actor() else { return };

        spawn_local(async move {
            let posts = handlers::create_post(&actor, &BrowserShell, &text).await;
            if posts.is_some() {
                set_content.set(String::new());
            }
            store_set_posts(&store, posts);
        });
    };

    view! {
        <form id="post-form" class="bg-white p-4 rounded-lg shadow mb-4" on:submit=create_post>
            <textarea
                id="post-content"
                placeholder="What's on your mind?"
                class="p-2 w-full border rounded"
                prop:value=move || content.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_content.set(input.value());
                }
            ></textarea>
            <button type="submit" class="mt-2 bg-blue-500 text-white p-2 rounded">"Post"</button>
        </form>
    }
}
