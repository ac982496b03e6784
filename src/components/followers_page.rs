//! Followers Page Component
//!
//! Followers (with accept) and followees (with unfollow), side by side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::models::UserSummary;
use crate::shell::BrowserShell;
use crate::store::{store_set_follow_lists, use_social_store, SocialStateStoreFields};

/// A user entry with one action button; the callback receives the principal
#[component]
fn UserRow(
    user: UserSummary,
    #[prop(into)] action_label: String,
    #[prop(into)] action_class: String,
    on_action: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let profile_url = ctx.config().profile_url(&user.id);
    let principal = user.id.clone();

    view! {
        <div class="bg-white p-4 rounded-lg shadow mb-4">
            <a class="text-lg text-black" href=profile_url>{user.username}</a>
            <button class=action_class on:click=move |_| on_action.run(principal.clone())>
                {action_label}
            </button>
        </div>
    }
}

#[component]
pub fn FollowersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    Effect::new(move |_| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            store_set_follow_lists(&store, handlers::load_follow_lists(&actor, &BrowserShell).await);
        });
    });

    let accept = Callback::new(move |follower: String| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            let lists = handlers::accept_follow_request(&actor, &BrowserShell, &follower).await;
            store_set_follow_lists(&store, lists);
        });
    });

    let unfollow = Callback::new(move |followee: String| {
        let Some(actor) = ctx.actor() else { return };
        spawn_local(async move {
            if let Some((_, lists)) = handlers::toggle_follow(&actor, &BrowserShell, &followee).await {
                store_set_follow_lists(&store, lists);
            }
        });
    });

    view! {
        <section id="followers-page" class="grid grid-cols-2 gap-4">
            <div>
                <h2 class="text-xl mb-2">"Followers"</h2>
                <div id="followers-list">
                    <For
                        each=move || store.followers().get()
                        key=|user| user.id.clone()
                        children=move |user| view! {
                            <UserRow user=user action_label="Accept" action_class="text-blue-500" on_action=accept />
                        }
                    />
                </div>
            </div>
            <div>
                <h2 class="text-xl mb-2">"Following"</h2>
                <div id="followees-list">
                    <For
                        each=move || store.followees().get()
                        key=|user| user.id.clone()
                        children=move |user| view! {
                            <UserRow user=user action_label="Unfollow" action_class="text-red-500" on_action=unfollow />
                        }
                    />
                </div>
            </div>
        </section>
    }
}
