//! Profile Page Component
//!
//! Another user's profile with a follow/unfollow toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::shell::BrowserShell;
use crate::store::{store_set_follow_lists, use_social_store, SocialStateStoreFields};

#[component]
pub fn ProfilePage(user: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_social_store();

    let Some(user) = user else {
        return view! { <p class="text-gray-500">"No user selected."</p> }.into_any();
    };
    let target = StoredValue::new(user);
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        let Some(actor) = ctx.actor() else { return };
        let user = target.get_value();
        spawn_local(async move {
            let profile = handlers::load_profile(&actor, &BrowserShell, &user).await;
            let found = profile.is_some();
            store.viewed_profile().set(profile);
            set_loaded.set(true);
            if found {
                let state = handlers::follow_state(&actor, &BrowserShell, &user).await;
                store.following_viewed().set(state);
            }
        });
    });

    let on_toggle = move |_| {
        let Some(actor) = ctx.actor() else { return };
        let user = target.get_value();
        spawn_local(async move {
            if let Some((following, lists)) = handlers::toggle_follow(&actor, &BrowserShell, &user).await {
                store.following_viewed().set(Some(following));
                store_set_follow_lists(&store, lists);
            }
        });
    };

    let button_label = move || match store.following_viewed().get() {
        Some(true) => "Unfollow",
        Some(false) => "Follow",
        None => "Follow / Unfollow",
    };

    view! {
        <section id="profile-page" class="bg-white p-4 rounded-lg shadow">
            {move || match (loaded.get(), store.viewed_profile().get()) {
                (false, _) => view! { <p class="text-gray-500">"Loading profile..."</p> }.into_any(),
                (true, None) => view! { <p class="text-gray-500">"Profile not found."</p> }.into_any(),
                (true, Some(profile)) => view! {
                    <h1 id="username" class="text-xl">{profile.username}</h1>
                    <p id="bio" class="text-gray-700">{profile.bio}</p>
                    <button
                        id="follow-button"
                        class="mt-2 bg-blue-500 text-white p-2 rounded"
                        on:click=on_toggle
                    >
                        {button_label}
                    </button>
                }.into_any(),
            }}
        </section>
    }
    .into_any()
}
