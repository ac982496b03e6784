//! SocialIC Frontend App
//!
//! Root component: provides context and mounts the page named by the URL.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DebugLog, FollowersPage, HomePage, LoginForm, NavBar, ProfilePage, RegisterForm};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::routes::{self, Page};
use crate::store::SocialState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(AppContext::new(config));
    provide_context(Store::new(SocialState::default()));

    let (page, search) = routes::current_location();
    log::debug!("Mounting {:?} page", page);

    let debug = routes::query_param(&search, "debug").is_some();
    let content = match page {
        Page::Register => view! { <RegisterForm /> }.into_any(),
        Page::Login => view! { <LoginForm /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Profile => view! { <ProfilePage user=routes::query_param(&search, "user") /> }.into_any(),
        Page::Followers => view! { <FollowersPage /> }.into_any(),
    };

    view! {
        <div class="app-layout min-h-screen bg-gray-100">
            <NavBar page=page />
            <main class="main-content max-w-2xl mx-auto p-4">
                {content}
            </main>
            <Show when=move || debug>
                <DebugLog />
            </Show>
        </div>
    }
}
