//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::handlers;
use crate::routes::Page;
use crate::shell::BrowserShell;

/// Top bar: sign-up/login links when signed out, page links and logout otherwise
#[component]
pub fn NavBar(page: Page) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let signed_out = matches!(page, Page::Login | Page::Register);

    let on_logout = move |_| handlers::logout(&BrowserShell, &ctx.config());

    view! {
        <nav class="nav-bar bg-white shadow p-4 flex gap-4">
            <span class="font-bold">"SocialIC"</span>
            {if signed_out {
                view! {
                    <a id="signup-link" class="text-blue-500" href=config.page_url(Page::Register)>"Sign up"</a>
                    <a class="text-blue-500" href=config.page_url(Page::Login)>"Log in"</a>
                }.into_any()
            } else {
                view! {
                    <a class="text-blue-500" href=config.page_url(Page::Home)>"Home"</a>
                    <a class="text-blue-500" href=config.page_url(Page::Followers)>"Followers"</a>
                    <button id="logout" class="text-red-500 ml-auto" on:click=on_logout>"Log out"</button>
                }.into_any()
            }}
        </nav>
    }
}
