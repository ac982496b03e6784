//! Login Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::handlers;
use crate::shell::BrowserShell;

/// Sends the user to Internet Identity, which returns to the home page
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handlers::login(&BrowserShell, &ctx.config());
    };

    view! {
        <form id="login-form" class="bg-white p-4 rounded-lg shadow" on:submit=on_submit>
            <h1 class="text-xl mb-4">"Welcome back"</h1>
            <button type="submit" class="bg-blue-500 text-white p-2 rounded">
                "Log in with Internet Identity"
            </button>
        </form>
    }
}
