//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::shell::BrowserShell;

/// Profile creation form; redirects to login on success
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() { return; }
        let Some(actor) = ctx.actor() else { return };
        let config = ctx.config();
        let name = username.get();
        let about = bio.get();

        set_submitting.set(true);
        spawn_local(async move {
            handlers::register(&actor, &BrowserShell, &config, &name, &about).await;
            set_submitting.set(false);
        });
    };

    view! {
        <form id="register-form" class="bg-white p-4 rounded-lg shadow" on:submit=on_submit>
            <h1 class="text-xl mb-4">"Create your profile"</h1>
            <input
                id="username"
                type="text"
                placeholder="Username"
                class="p-2 w-full border rounded"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <textarea
                id="bio"
                placeholder="Tell people about yourself"
                class="mt-2 p-2 w-full border rounded"
                prop:value=move || bio.get()
                on:input=move |ev| set_bio.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="mt-2 bg-blue-500 text-white p-2 rounded"
                disabled=move || submitting.get()
            >
                "Register"
            </button>
        </form>
    }
}
