//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormField, FormState};
use crate::forms::LoginForm as LoginInputs;
use crate::hooks::use_auth;

/// Shown instead of the app while nobody is signed in
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let state = FormState::new(LoginInputs::default());
    let form = state.form;
    let errors = state.errors;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            // On success the app swaps this form out for the main screens
            state
                .submit(LoginInputs::validate, |request| async move {
                    if auth.login(request).await {
                        Ok(())
                    } else {
                        Err(auth.error.get_untracked().unwrap_or_else(|| "Login failed".to_string()))
                    }
                })
                .await;
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1>"Estate Admin"</h1>
                <p class="dialog-description">"Sign in to manage fees, residents and apartments."</p>
                <FormField label="Username" errors=errors field=LoginInputs::USERNAME>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </FormField>
                <FormField label="Password" errors=errors field=LoginInputs::PASSWORD>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </FormField>
                {move || state.submit_error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
                <button type="submit" class="primary" disabled=move || auth.logging_in.is_pending()>
                    {move || if auth.logging_in.is_pending() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
