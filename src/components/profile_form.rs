//! Profile Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormField, FormState, SubmitError};
use crate::forms::UserForm;
use crate::hooks::use_auth;

#[component]
pub fn ProfileForm() -> impl IntoView {
    let auth = use_auth();
    let initial = UserForm {
        username: auth.session().map(|s| s.username).unwrap_or_default(),
        ..UserForm::default()
    };
    let state = FormState::new(initial);
    let form = state.form;
    let errors = state.errors;
    let saved = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        saved.set(false);
        spawn_local(async move {
            let ok = state
                .submit(UserForm::validate, |request| async move {
                    auth.update_user(request).await.map_err(|e| e.to_string())
                })
                .await;
            if ok {
                form.update(|f| f.password.clear());
                saved.set(true);
            }
        });
    };

    view! {
        <section class="profile-screen">
            <form class="profile-card" on:submit=on_submit>
                <h2>"Profile"</h2>
                <FormField label="Username" errors=errors field=UserForm::USERNAME>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </FormField>
                <FormField label="New Password" errors=errors field=UserForm::PASSWORD>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </FormField>
                <FormField label="Email" errors=errors field=UserForm::EMAIL>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </FormField>
                <SubmitError error=state.submit_error />
                <Show when=move || saved.get()>
                    <p class="form-success" role="status">"Profile updated."</p>
                </Show>
                <button type="submit" class="primary" disabled=move || state.is_pending()>
                    {move || if state.is_pending() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </section>
    }
}
