//! Apartment Dialog and Detail Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FormField, FormState, ResidentCreateDialog, SubmitError};
use crate::context::use_app_context;
use crate::forms::ApartmentForm;
use crate::hooks::{use_apartment, AsyncCallback, Mutation};
use crate::models::{Apartment, ApartmentRequest, ResidentRequest};

/// What the dialog is doing
#[derive(Debug, Clone, PartialEq)]
pub enum ApartmentEdit {
    Create,
    Update(Apartment),
}

/// Create or edit dialog; `target` set to `None` closes it
#[component]
pub fn ApartmentDialog(
    target: RwSignal<Option<ApartmentEdit>>,
    on_submit: AsyncCallback<(Option<i64>, ApartmentRequest)>,
) -> impl IntoView {
    let state = FormState::new(ApartmentForm::default());
    let form = state.form;
    let errors = state.errors;

    Effect::new(move |_| match target.get() {
        Some(ApartmentEdit::Create) => state.reset(ApartmentForm::default()),
        Some(ApartmentEdit::Update(apartment)) => state.reset(ApartmentForm::from_apartment(&apartment)),
        None => {}
    });

    let editing_id = move || {
        target.with(|t| match t {
            Some(ApartmentEdit::Update(a)) => Some(a.id),
            _ => None,
        })
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = target.with_untracked(|t| match t {
            Some(ApartmentEdit::Update(a)) => Some(a.id),
            _ => None,
        });
        spawn_local(async move {
            if state.submit(ApartmentForm::validate, |request| on_submit.call((id, request))).await {
                target.set(None);
            }
        });
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| target.set(None)>
                <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || if editing_id().is_some() { "Edit Apartment" } else { "Add Apartment" }}</h2>
                    <form on:submit=on_form_submit>
                        <FormField label="Name" errors=errors field=ApartmentForm::NAME>
                            <input
                                type="text"
                                placeholder="e.g. A-1203"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </FormField>
                        <FormField label="Area (m²)" errors=errors field=ApartmentForm::AREA>
                            <input
                                type="text"
                                inputmode="numeric"
                                prop:value=move || form.with(|f| f.area.clone())
                                on:input=move |ev| form.update(|f| f.area = event_target_value(&ev))
                            />
                        </FormField>
                        <SubmitError error=state.submit_error />
                        <div class="dialog-actions">
                            <button type="button" on:click=move |_| target.set(None)>"Cancel"</button>
                            <button type="submit" class="primary" disabled=move || state.is_pending()>
                                {move || match (state.is_pending(), editing_id().is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Save Changes",
                                    (false, false) => "Create Apartment",
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Apartment facts plus a shortcut to register a resident in it
#[component]
pub fn ApartmentDetail(apartment_id: RwSignal<Option<i64>>) -> impl IntoView {
    move || {
        apartment_id.get().map(|id| {
            let apartment = use_apartment(id);
            let client = use_app_context().api;
            let saving = Mutation::new();
            let adding = RwSignal::new(false);
            let on_create = AsyncCallback::new(move |request: ResidentRequest| async move {
                let client = client.get_value();
                saving
                    .run(format!("Resident added to apartment #{}", id), async move {
                        api::create_resident(&client, &request).await
                    })
                    .await
                    .map_err(|e| e.to_string())
            });

            view! {
                <aside class="detail-panel">
                    <header class="drawer-header">
                        <h2>{move || apartment.data.with(|a| a.as_ref().map(|a| a.name.clone()))}</h2>
                        <button class="close-btn" aria-label="Close" on:click=move |_| apartment_id.set(None)>
                            "×"
                        </button>
                    </header>
                    {move || apartment.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <Show when=move || apartment.loading.get()>
                        <div class="loading">"Loading..."</div>
                    </Show>
                    {move || {
                        apartment.data.get().map(|a| {
                            view! {
                                <dl class="detail-list">
                                    <dt>"ID"</dt>
                                    <dd>{a.id}</dd>
                                    <dt>"Area"</dt>
                                    <dd>{a.area.map(|m| format!("{} m²", m)).unwrap_or_else(|| "-".to_string())}</dd>
                                </dl>
                            }
                        })
                    }}
                    <div class="dialog-actions">
                        <button class="primary" on:click=move |_| adding.set(true)>
                            "+ Add Resident"
                        </button>
                    </div>
                    <ResidentCreateDialog open=adding apartment_id=id on_submit=on_create />
                </aside>
            }
        })
    }
}
