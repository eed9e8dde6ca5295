//! Resident Create Dialog and Detail Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormField, FormState, SubmitError};
use crate::format::today;
use crate::forms::ResidentForm;
use crate::hooks::{use_apartment_options, use_resident, AsyncCallback};
use crate::models::{Relation, ResidentRequest, StayStatus, GENDERS};

/// Create dialog. With `apartment_id` the apartment select is fixed to it.
#[component]
pub fn ResidentCreateDialog(
    open: RwSignal<bool>,
    #[prop(optional)] apartment_id: Option<i64>,
    on_submit: AsyncCallback<ResidentRequest>,
) -> impl IntoView {
    let blank = move || ResidentForm::new(today(), apartment_id);
    let state = FormState::new(blank());
    let form = state.form;
    let errors = state.errors;
    let apartments = use_apartment_options();

    let close = move || {
        open.set(false);
        state.reset(blank());
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if state.submit(ResidentForm::validate, |request| on_submit.call(request)).await {
                close();
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog wide" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h2>"Add Resident"</h2>
                    <form on:submit=on_form_submit>
                        <div class="form-grid">
                            <FormField label="Full Name" errors=errors field=ResidentForm::FULL_NAME>
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.full_name.clone())
                                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                                />
                            </FormField>
                            <FormField label="Date of Birth" errors=errors field=ResidentForm::DOB>
                                <input
                                    type="date"
                                    prop:value=move || form.with(|f| f.dob.clone())
                                    on:input=move |ev| form.update(|f| f.dob = event_target_value(&ev))
                                />
                            </FormField>
                            <FormField label="CCCD" errors=errors field=ResidentForm::CCCD>
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    prop:value=move || form.with(|f| f.cccd.clone())
                                    on:input=move |ev| form.update(|f| f.cccd = event_target_value(&ev))
                                />
                            </FormField>
                            <FormField label="Gender" errors=errors field=ResidentForm::GENDER>
                                <select
                                    prop:value=move || form.with(|f| f.gender.clone())
                                    on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                                >
                                    <option value="">"Select gender"</option>
                                    {GENDERS
                                        .iter()
                                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                        .collect_view()}
                                </select>
                            </FormField>
                            <FormField label="Occupation" errors=errors field=ResidentForm::OCCUPATION>
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.occupation.clone())
                                    on:input=move |ev| form.update(|f| f.occupation = event_target_value(&ev))
                                />
                            </FormField>
                            <FormField label="Phone Number" errors=errors field=ResidentForm::PHONE>
                                <input
                                    type="tel"
                                    prop:value=move || form.with(|f| f.phone_number.clone())
                                    on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                                />
                            </FormField>
                            <FormField label="Apartment" errors=errors field=ResidentForm::APARTMENT>
                                <select
                                    disabled=move || form.with(|f| f.apartment_locked)
                                    prop:value=move || form.with(|f| f.apartment_id.clone())
                                    on:change=move |ev| form.update(|f| f.set_apartment(event_target_value(&ev)))
                                >
                                    <option value="">
                                        {move || if apartments.is_loading() { "Loading..." } else { "Select apartment" }}
                                    </option>
                                    {move || {
                                        apartments
                                            .rows()
                                            .into_iter()
                                            .map(|a| view! { <option value=a.id.to_string()>{a.name}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </FormField>
                            <FormField label="Relation" errors=errors field=ResidentForm::RELATION>
                                <select
                                    prop:value=move || form.with(|f| f.relation.clone())
                                    on:change=move |ev| form.update(|f| f.relation = event_target_value(&ev))
                                >
                                    <option value="">"Select relation"</option>
                                    {Relation::ALL
                                        .into_iter()
                                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                        .collect_view()}
                                </select>
                            </FormField>
                            <FormField label="Stay Status" errors=errors field=ResidentForm::STAY_STATUS>
                                <select
                                    prop:value=move || form.with(|f| f.stay_status.clone())
                                    on:change=move |ev| form.update(|f| f.stay_status = event_target_value(&ev))
                                >
                                    {StayStatus::ALL
                                        .into_iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                        .collect_view()}
                                </select>
                            </FormField>
                        </div>
                        <SubmitError error=state.submit_error />
                        <div class="dialog-actions">
                            <button type="button" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="primary" disabled=move || state.is_pending()>
                                {move || if state.is_pending() { "Creating..." } else { "Create Resident" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Fetches and shows the resident with the selected id
#[component]
pub fn ResidentDetail(resident_id: RwSignal<Option<i64>>) -> impl IntoView {
    move || {
        resident_id.get().map(|id| {
            let resident = use_resident(id);
            view! {
                <aside class="detail-panel">
                    <header class="drawer-header">
                        <h2>{move || resident.data.with(|r| r.as_ref().map(|r| r.full_name.clone()))}</h2>
                        <button class="close-btn" aria-label="Close" on:click=move |_| resident_id.set(None)>
                            "×"
                        </button>
                    </header>
                    {move || resident.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <Show when=move || resident.loading.get()>
                        <div class="loading">"Loading..."</div>
                    </Show>
                    {move || {
                        resident.data.get().map(|r| {
                            view! {
                                <dl class="detail-list">
                                    <dt>"Date of Birth"</dt>
                                    <dd>{r.dob}</dd>
                                    <dt>"CCCD"</dt>
                                    <dd>{r.cccd}</dd>
                                    <dt>"Gender"</dt>
                                    <dd>{r.gender}</dd>
                                    <dt>"Occupation"</dt>
                                    <dd>{r.occupation}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{r.phone_number}</dd>
                                    <dt>"Apartment"</dt>
                                    <dd>{r.apartment_id.map(|id| format!("#{}", id)).unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Relation"</dt>
                                    <dd>{r.relation.label()}</dd>
                                    <dt>"Stay Status"</dt>
                                    <dd>{r.stay_status.label()}</dd>
                                </dl>
                            }
                        })
                    }}
                </aside>
            }
        })
    }
}
