//! Fee Create Dialog and Edit Drawer
//!
//! Both share the same field set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormField, FormState, SubmitError};
use crate::format::{month_key, today};
use crate::forms::FeeForm;
use crate::hooks::AsyncCallback;
use crate::models::{Fee, FeeRequest};

#[component]
fn FeeFields(state: FormState<FeeForm>) -> impl IntoView {
    let form = state.form;
    let errors = state.errors;

    view! {
        <FormField label="Fee Type" errors=errors field=FeeForm::TYPE>
            <input
                type="text"
                placeholder="e.g. Service, Parking"
                prop:value=move || form.with(|f| f.fee_type.clone())
                on:input=move |ev| form.update(|f| f.fee_type = event_target_value(&ev))
            />
        </FormField>
        <FormField label="Amount (VND)" errors=errors field=FeeForm::AMOUNT>
            <input
                type="text"
                inputmode="numeric"
                placeholder="0"
                prop:value=move || form.with(|f| f.amount.clone())
                on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
            />
        </FormField>
        <FormField label="Month" errors=errors field=FeeForm::MONTH>
            <input
                type="month"
                prop:value=move || form.with(|f| f.month.clone())
                on:input=move |ev| form.update(|f| f.month = event_target_value(&ev))
            />
        </FormField>
        <FormField label="Description" errors=errors field=FeeForm::DESCRIPTION>
            <textarea
                rows="3"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </FormField>
        <label class="checkbox-field">
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.compulsory)
                on:change=move |ev| form.update(|f| f.compulsory = event_target_checked(&ev))
            />
            "Compulsory"
        </label>
    }
}

fn blank_fee_form() -> FeeForm {
    FeeForm::for_month(month_key(today()))
}

#[component]
pub fn FeeCreateDialog(open: RwSignal<bool>, on_submit: AsyncCallback<FeeRequest>) -> impl IntoView {
    let state = FormState::new(blank_fee_form());

    let close = move || {
        open.set(false);
        state.reset(blank_fee_form());
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if state.submit(FeeForm::validate, |request| on_submit.call(request)).await {
                close();
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h2>"Add Fee"</h2>
                    <p class="dialog-description">"Create a new fee. Fill in the details below."</p>
                    <form on:submit=on_form_submit>
                        <FeeFields state=state />
                        <SubmitError error=state.submit_error />
                        <div class="dialog-actions">
                            <button type="button" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="primary" disabled=move || state.is_pending()>
                                {move || if state.is_pending() { "Creating..." } else { "Create Fee" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Side drawer editing `fee`; closes by setting it back to `None`
#[component]
pub fn FeeEditDrawer(fee: RwSignal<Option<Fee>>, on_submit: AsyncCallback<(i64, FeeRequest)>) -> impl IntoView {
    let state = FormState::new(FeeForm::default());

    Effect::new(move |_| {
        if let Some(current) = fee.get() {
            state.reset(FeeForm::from_fee(&current));
        }
    });

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = fee.with_untracked(|f| f.as_ref().map(|f| f.id)) else {
            return;
        };
        spawn_local(async move {
            if state.submit(FeeForm::validate, |request| on_submit.call((id, request))).await {
                fee.set(None);
            }
        });
    };

    view! {
        <Show when=move || fee.with(Option::is_some)>
            <aside class="drawer" role="dialog">
                <header class="drawer-header">
                    <h2>{move || fee.with(|f| f.as_ref().map(|f| f.fee_type.clone()).unwrap_or_default())}</h2>
                    <p class="dialog-description">"Edit the fee details below."</p>
                </header>
                <form on:submit=on_form_submit>
                    <FeeFields state=state />
                    <SubmitError error=state.submit_error />
                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| fee.set(None)>"Cancel"</button>
                        <button type="submit" class="primary" disabled=move || state.is_pending()>
                            {move || if state.is_pending() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </aside>
        </Show>
    }
}
