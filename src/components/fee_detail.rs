//! Fee Detail Panel

use leptos::prelude::*;

use crate::format::format_vnd;
use crate::models::Fee;

/// Read-only view of `fee`, opened from the fee type link
#[component]
pub fn FeeDetail(fee: RwSignal<Option<Fee>>, #[prop(into)] on_edit: Callback<Fee>) -> impl IntoView {
    move || {
        fee.get().map(|current| {
            let for_edit = current.clone();
            view! {
                <aside class="detail-panel">
                    <header class="drawer-header">
                        <h2>{current.fee_type.clone()}</h2>
                        <button class="close-btn" aria-label="Close" on:click=move |_| fee.set(None)>
                            "×"
                        </button>
                    </header>
                    <dl class="detail-list">
                        <dt>"ID"</dt>
                        <dd>{current.id}</dd>
                        <dt>"Amount"</dt>
                        <dd>{format_vnd(current.amount)}</dd>
                        <dt>"Month"</dt>
                        <dd>{current.month.clone()}</dd>
                        <dt>"Compulsory"</dt>
                        <dd>{if current.compulsory { "Yes" } else { "No" }}</dd>
                        <dt>"Description"</dt>
                        <dd>{if current.description.is_empty() { "-".to_string() } else { current.description.clone() }}</dd>
                    </dl>
                    <div class="dialog-actions">
                        <button
                            class="primary"
                            on:click=move |_| {
                                fee.set(None);
                                on_edit.run(for_edit.clone());
                            }
                        >
                            "Edit"
                        </button>
                    </div>
                </aside>
            }
        })
    }
}
