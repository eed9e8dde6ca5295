//! Fees Screen
//!
//! Two tabs over the fee records: "All Fees" pages through the server with a
//! debounced type search, "Current Month" loads one month at once and filters
//! locally. Each tab keeps its own table state, so selection and drag order
//! do not leak between them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    ColumnMenu, DataTable, DeleteConfirmButton, FeeCreateDialog, FeeDetail, FeeEditDrawer, PaginationBar, SearchInput,
};
use crate::context::use_app_context;
use crate::format::{month_options, today};
use crate::hooks::{use_fees, use_fees_by_month, AsyncCallback};
use crate::models::{Fee, FeeRequest};
use crate::pagination::{use_pagination, PageChange};
use crate::table::{FeeColumn, FeeTab, PaginationMode, TableState};

/// Outcome line shown above the table after a delete
#[derive(Debug, Clone, PartialEq)]
struct Notice {
    ok: bool,
    text: String,
}

#[component]
pub fn FeesTable() -> impl IntoView {
    let config = use_app_context().config();
    let selection_policy = config.bulk_delete_selection;
    let fees = use_fees();
    let month_fees = use_fees_by_month(fees);

    let (tab, set_tab) = signal(FeeTab::All);
    let all_state = RwSignal::new(TableState::<Fee, FeeColumn>::new());
    let month_state = RwSignal::new(TableState::<Fee, FeeColumn>::new());
    let state_for = move |t: FeeTab| match t {
        FeeTab::All => all_state,
        FeeTab::CurrentMonth => month_state,
    };

    let creating = RwSignal::new(false);
    let editing = RwSignal::new(None::<Fee>);
    let viewing = RwSignal::new(None::<Fee>);
    let notice = RwSignal::new(None::<Notice>);

    // Fresh data, or a tab switch, replaces the rows and drops any drag order
    Effect::new(move |_| {
        tab.track();
        let rows = fees.rows();
        all_state.update(|s| s.replace_rows(rows));
    });
    Effect::new(move |_| {
        tab.track();
        let rows = month_fees.rows();
        month_state.update(|s| s.replace_rows(rows));
    });

    let pagination = use_pagination(config.default_page_size, move |change: PageChange| {
        fees.load(change.page, change.size);
    });
    Effect::new(move |_| {
        fees.data.data.with(|page| {
            if let Some(page) = page {
                pagination.align(page);
            }
        });
    });

    let mode = Signal::derive(move || match tab.get() {
        FeeTab::All => fees.mode(),
        FeeTab::CurrentMonth => {
            PaginationMode::snapshot(month_state.with(|s| s.visible_rows(FeeTab::CurrentMonth.columns()).len()))
        }
    });

    let on_search = AsyncCallback::new(move |fee_type: String| async move {
        pagination.reset();
        fees.apply_filter(fee_type).await;
        Ok(())
    });
    let on_create = AsyncCallback::new(move |request: FeeRequest| async move {
        fees.create(request).await.map_err(|e| e.to_string())
    });
    let on_update = AsyncCallback::new(move |(id, request): (i64, FeeRequest)| async move {
        fees.update(id, request).await.map_err(|e| e.to_string())
    });

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            let result = fees.delete(id).await;
            notice.set(Some(match result {
                Ok(()) => Notice {
                    ok: true,
                    text: "Fee deleted".to_string(),
                },
                Err(e) => Notice {
                    ok: false,
                    text: e.to_string(),
                },
            }));
        });
    });

    let on_bulk_delete = move |_: ()| {
        let current = tab.get_untracked();
        let state = state_for(current);
        let ids = state.with_untracked(|s| s.visible_selected_ids(current.columns()));
        if ids.is_empty() {
            return;
        }
        spawn_local(async move {
            let report = fees.bulk_delete(ids).await;
            let keep = selection_policy.remaining(&report);
            state.update(|s| s.retain_selection(&keep));
            notice.set(Some(Notice {
                ok: report.is_complete_success(),
                text: report.summary(),
            }));
        });
    };

    let selected_count = move || {
        let t = tab.get();
        state_for(t).with(|s| s.visible_selected_count(t.columns()))
    };
    let error = move || match tab.get() {
        FeeTab::All => fees.error(),
        FeeTab::CurrentMonth => month_fees.data.error.get(),
    };
    let loading = move || match tab.get() {
        FeeTab::All => fees.is_loading(),
        FeeTab::CurrentMonth => month_fees.data.loading.get(),
    };
    let months = month_options(today(), config.month_options);

    view! {
        <section class="fees-screen">
            <div class="toolbar">
                <div class="tab-bar" role="tablist">
                    {FeeTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    role="tab"
                                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                                    on:click=move |_| {
                                        notice.set(None);
                                        set_tab.set(t);
                                    }
                                >
                                    {t.label()}
                                    {(t == FeeTab::CurrentMonth)
                                        .then(|| view! { <span class="badge">{move || month_fees.count()}</span> })}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || tab.get() == FeeTab::CurrentMonth>
                    <label class="month-selector">
                        "Select Month:"
                        <select
                            prop:value=move || month_fees.month.get()
                            on:change=move |ev| month_fees.month.set(event_target_value(&ev))
                        >
                            {months
                                .iter()
                                .map(|m| view! { <option value=m.value.clone()>{m.label.clone()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </Show>

                <div class="toolbar-actions">
                    {move || {
                        if tab.get().searches_server() {
                            view! {
                                <SearchInput
                                    placeholder="Search fee type..."
                                    initial=fees.query.with_untracked(|q| q.filter.clone())
                                    on_search=on_search
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <SearchInput
                                    placeholder="Filter this month..."
                                    initial=month_state.with_untracked(|s| s.filter().to_string())
                                    on_input=move |value: String| month_state.update(|s| s.set_filter(value))
                                />
                            }
                                .into_any()
                        }
                    }}
                    <Show when=move || { selected_count() > 0 }>
                        <DeleteConfirmButton
                            button_class="bulk-delete-btn"
                            label=Signal::derive(move || format!("Delete {} selected", selected_count()))
                            pending=Signal::derive(move || fees.deleting.is_pending())
                            on_confirm=on_bulk_delete
                        />
                    </Show>
                    {move || match tab.get() {
                        FeeTab::All => view! { <ColumnMenu state=all_state columns=FeeTab::All.columns() /> }.into_any(),
                        FeeTab::CurrentMonth => {
                            view! { <ColumnMenu state=month_state columns=FeeTab::CurrentMonth.columns() /> }.into_any()
                        }
                    }}
                    <button class="primary" on:click=move |_| creating.set(true)>
                        "+ Add Fee"
                    </button>
                </div>
            </div>

            {move || notice.get().map(|n| {
                view! {
                    <div class=if n.ok { "notice success" } else { "notice error" } role="status">
                        <span>{n.text}</span>
                        <button class="close-btn" aria-label="Dismiss" on:click=move |_| notice.set(None)>"×"</button>
                    </div>
                }
            })}
            {move || error().map(|e| view! { <div class="notice error" role="alert">{e}</div> })}
            <Show when=loading>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || {
                let t = tab.get();
                view! {
                    <DataTable
                        state=state_for(t)
                        columns=t.columns()
                        on_open=move |fee: Fee| viewing.set(Some(fee))
                        on_edit=move |fee: Fee| editing.set(Some(fee))
                        on_delete=on_delete
                        deleting=Signal::derive(move || fees.deleting.is_pending())
                        empty_text="No fees found."
                    />
                }
            }}

            <PaginationBar mode=mode pagination=pagination page_size_options=config.page_size_options.clone() />

            <FeeCreateDialog open=creating on_submit=on_create />
            <FeeEditDrawer fee=editing on_submit=on_update />
            <FeeDetail fee=viewing on_edit=move |fee: Fee| editing.set(Some(fee)) />
        </section>
    }
}
