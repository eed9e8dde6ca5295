//! Residents Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    ColumnMenu, DataTable, DeleteConfirmButton, PaginationBar, ResidentCreateDialog, ResidentDetail, SearchInput,
};
use crate::context::use_app_context;
use crate::hooks::{use_residents, AsyncCallback};
use crate::models::{Resident, ResidentRequest, GENDERS};
use crate::pagination::{use_pagination, PageChange};
use crate::table::{ResidentColumn, TableState};

const COLUMNS: &[ResidentColumn] = &ResidentColumn::ALL;

#[component]
pub fn ResidentsTable() -> impl IntoView {
    let config = use_app_context().config();
    let selection_policy = config.bulk_delete_selection;
    let residents = use_residents();
    let state = RwSignal::new(TableState::<Resident, ResidentColumn>::new());
    let creating = RwSignal::new(false);
    let viewing = RwSignal::new(None::<i64>);
    let banner = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let rows = residents.rows();
        state.update(|s| s.replace_rows(rows));
    });

    let pagination = use_pagination(config.default_page_size, move |change: PageChange| {
        residents.load(change.page, change.size);
    });
    Effect::new(move |_| {
        residents.data.data.with(|page| {
            if let Some(page) = page {
                pagination.align(page);
            }
        });
    });

    let on_search = AsyncCallback::new(move |search: String| async move {
        let mut filter = residents.query.with_untracked(|q| q.filter.clone());
        filter.search = search;
        pagination.reset();
        residents.apply_filter(filter).await;
        Ok(())
    });

    let on_gender = move |ev: web_sys::Event| {
        let mut filter = residents.query.with_untracked(|q| q.filter.clone());
        filter.gender = event_target_value(&ev);
        pagination.reset();
        spawn_local(async move {
            residents.apply_filter(filter).await;
        });
    };

    let on_create = AsyncCallback::new(move |request: ResidentRequest| async move {
        residents.create(request).await.map_err(|e| e.to_string())
    });

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            if let Err(e) = residents.delete(id).await {
                banner.set(Some(e.to_string()));
            }
        });
    });

    let on_bulk_delete = move |_: ()| {
        let ids = state.with_untracked(|s| s.visible_selected_ids(COLUMNS));
        if ids.is_empty() {
            return;
        }
        spawn_local(async move {
            let report = residents.bulk_delete(ids).await;
            let keep = selection_policy.remaining(&report);
            state.update(|s| s.retain_selection(&keep));
            banner.set(Some(report.summary()));
        });
    };

    let selected_count = move || state.with(|s| s.visible_selected_count(COLUMNS));

    view! {
        <section class="residents-screen">
            <div class="toolbar">
                <SearchInput
                    placeholder="Search residents..."
                    initial=residents.query.with_untracked(|q| q.filter.search.clone())
                    on_search=on_search
                />
                <select
                    class="gender-filter"
                    prop:value=move || residents.query.with(|q| q.filter.gender.clone())
                    on:change=on_gender
                >
                    <option value="">"All genders"</option>
                    {GENDERS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <div class="toolbar-actions">
                    <Show when=move || { selected_count() > 0 }>
                        <DeleteConfirmButton
                            button_class="bulk-delete-btn"
                            label=Signal::derive(move || format!("Delete {} selected", selected_count()))
                            pending=Signal::derive(move || residents.deleting.is_pending())
                            on_confirm=on_bulk_delete
                        />
                    </Show>
                    <ColumnMenu state=state columns=COLUMNS />
                    <button class="primary" on:click=move |_| creating.set(true)>
                        "+ Add Resident"
                    </button>
                </div>
            </div>

            {move || banner.get().map(|text| {
                view! {
                    <div class="notice" role="status">
                        <span>{text}</span>
                        <button class="close-btn" aria-label="Dismiss" on:click=move |_| banner.set(None)>"×"</button>
                    </div>
                }
            })}
            {move || residents.error().map(|e| view! { <div class="notice error" role="alert">{e}</div> })}
            <Show when=move || residents.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            <DataTable
                state=state
                columns=COLUMNS
                on_open=move |r: Resident| viewing.set(Some(r.id))
                on_delete=on_delete
                deleting=Signal::derive(move || residents.deleting.is_pending())
                empty_text="No residents found."
            />
            <PaginationBar
                mode=Signal::derive(move || residents.mode())
                pagination=pagination
                page_size_options=config.page_size_options.clone()
            />

            <ResidentCreateDialog open=creating on_submit=on_create />
            <ResidentDetail resident_id=viewing />
        </section>
    }
}
