//! Apartments Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ApartmentDetail, ApartmentDialog, ApartmentEdit, DataTable, PaginationBar};
use crate::context::use_app_context;
use crate::hooks::{use_apartments, AsyncCallback};
use crate::models::{Apartment, ApartmentRequest};
use crate::pagination::{use_pagination, PageChange};
use crate::table::{ApartmentColumn, TableState};

const COLUMNS: &[ApartmentColumn] = &ApartmentColumn::ALL;

#[component]
pub fn ApartmentsTable() -> impl IntoView {
    let config = use_app_context().config();
    let apartments = use_apartments();
    let state = RwSignal::new(TableState::<Apartment, ApartmentColumn>::new());
    let editing = RwSignal::new(None::<ApartmentEdit>);
    let viewing = RwSignal::new(None::<i64>);
    let delete_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let rows = apartments.rows();
        state.update(|s| s.replace_rows(rows));
    });

    let pagination = use_pagination(config.default_page_size, move |change: PageChange| {
        apartments.load(change.page, change.size);
    });
    Effect::new(move |_| {
        apartments.data.data.with(|page| {
            if let Some(page) = page {
                pagination.align(page);
            }
        });
    });

    let on_submit = AsyncCallback::new(move |(id, request): (Option<i64>, ApartmentRequest)| async move {
        let result = match id {
            Some(id) => apartments.update(id, request).await,
            None => apartments.create(request).await,
        };
        result.map_err(|e| e.to_string())
    });

    let on_delete = Callback::new(move |id: i64| {
        delete_error.set(None);
        spawn_local(async move {
            if let Err(e) = apartments.delete(id).await {
                delete_error.set(Some(e.to_string()));
            }
        });
    });

    view! {
        <section class="apartments-screen">
            <div class="toolbar">
                <div class="toolbar-actions">
                    <button class="primary" on:click=move |_| editing.set(Some(ApartmentEdit::Create))>
                        "+ Add Apartment"
                    </button>
                </div>
            </div>

            {move || delete_error.get().map(|e| view! { <div class="notice error" role="alert">{e}</div> })}
            {move || apartments.error().map(|e| view! { <div class="notice error" role="alert">{e}</div> })}
            <Show when=move || apartments.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            <DataTable
                state=state
                columns=COLUMNS
                on_open=move |a: Apartment| viewing.set(Some(a.id))
                on_edit=move |a: Apartment| editing.set(Some(ApartmentEdit::Update(a)))
                on_delete=on_delete
                deleting=Signal::derive(move || apartments.deleting.is_pending())
                empty_text="No apartments yet."
            />
            <PaginationBar
                mode=Signal::derive(move || apartments.mode())
                pagination=pagination
                page_size_options=config.page_size_options.clone()
            />

            <ApartmentDialog target=editing on_submit=on_submit />
            <ApartmentDetail apartment_id=viewing />
        </section>
    }
}
