//! Data Table Component
//!
//! Generic record table: drag handle, selection checkboxes, sortable headers,
//! primary link cell and per-row actions. All view state lives in a
//! `TableState` owned by the caller.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_listeners, create_dnd_signals, make_on_mousedown, make_on_mouseleave, make_on_row_mouseenter,
    DndSignals, DragEnd,
};

use crate::components::DeleteConfirmButton;
use crate::models::Entity;
use crate::table::{Column, SelectAll, TableState};

#[component]
pub fn DataTable<R, C>(
    state: RwSignal<TableState<R, C>>,
    columns: &'static [C],
    /// Click on the primary cell
    #[prop(optional, into)]
    on_open: Option<Callback<R>>,
    #[prop(optional, into)] on_edit: Option<Callback<R>>,
    #[prop(optional, into)] on_delete: Option<Callback<R::Id>>,
    #[prop(optional, into)] deleting: Signal<bool>,
    #[prop(into, default = "No results.".to_string())] empty_text: String,
) -> impl IntoView
where
    R: Entity,
    C: Column<R>,
{
    let dnd = create_dnd_signals::<R::Id>();
    let listeners = bind_global_listeners(dnd, move |drop: DragEnd<R::Id>| {
        let moved = state.try_update(|s| s.move_row(drop.active, drop.over)).unwrap_or(false);
        if moved {
            tracing::debug!("Moved row {} onto {}", drop.active, drop.over);
        }
    });
    // Listeners are removed when the table unmounts
    let _listeners = StoredValue::new_local(listeners);

    let rows = Memo::new(move |_| state.with(|s| s.visible_rows(columns)));
    let visible_columns = Memo::new(move |_| state.with(|s| s.visible_columns(columns)));
    let select_all = Memo::new(move |_| state.with(|s| s.select_all_state(columns)));
    let has_actions = on_edit.is_some() || on_delete.is_some();

    let render_row = move |row: R| {
        let id = row.id();
        let row_class = move || {
            let mut class = String::from("data-row");
            if state.with(|s| s.is_selected(id)) {
                class.push_str(" selected");
            }
            if dnd.is_dragging(id) {
                class.push_str(" dragging");
            }
            if dnd.is_over(id) {
                class.push_str(" drag-over");
            }
            class
        };
        let cells_row = row.clone();
        let actions_row = row.clone();

        view! {
            <tr
                class=row_class
                on:mouseenter=make_on_row_mouseenter(dnd, id)
                on:mouseleave=make_on_mouseleave(dnd)
            >
                <td class="col-drag">
                    <span class="drag-handle" title="Drag to reorder" on:mousedown=make_on_mousedown(dnd, id)>
                        "⠿"
                    </span>
                </td>
                <td class="col-select">
                    <input
                        type="checkbox"
                        aria-label="Select row"
                        prop:checked=move || state.with(|s| s.is_selected(id))
                        on:change=move |_| state.update(|s| s.toggle_selected(id))
                    />
                </td>
                {move || {
                    visible_columns
                        .get()
                        .into_iter()
                        .map(|col| render_cell(col, &cells_row, on_open, dnd))
                        .collect_view()
                }}
                {has_actions.then(|| view! {
                    <td class="col-actions">
                        {on_edit.map(|edit| {
                            let row = actions_row.clone();
                            view! {
                                <button class="row-edit-btn" on:click=move |_| edit.run(row.clone())>
                                    "Edit"
                                </button>
                            }
                        })}
                        {on_delete.map(|delete| view! {
                            <DeleteConfirmButton
                                button_class="row-delete-btn"
                                label=Signal::stored("Delete".to_string())
                                pending=deleting
                                on_confirm=move |_: ()| delete.run(id)
                            />
                        })}
                    </td>
                })}
            </tr>
        }
    };

    view! {
        <div class="data-table-wrapper" class:reordering=move || dnd.any_dragging()>
            <table class="data-table">
                <thead>
                    <tr>
                        <th class="col-drag"></th>
                        <th class="col-select">
                            <input
                                type="checkbox"
                                aria-label="Select all"
                                prop:checked=move || select_all.get() == SelectAll::Checked
                                prop:indeterminate=move || select_all.get() == SelectAll::Indeterminate
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.select_all(columns, checked));
                                }
                            />
                        </th>
                        <For
                            each=move || visible_columns.get()
                            key=|col| col.key()
                            children=move |col| view! { <HeaderCell state=state column=col /> }
                        />
                        {has_actions.then(|| view! { <th class="col-actions"></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let current = rows.get();
                        if current.is_empty() {
                            let span = (visible_columns.with(Vec::len) + 3).to_string();
                            view! {
                                <tr>
                                    <td class="empty" colspan=span>{empty_text.clone()}</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            current.into_iter().map(render_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <div class="selection-info">
                {move || {
                    format!(
                        "{} of {} row(s) selected.",
                        state.with(|s| s.visible_selected_count(columns)),
                        rows.with(Vec::len),
                    )
                }}
            </div>
        </div>
    }
}

fn render_cell<R, C>(col: C, row: &R, on_open: Option<Callback<R>>, dnd: DndSignals<R::Id>) -> AnyView
where
    R: Entity,
    C: Column<R>,
{
    let text = col.cell(row);
    let class = format!("cell-{} {}", col.key(), col.cell_class(row)).trim_end().to_string();
    match on_open.filter(|_| col.primary()) {
        Some(open) => {
            let row = row.clone();
            view! {
                <td class=class>
                    <button
                        class="link-btn"
                        on:click=move |_| {
                            // The click that ends a drag is not an open
                            if !dnd.drag_just_ended_read.get_untracked() {
                                open.run(row.clone());
                            }
                        }
                    >
                        {text}
                    </button>
                </td>
            }
            .into_any()
        }
        None => view! { <td class=class>{text}</td> }.into_any(),
    }
}

#[component]
fn HeaderCell<R, C>(state: RwSignal<TableState<R, C>>, column: C) -> impl IntoView
where
    R: Entity,
    C: Column<R>,
{
    if !column.sortable() {
        return view! { <th class=format!("cell-{}", column.key())>{column.header()}</th> }.into_any();
    }
    let indicator = move || match state.with(|s| s.sort_direction(column)) {
        Some(false) => "▲",
        Some(true) => "▼",
        None => "↕",
    };
    let priority = move || state.with(|s| s.sort_priority(column)).map(|p| p.to_string());
    view! {
        <th class=format!("cell-{} sortable", column.key())>
            <button
                class="sort-btn"
                title="Shift-click to sort by several columns"
                on:click=move |ev| state.update(|s| s.toggle_sort(column, ev.shift_key()))
            >
                {column.header()}
                <span class="sort-indicator">{indicator}</span>
                <sup class="sort-priority">{priority}</sup>
            </button>
        </th>
    }
    .into_any()
}

/// "Columns" menu toggling the hideable columns
#[component]
pub fn ColumnMenu<R, C>(state: RwSignal<TableState<R, C>>, columns: &'static [C]) -> impl IntoView
where
    R: Entity,
    C: Column<R>,
{
    let (open, set_open) = signal(false);

    view! {
        <div class="column-menu">
            <button class="column-menu-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                "Customize Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-menu-list">
                    {columns
                        .iter()
                        .copied()
                        .filter(|c| c.hideable())
                        .map(|col| {
                            view! {
                                <label class="column-menu-item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.is_column_visible(col))
                                        on:change=move |ev| {
                                            let visible = event_target_checked(&ev);
                                            state.update(|s| s.set_column_visible(col, visible));
                                        }
                                    />
                                    {col.header()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
