//! Search Input Component
//!
//! Text input with a debounced server search. Keystrokes show up immediately;
//! `on_search` runs once the input has been quiet for the configured delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::hooks::AsyncCallback;
use crate::table::SearchController;

#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    /// Text shown on mount
    #[prop(optional, into)]
    initial: String,
    /// Server search for the settled query
    #[prop(optional)]
    on_search: Option<AsyncCallback<String>>,
    /// Every keystroke, before the debounce
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_app_context().config();
    let disable_while_pending = config.disable_search_while_pending;
    let controller = RwSignal::new(SearchController::new(config.search_debounce_ms).with_input(initial));
    // Replacing the handle cancels the previous timer; unmount drops the last one
    let timer = StoredValue::new_local(None::<Timeout>);

    let fire = move || {
        let Some(ticket) = controller.try_update(|c| c.on_timer(js_sys::Date::now())).flatten() else {
            return;
        };
        let Some(search) = on_search else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = search.call(ticket.query).await {
                tracing::warn!("Search failed: {}", e);
            }
            let _ = controller.try_update(|c| c.complete(ticket.generation));
        });
    };

    let on_keystroke = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(cb) = on_input {
            cb.run(value.clone());
        }
        if on_search.is_none() {
            controller.update(|c| c.set_input(value));
            return;
        }
        let now = js_sys::Date::now();
        controller.update(|c| c.on_input(value, now));
        let remaining = controller.with_untracked(|c| c.remaining_ms(now)).unwrap_or(0.0);
        // Round up so the timer never lands before the deadline
        timer.set_value(Some(Timeout::new(remaining.ceil() as u32 + 1, fire)));
    };

    let busy = move || controller.with(SearchController::is_busy);
    let disabled = move || disable_while_pending && controller.with(SearchController::is_fetching);

    view! {
        <div class="search-input" class:busy=busy>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || controller.with(|c| c.input().to_string())
                disabled=disabled
                on:input=on_keystroke
            />
            <Show when=busy>
                <span class="spinner" aria-label="Searching"></span>
            </Show>
        </div>
    }
}
