//! Activity Panel Component
//!
//! Collapsible list of recent user actions read from the rolling log.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::logging;

const REFRESH_MS: u32 = 1_000;

#[component]
pub fn ActivityPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let entries = RwSignal::new(Vec::new());
    let ticker = StoredValue::new_local(None::<Interval>);

    let refresh = move || entries.set(logging::activity());

    // Poll only while visible; dropping the interval stops it
    Effect::new(move |_| {
        if open.get() {
            refresh();
            ticker.set_value(Some(Interval::new(REFRESH_MS, refresh)));
        } else {
            ticker.set_value(None);
        }
    });

    view! {
        <aside class="activity-panel" class:open=move || open.get()>
            <button class="activity-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Hide Activity" } else { "Activity" }}
            </button>
            <Show when=move || open.get()>
                <div class="activity-body">
                    <div class="activity-actions">
                        <button on:click=move |_| {
                            logging::clear_activity();
                            refresh();
                        }>"Clear"</button>
                    </div>
                    {move || {
                        let list = entries.get();
                        if list.is_empty() {
                            view! { <p class="activity-empty">"No activity yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="activity-list">
                                    {list
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <li class=format!("activity-entry {}", entry.level.as_str().to_lowercase())>
                                                    <time>{entry.timestamp.format("%H:%M:%S").to_string()}</time>
                                                    <span>{entry.message}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </aside>
    }
}
