//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop row reordering for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag. Rows are
//! identified by a stable key, never by position.

use std::fmt::Debug;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Key identifying a draggable row
pub trait DragKey: Copy + PartialEq + Debug + Send + Sync + 'static {}

impl<T> DragKey for T where T: Copy + PartialEq + Debug + Send + Sync + 'static {}

/// Completed drag: `active` was dropped onto `over`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd<K> {
    pub active: K,
    pub over: K,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: DragKey> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub over_id_read: ReadSignal<Option<K>>,
    pub over_id_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row key (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<K: DragKey> DndSignals<K> {
    pub fn is_dragging(&self, key: K) -> bool {
        self.dragging_id_read.get() == Some(key)
    }

    pub fn is_over(&self, key: K) -> bool {
        self.over_id_read.get() == Some(key)
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Resolve a finished drag into a move, ignoring drops onto the dragged row
pub fn resolve_drop<K: DragKey>(dragging: Option<K>, over: Option<K>) -> Option<DragEnd<K>> {
    match (dragging, over) {
        (Some(active), Some(over)) if active != over => Some(DragEnd { active, over }),
        _ => None,
    }
}

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (over_id_read, over_id_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows mouseup on the dropped row.
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a drag handle.
/// Records pending drag with start position.
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
        }
        ev.prevent_default();
        dnd.pending_id_write.set(Some(key));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows (become the drop position)
pub fn make_on_row_mouseenter<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            if dragging != key {
                dnd.over_id_write.set(Some(key));
            } else {
                dnd.over_id_write.set(None);
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Document listeners installed by [`bind_global_listeners`].
/// Dropping the value removes them.
pub struct DndListeners {
    document: Option<web_sys::Document>,
    on_mousemove: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_mouseup: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for DndListeners {
    fn drop(&mut self) {
        if let Some(doc) = &self.document {
            let _ = doc.remove_event_listener_with_callback("mousemove", self.on_mousemove.as_ref().unchecked_ref());
            let _ = doc.remove_event_listener_with_callback("mouseup", self.on_mouseup.as_ref().unchecked_ref());
        }
    }
}

/// Bind document mousemove (drag start detection) and mouseup (drop) handlers.
///
/// Keep the returned value alive for as long as the rows are mounted, e.g. in
/// a `StoredValue::new_local` owned by the component.
pub fn bind_global_listeners<K, F>(dnd: DndSignals<K>, on_drop: F) -> DndListeners
where
    K: DragKey,
    F: Fn(DragEnd<K>) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let over = dnd.over_id_read.get_untracked();
        dnd.pending_id_write.set(None);
        if dragging.is_none() {
            return;
        }
        end_drag(&dnd);
        if let Some(drop) = resolve_drop(dragging, over) {
            on_drop(drop);
        }
    });

    let document = web_sys::window().and_then(|win| win.document());
    if let Some(doc) = &document {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }

    DndListeners {
        document,
        on_mousemove,
        on_mouseup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_resolve_drop() {
        assert_eq!(resolve_drop(Some(1i64), Some(3)), Some(DragEnd { active: 1, over: 3 }));
        assert_eq!(resolve_drop(Some(2i64), Some(2)), None);
        assert_eq!(resolve_drop(Some(2i64), None), None);
        assert_eq!(resolve_drop::<i64>(None, Some(2)), None);
    }
}
