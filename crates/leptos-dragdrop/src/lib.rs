//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and tracks the
//! pointer so a floating preview can follow it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
///
/// Dragged elements and drop targets are both identified by `u32` ids;
/// what those ids mean (tasks, boards, ...) is up to the caller.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Id of the drop target currently under the pointer
    pub drop_target_read: ReadSignal<Option<u32>>,
    pub drop_target_write: WriteSignal<Option<u32>>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_pos_read: ReadSignal<(i32, i32)>,
    pub start_pos_write: WriteSignal<(i32, i32)>,
    /// Last known pointer position (client coordinates)
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
}

impl DndSignals {
    /// Id being dragged, tracked
    pub fn dragging(&self) -> Option<u32> {
        self.dragging_id_read.get()
    }

    /// Whether `target_id` is the current drop target, tracked
    pub fn is_drop_target(&self, target_id: u32) -> bool {
        self.dragging_id_read.get().is_some() && self.drop_target_read.get() == Some(target_id)
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<u32>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_pos_read, start_pos_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_pos_read,
        start_pos_write,
        pointer_read,
        pointer_write,
    }
}

/// True once the pointer has moved past the drag threshold on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Decide what a mouseup means for the current drag state
///
/// Yields `(dragged_id, target_id)` only when a drag passed the threshold
/// and the pointer is over a drop target.
pub fn resolve_mouseup(dragging: Option<u32>, target: Option<u32>) -> Option<(u32, u32)> {
    match (dragging, target) {
        (Some(dragged), Some(target)) => Some((dragged, target)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, drag_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let pos = (ev.client_x(), ev.client_y());
        dnd.pending_id_write.set(Some(drag_id));
        dnd.start_pos_write.set(pos);
        dnd.pointer_write.set(pos);
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() {
            return;
        }

        let pos = (ev.client_x(), ev.client_y());
        dnd.pointer_write.set(pos);

        if dnd.dragging_id_read.get_untracked().is_none()
            && exceeds_threshold(dnd.start_pos_read.get_untracked(), pos)
        {
            dnd.dragging_id_write.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter(dnd: DndSignals, target_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target_id));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(dragged_id, target_id)` only runs when a drag actually started
/// and ended over a drop target.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let drop = resolve_mouseup(
            dnd.dragging_id_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        end_drag(&dnd);
        if let Some((dragged, target)) = drop {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
