//! Drag Preview Component
//!
//! Floating copy of the dragged task card that follows the pointer.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::TaskCardBody;
use crate::moves::find_task;
use crate::store::{use_app_store, AppStateStoreFields};

/// Offset from the pointer so the preview does not sit under the cursor
const PREVIEW_OFFSET_PX: i32 = 12;

#[component]
pub fn DragPreview(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let dragged = Memo::new(move |_| {
        let id = dnd.dragging()?;
        find_task(&store.boards().read(), id).cloned()
    });

    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x + PREVIEW_OFFSET_PX, y + PREVIEW_OFFSET_PX)
    };

    move || {
        dragged.get().map(|task| view! {
            <div class="task-card drag-preview" style=style>
                <TaskCardBody task=task />
            </div>
        })
    }
}
