//! Board List Component
//!
//! Drag-and-drop root: renders all boards and turns drops into task moves.
//! Uses leptos-dragdrop with boards as drop targets.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::components::{BoardColumn, DragPreview};
use crate::context::use_app_context;
use crate::moves::resolve_drop;
use crate::store::AppStateStoreFields;

/// All boards plus the floating drag preview
#[component]
pub fn BoardList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |task_id, board_id| {
        let task_move = resolve_drop(&store.boards().read_untracked(), task_id, board_id);
        let Some(task_move) = task_move else {
            log::debug!("[DND] Task {} dropped on its own board {}, ignoring", task_id, board_id);
            return;
        };
        log::debug!("[DND] Drop: task={}, board={}", task_id, board_id);
        spawn_local(async move {
            if let Err(e) = ctx.move_task(task_move).await {
                log::error!("Failed to move task: {}", e);
            }
        });
    });

    let board_ids = move || store.boards().read().iter().map(|b| b.id).collect::<Vec<_>>();
    let is_empty = move || store.boards().read().is_empty();

    view! {
        <div class=move || if dnd.dragging().is_some() { "board-list dragging" } else { "board-list" }>
            <For
                each=board_ids
                key=|id| *id
                children=move |id| view! { <BoardColumn board_id=id dnd=dnd /> }
            />

            <Show when=is_empty>
                <div class="empty-boards">
                    <p class="empty-boards-title">"No boards found"</p>
                    <p>"Create a new board to get started"</p>
                </div>
            </Show>
        </div>

        <DragPreview dnd=dnd />
    }
}
