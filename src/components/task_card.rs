//! Task Card Component
//!
//! One task rendered as a draggable card with its own delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::components::ConfirmModal;
use crate::context::use_app_context;
use crate::models::Task;

/// Card content shared by the list card and the drag preview
#[component]
pub fn TaskCardBody(task: Task) -> impl IntoView {
    view! {
        <p class="task-description">{task.description.clone()}</p>
        <div class="task-meta">
            <span>{format!("#{}", task.id)}</span>
            <span>{task.created_label()}</span>
        </div>
    }
}

/// Draggable task card
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;

    let (modal_open, set_modal_open) = signal(false);

    let on_mousedown = make_on_mousedown(dnd, id);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let confirm_delete = move |_: ()| {
        spawn_local(async move {
            if let Err(e) = ctx.delete_task(id).await {
                log::error!("Failed to delete task {}: {}", id, e);
            }
            set_modal_open.set(false);
        });
    };

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=on_mousedown
        >
            <button
                class="task-delete-btn"
                title="Delete Task"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_modal_open.set(true);
                }
            >
                "✕"
            </button>
            <TaskCardBody task=task />
        </div>

        <ConfirmModal
            is_open=modal_open
            title="Delete Task"
            on_close=move |_| set_modal_open.set(false)
            on_confirm=confirm_delete
            confirm_text="Delete"
        >
            <p>"Are you sure you want to delete this task?"</p>
        </ConfirmModal>
    }
}
