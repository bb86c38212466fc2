//! New Board Modal Component
//!
//! Board-name dialog opened from the page header.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ButtonVariant, ConfirmModal};
use crate::context::use_app_context;
use crate::models::is_blank_input;

#[component]
pub fn NewBoardModal(
    is_open: ReadSignal<bool>,
    set_is_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (new_name, set_new_name) = signal(String::new());

    let create_board = move || {
        let name = new_name.get_untracked();
        if is_blank_input(&name) { return; }

        spawn_local(async move {
            match ctx.create_board(name).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    set_is_open.set(false);
                }
                Err(e) => log::error!("Failed to create board: {}", e),
            }
        });
    };

    view! {
        <ConfirmModal
            is_open=is_open
            title="Add New Board"
            on_close=move |_| set_is_open.set(false)
            on_confirm=move |_| create_board()
            confirm_text="Create Board"
            confirm_variant=ButtonVariant::Primary
        >
            <label class="field-label">"Board Name"</label>
            <input
                type="text"
                class="field-input"
                placeholder="e.g., Development, Marketing, Ideas"
                autofocus=true
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        create_board();
                    }
                }
            />
        </ConfirmModal>
    }
}
