use leptos::prelude::*;

use super::{Modal, css};
use crate::app::AppContext;
use crate::config::messages;
use crate::core::Dialog;

#[component]
pub fn DeleteDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let pending = ctx.dialog.with_untracked(|d| match d {
        Dialog::Delete(pending) => Some(pending.clone()),
        _ => None,
    });
    let message = pending
        .as_ref()
        .map(|p| p.confirm_message())
        .unwrap_or_default();
    let show_warning = pending.as_ref().is_some_and(|p| p.is_single());

    // Single and bulk deletes share this path.
    let confirm = move |_| {
        ctx.dialog.set(Dialog::None);
        if let Some(request) = pending
            .clone()
            .and_then(|p| p.into_request(&ctx.current_path()))
        {
            ctx.submit_admin(request, true);
        }
    };

    view! {
        <Modal title="确认删除">
            <p class=css::message>{message}</p>
            {show_warning.then(|| view! {
                <p class=css::hint>{messages::DELETE_IRREVERSIBLE}</p>
            })}
            <div class=css::buttons>
                <button class=css::button on:click=move |_| ctx.dialog.set(Dialog::None)>"取消"</button>
                <button class=format!("{} {}", css::button, css::buttonDanger) on:click=confirm>
                    "删除"
                </button>
            </div>
        </Modal>
    }
}
