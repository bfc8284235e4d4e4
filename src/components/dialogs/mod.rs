//! Desktop modal dialogs.
//!
//! At most one dialog is open at a time; which one is decided by
//! [`Dialog`] in the app context. Every dialog closes by resetting it.

mod delete;
mod mkdir;
mod rename;
mod share;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Dialog;

stylance::import_crate_style!(css, "src/components/dialogs/dialogs.module.css");

/// Renders the open dialog, if any.
#[component]
pub fn DialogHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Re-render only when a different dialog opens, not on every state change
    let kind = Memo::new(move |_| {
        ctx.dialog.with(|d| match d {
            Dialog::None => 0,
            Dialog::Mkdir => 1,
            Dialog::Rename { .. } => 2,
            Dialog::Delete(_) => 3,
            Dialog::Share { .. } => 4,
            Dialog::Qr { .. } => 5,
        })
    });

    move || match kind.get() {
        1 => view! { <mkdir::MkdirDialog /> }.into_any(),
        2 => view! { <rename::RenameDialog /> }.into_any(),
        3 => view! { <delete::DeleteDialog /> }.into_any(),
        4 => view! { <share::ShareDialog /> }.into_any(),
        5 => view! { <share::QrDialog /> }.into_any(),
        _ => ().into_any(),
    }
}

/// Overlay + card shared by all dialogs.
#[component]
fn Modal(title: &'static str, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::overlay on:click=move |_| ctx.dialog.set(Dialog::None) role="dialog">
            <div class=css::card on:click=|ev| ev.stop_propagation()>
                <div class=css::header>
                    <span class=css::title>{title}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| ctx.dialog.set(Dialog::None)
                        title="关闭"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
