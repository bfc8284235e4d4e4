use leptos::prelude::*;

use super::{Modal, css};
use crate::app::AppContext;
use crate::core::{AdminRequest, Dialog};
use crate::utils::dom;

#[component]
pub fn RenameDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let old_name = ctx.dialog.with_untracked(|d| match d {
        Dialog::Rename { old_name } => old_name.clone(),
        _ => String::new(),
    });
    let new_name = RwSignal::new(old_name.clone());

    // Empty or unchanged names just close the dialog.
    let submit = {
        let old_name = old_name.clone();
        move || {
            ctx.dialog.set(Dialog::None);
            if let Some(request) =
                AdminRequest::rename(&ctx.current_path(), &old_name, &new_name.get_untracked())
            {
                ctx.submit_admin(request, true);
            }
        }
    };
    let submit_on_enter = submit.clone();

    Effect::new(move |_| {
        dom::focus_element("#rename-name");
    });

    view! {
        <Modal title="重命名">
            <input
                id="rename-name"
                class=css::input
                type="text"
                prop:value=move || new_name.get()
                on:input=move |ev| new_name.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit_on_enter();
                    }
                }
            />
            <div class=css::buttons>
                <button class=css::button on:click=move |_| ctx.dialog.set(Dialog::None)>"取消"</button>
                <button class=format!("{} {}", css::button, css::buttonPrimary) on:click=move |_| submit()>
                    "确定"
                </button>
            </div>
        </Modal>
    }
}
