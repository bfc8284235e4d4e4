use leptos::prelude::*;

use super::{Modal, css};
use crate::app::AppContext;
use crate::config::messages;
use crate::core::{AdminRequest, Dialog};
use crate::utils::dom;

#[component]
pub fn MkdirDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let name = RwSignal::new(String::new());

    let submit = move || {
        let Some(request) = AdminRequest::mkdir(&ctx.current_path(), &name.get_untracked()) else {
            dom::alert(messages::EMPTY_NAME);
            return;
        };
        ctx.dialog.set(Dialog::None);
        ctx.submit_admin(request, true);
    };

    Effect::new(move |_| {
        dom::focus_element("#mkdir-name");
    });

    view! {
        <Modal title="新建文件夹">
            <input
                id="mkdir-name"
                class=css::input
                type="text"
                placeholder="文件夹名称"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <div class=css::buttons>
                <button class=css::button on:click=move |_| ctx.dialog.set(Dialog::None)>"取消"</button>
                <button class=format!("{} {}", css::button, css::buttonPrimary) on:click=move |_| submit()>
                    "创建"
                </button>
            </div>
        </Modal>
    }
}
