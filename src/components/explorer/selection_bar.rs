//! Selection bar shown while entries are checked.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Dialog, PendingDelete};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

#[component]
pub fn SelectionBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let count = Memo::new(move |_| ctx.view.with(|v| v.selection_count()));
    let active = Memo::new(move |_| ctx.view.with(|v| v.bar_active()));
    let is_admin = Memo::new(move |_| ctx.view.with(|v| v.listing().is_admin));

    let on_delete = move |_| {
        let names = ctx.view.with_untracked(|v| v.selected_names());
        if let Some(pending) = PendingDelete::bulk(names) {
            ctx.dialog.set(Dialog::Delete(pending));
        }
    };

    view! {
        <div class=move || {
            if active.get() {
                format!("{} {}", css::selectionBar, css::selectionBarActive)
            } else {
                css::selectionBar.to_string()
            }
        }>
            <span class=css::selectionCount>
                {move || format!("已选择 {} 项", count.get())}
            </span>
            <div class=css::selectionActions>
                <button class=css::actionButton on:click=move |_| ctx.download_selected()>
                    <Icon icon=ic::DOWNLOAD />
                    <span>"下载"</span>
                </button>
                <Show when=move || is_admin.get()>
                    <button
                        class=format!("{} {}", css::actionButton, css::actionDanger)
                        on:click=on_delete
                    >
                        <Icon icon=ic::TRASH />
                        <span>"删除"</span>
                    </button>
                </Show>
                <button
                    class=css::actionButton
                    on:click=move |_| ctx.view.update(|v| v.clear_selection())
                    title="取消选择"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </div>
    }
}
