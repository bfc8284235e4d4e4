//! Bottom action sheet.
//!
//! The overlay is rendered while the sheet is displayed; the slide-in is
//! driven by the active class, which [`crate::core::ActionSheet`] only
//! reports once the opening tick has fired.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::{AdminRequest, SheetAction, SheetEffect};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/mobile/sheet.module.css");

/// Run `action` on the sheet's target, then close the sheet.
fn dispatch(ctx: AppContext, action: SheetAction) {
    let Some(item) = ctx.sheet.with_untracked(|s| s.item().cloned()) else {
        return;
    };

    match action.effect(&item) {
        SheetEffect::Ignore => {}
        SheetEffect::Alert(message) => dom::alert(message),
        SheetEffect::Navigate(url) => dom::navigate_to(&url),
        SheetEffect::PromptRename(current) => {
            if let Some(new_name) = dom::prompt(messages::RENAME_PROMPT, &current)
                && let Some(request) = AdminRequest::rename(&ctx.current_path(), &current, &new_name)
            {
                ctx.submit_admin(request, false);
            }
        }
        SheetEffect::ConfirmDelete(question) => {
            if dom::confirm(&question)
                && let Some(request) = AdminRequest::delete(&ctx.current_path(), vec![item.name.clone()])
            {
                ctx.submit_admin(request, false);
            }
        }
    }

    ctx.close_sheet();
}

#[component]
pub fn ActionSheet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let displayed = Memo::new(move |_| ctx.sheet.with(|s| s.is_displayed()));
    let active = Memo::new(move |_| ctx.sheet.with(|s| s.is_active()));
    let title = Memo::new(move |_| {
        ctx.sheet
            .with(|s| s.item().map(|i| i.name.clone()))
            .unwrap_or_default()
    });
    let is_admin = Memo::new(move |_| ctx.view.with(|v| v.listing().is_admin));

    view! {
        <Show when=move || displayed.get()>
            <div
                class=move || {
                    if active.get() {
                        format!("{} {}", css::overlay, css::active)
                    } else {
                        css::overlay.to_string()
                    }
                }
                on:click=move |_| ctx.close_sheet()
            >
                <div class=css::sheet on:click=|ev| ev.stop_propagation()>
                    <div class=css::handle><div class=css::handleBar></div></div>
                    <div class=css::filename>{move || title.get()}</div>

                    <SheetButton icon=ic::DOWNLOAD label="下载" action=SheetAction::Download />
                    <SheetButton icon=ic::PREVIEW label="预览" action=SheetAction::Preview />
                    <Show when=move || is_admin.get()>
                        <SheetButton icon=ic::EDIT label="重命名" action=SheetAction::Rename />
                        <SheetButton icon=ic::TRASH label="删除" action=SheetAction::Delete danger=true />
                    </Show>

                    <button class=css::cancel on:click=move |_| ctx.close_sheet()>"取消"</button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SheetButton(
    icon: icondata::Icon,
    label: &'static str,
    action: SheetAction,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=if danger { format!("{} {}", css::action, css::actionDanger) } else { css::action.to_string() }
            on:click=move |_| dispatch(ctx, action)
        >
            <span class=css::actionIcon><Icon icon=icon /></span>
            <span>{label}</span>
        </button>
    }
}
