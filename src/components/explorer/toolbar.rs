//! Explorer toolbar: search box, view toggle, admin actions.
//!
//! Typing filters the current folder as you go; Enter searches the whole
//! tree.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Dialog, SearchState};
use crate::models::ViewType;
use crate::utils::dom;
use crate::utils::upload::files_of;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

const UPLOAD_INPUT_ID: &str = "upload-input";

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_admin = Memo::new(move |_| ctx.view.with(|v| v.listing().is_admin));
    let view_type = Memo::new(move |_| ctx.view.with(|v| v.view()));
    let query = Memo::new(move |_| ctx.view.with(|v| v.query().to_string()));

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value.trim().is_empty() {
            ctx.search.set(SearchState::Idle);
        }
        ctx.view.update(|v| v.set_query(value));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ctx.run_search(query.get_untracked());
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
        // Allow picking the same files again
        input.set_value("");
        ctx.upload_with_progress(files);
    };

    view! {
        <header class=css::toolbar>
            <div class=css::searchBox>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder="搜索文件... (回车全局搜索)"
                    prop:value=move || query.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
            </div>

            <div class=css::toolbarActions>
                <div class=css::viewToggle role="group" aria-label="视图">
                    <ViewButton view_type=view_type mode=ViewType::List icon=ic::LIST title="列表视图" />
                    <ViewButton view_type=view_type mode=ViewType::Grid icon=ic::GRID title="网格视图" />
                </div>

                <Show when=move || is_admin.get()>
                    <button
                        class=css::actionButton
                        on:click=move |_| ctx.dialog.set(Dialog::Mkdir)
                        title="新建文件夹"
                    >
                        <Icon icon=ic::NEW_FOLDER />
                    </button>
                    <button
                        class=format!("{} {}", css::actionButton, css::actionPrimary)
                        on:click=move |_| dom::click_element(&format!("#{}", UPLOAD_INPUT_ID))
                        title="上传文件"
                    >
                        <Icon icon=ic::UPLOAD />
                        <span>"上传"</span>
                    </button>
                    <input
                        id=UPLOAD_INPUT_ID
                        class=css::hiddenInput
                        type="file"
                        multiple=true
                        on:change=on_files
                    />
                </Show>
            </div>
        </header>
    }
}

#[component]
fn ViewButton(
    view_type: Memo<ViewType>,
    mode: ViewType,
    icon: icondata::Icon,
    title: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=move || {
                if view_type.get() == mode {
                    format!("{} {}", css::actionButton, css::viewActive)
                } else {
                    css::actionButton.to_string()
                }
            }
            aria-pressed=move || (view_type.get() == mode).to_string()
            on:click=move |_| ctx.view.update(|v| v.set_view(mode))
            title=title
        >
            <Icon icon=icon />
        </button>
    }
}
