//! Mobile explorer.
//!
//! Tapping a folder opens it; tapping a file (or any entry's menu button)
//! opens the action sheet. Admin actions live behind a header menu and use
//! native prompts instead of modals.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::ActionSheet;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, messages};
use crate::core::AdminRequest;
use crate::models::FileEntry;
use crate::utils::dom;
use crate::utils::upload::files_of;

stylance::import_crate_style!(css, "src/components/mobile/mobile.module.css");

const MOBILE_UPLOAD_INPUT_ID: &str = "mobile-upload-input";

#[component]
pub fn MobileExplorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| ctx.view.with(|v| v.listing().entries.clone()));
    let query = Memo::new(move |_| ctx.view.with(|v| v.query().to_string()));
    let parent = Memo::new(move |_| {
        ctx.view.with(|v| {
            let path = v.path();
            (!path.is_empty()).then(|| {
                path.rsplit_once('/')
                    .map(|(parent, _)| parent.to_string())
                    .unwrap_or_default()
            })
        })
    });

    view! {
        <div class=css::mobile>
            <MobileHeader />

            <div class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    class=css::searchInput
                    type="search"
                    placeholder="搜索文件..."
                    prop:value=move || query.get()
                    on:input=move |ev| ctx.view.update(|v| v.set_query(event_target_value(&ev)))
                />
            </div>

            <div class=css::list>
                {move || parent.get().map(|parent| view! {
                    <div class=css::item on:click=move |_| ctx.navigate(parent.clone())>
                        <span class=css::icon><Icon icon=ic::FOLDER /></span>
                        <span class=css::name>".."</span>
                    </div>
                })}
                <For
                    each=move || entries.get()
                    key=|entry| (entry.name.clone(), entry.size.clone(), entry.mtime.clone())
                    children=move |entry| view! { <MobileItem entry=entry /> }
                />
            </div>

            <ActionSheet />
        </div>
    }
}

#[component]
fn MobileHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_admin = Memo::new(move |_| ctx.view.with(|v| v.listing().is_admin));
    let menu_open = RwSignal::new(false);

    let on_mkdir = move |_| {
        menu_open.set(false);
        if let Some(name) = dom::prompt(messages::MKDIR_PROMPT, "")
            && let Some(request) = AdminRequest::mkdir(&ctx.current_path(), &name)
        {
            ctx.submit_admin(request, false);
        }
    };

    let on_upload = move |_| {
        menu_open.set(false);
        dom::click_element(&format!("#{}", MOBILE_UPLOAD_INPUT_ID));
    };

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
        input.set_value("");
        ctx.upload_simple(files);
    };

    view! {
        <header class=css::header>
            <div class=css::brand on:click=move |_| ctx.navigate(String::new())>
                {move || if ctx.busy.get() {
                    view! {
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                        <span>{messages::UPLOADING}</span>
                    }.into_any()
                } else {
                    view! {
                        <Icon icon=ic::HOME />
                        <span>{APP_NAME}</span>
                    }.into_any()
                }}
            </div>

            <Show when=move || is_admin.get()>
                <div class=css::menuWrapper>
                    <button
                        class=css::menuButton
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        title="管理"
                    >
                        <Icon icon=ic::MORE />
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class=css::menu>
                            <button class=css::menuItem on:click=on_mkdir>
                                <Icon icon=ic::NEW_FOLDER />
                                <span>"新建文件夹"</span>
                            </button>
                            <button class=css::menuItem on:click=on_upload>
                                <Icon icon=ic::UPLOAD />
                                <span>"上传文件"</span>
                            </button>
                        </div>
                    </Show>
                    <input
                        id=MOBILE_UPLOAD_INPUT_ID
                        class=css::hiddenInput
                        type="file"
                        multiple=true
                        on:change=on_files
                    />
                </div>
            </Show>
        </header>
    }
}

#[component]
fn MobileItem(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = {
        let entry = entry.clone();
        Memo::new(move |_| ctx.view.with(|v| v.is_visible(&entry)))
    };

    let icon = ic::for_kind(entry.kind);
    let name = entry.name.clone();
    let meta = if entry.is_dir() {
        entry.mtime.clone()
    } else {
        format!("{} · {}", entry.size, entry.mtime)
    };

    let tap_entry = entry.clone();
    let on_tap = move |_| {
        if tap_entry.is_dir() {
            ctx.navigate(tap_entry.path.clone());
        } else {
            ctx.open_sheet(tap_entry.clone());
        }
    };
    let on_more = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.open_sheet(entry.clone());
    };

    view! {
        <div
            class=css::item
            style=move || if visible.get() { "" } else { "display: none;" }
            on:click=on_tap
        >
            <span class=css::icon><Icon icon=icon /></span>
            <div class=css::info>
                <span class=css::name>{name}</span>
                <span class=css::meta>{meta}</span>
            </div>
            <button class=css::more on:click=on_more>
                <Icon icon=ic::MORE />
            </button>
        </div>
    }
}
