//! File list component for explorer view.
//!
//! Renders every entry of the listing once; filtering and search only flip
//! each row's inline `display` between the view's layout value and `none`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Dialog, PendingDelete, ShareState};
use crate::models::{FileEntry, ViewType};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| ctx.view.with(|v| v.listing().entries.clone()));
    let view_type = Memo::new(move |_| ctx.view.with(|v| v.view()));
    let all_checked = Memo::new(move |_| ctx.view.with(|v| v.select_all_checked()));
    let nothing_visible = Memo::new(move |_| ctx.view.with(|v| v.visible_entries().next().is_none()));

    view! {
        <div
            class=move || match view_type.get() {
                ViewType::List => format!("{} {}", css::container, css::listView),
                ViewType::Grid => format!("{} {}", css::container, css::gridView),
            }
            role="grid"
            aria-label="File list"
        >
            <Show when=move || view_type.get() == ViewType::List>
                <div class=css::listHeader role="row">
                    <span class=css::headerCheck>
                        <input
                            type="checkbox"
                            prop:checked=move || all_checked.get()
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                ctx.view.update(|v| v.select_all(checked));
                            }
                            title="全选"
                        />
                    </span>
                    <span class=css::headerIcon></span>
                    <span class=css::headerName>"名称"</span>
                    <span class=css::headerSize>"大小"</span>
                    <span class=css::headerDate>"修改时间"</span>
                    <span class=css::headerActions></span>
                </div>
            </Show>

            <For
                each=move || entries.get()
                key=|entry| (entry.name.clone(), entry.size.clone(), entry.mtime.clone())
                children=move |entry| view! { <FileItem entry=entry /> }
            />

            <Show when=move || nothing_visible.get()>
                <div class=css::empty>"这里什么都没有"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileItem(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let display = {
        let entry = entry.clone();
        Memo::new(move |_| ctx.view.with(|v| v.item_display(&entry)))
    };
    let selectable = {
        let entry = entry.clone();
        Memo::new(move |_| ctx.view.with(|v| v.is_selectable(&entry)))
    };
    let checked = {
        let name = entry.name.clone();
        Memo::new(move |_| ctx.view.with(|v| v.is_checked(&name)))
    };
    let is_admin = Memo::new(move |_| ctx.view.with(|v| v.listing().is_admin));

    let is_dir = entry.is_dir();
    let icon = ic::for_kind(entry.kind);
    let name = entry.name.clone();
    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let on_toggle = {
        let name = name.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_checked(&ev);
            ctx.view.update(|v| v.toggle(&name, value));
        }
    };

    let on_open = {
        let entry = entry.clone();
        move |_: leptos::ev::MouseEvent| ctx.open_entry(&entry)
    };

    view! {
        <div
            class=move || {
                if checked.get() {
                    format!("{} {}", css::item, css::selected)
                } else {
                    css::item.to_string()
                }
            }
            style=move || format!("display: {};", display.get())
            role="row"
            aria-label=aria_label
            aria-selected=move || checked.get()
        >
            <span class=css::check>
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    disabled=move || !selectable.get()
                    on:change=on_toggle
                    on:click=|ev| ev.stop_propagation()
                />
            </span>

            <span class=css::icon aria-hidden="true" on:click=on_open.clone()>
                <Icon icon=icon />
            </span>

            <span
                class=if is_dir { format!("{} {}", css::name, css::nameDir) } else { css::name.to_string() }
                title=name.clone()
                on:click=on_open
            >
                {name.clone()}
            </span>

            <span class=css::size>{entry.size.clone()}</span>
            <span class=css::date>{entry.mtime.clone()}</span>

            <ItemActions entry=entry is_admin=is_admin />
        </div>
    }
}

/// Per-entry buttons: preview and download for files, admin actions for all.
#[component]
fn ItemActions(entry: FileEntry, is_admin: Memo<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = entry.is_dir();
    let download_url = entry.download_url();
    let preview_entry = entry.clone();
    let share_entry = entry.clone();
    let rename_name = entry.name.clone();
    let delete_name = entry.name.clone();

    view! {
        <span class=css::actions>
            {(!is_dir).then(|| view! {
                <button
                    class=css::actionButton
                    on:click=move |_| ctx.open_entry(&preview_entry)
                    title="预览"
                >
                    <Icon icon=ic::PREVIEW />
                </button>
                <a class=css::actionButton href=download_url download="" title="下载">
                    <Icon icon=ic::DOWNLOAD />
                </a>
            })}
            <Show when=move || is_admin.get()>
                {
                    let share_entry = share_entry.clone();
                    let rename_name = rename_name.clone();
                    let delete_name = delete_name.clone();
                    view! {
                        {(!is_dir).then(|| {
                            let share_entry = share_entry.clone();
                            view! {
                                <button
                                    class=css::actionButton
                                    on:click=move |_| ctx.dialog.set(Dialog::Share {
                                        target: share_entry.clone(),
                                        state: ShareState::Editing,
                                    })
                                    title="分享"
                                >
                                    <Icon icon=ic::SHARE />
                                </button>
                            }
                        })}
                        <button
                            class=css::actionButton
                            on:click=move |_| ctx.dialog.set(Dialog::Rename {
                                old_name: rename_name.clone(),
                            })
                            title="重命名"
                        >
                            <Icon icon=ic::EDIT />
                        </button>
                        <button
                            class=format!("{} {}", css::actionButton, css::actionDanger)
                            on:click=move |_| ctx.dialog.set(Dialog::Delete(
                                PendingDelete::single(delete_name.clone()),
                            ))
                            title="删除"
                        >
                            <Icon icon=ic::TRASH />
                        </button>
                    }
                }
            </Show>
        </span>
    }
}
