//! Share link dialog and QR code dialog.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{Modal, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{QR_SIZE_PX, messages};
use crate::core::{Dialog, ShareDuration, ShareState};
use crate::utils::{dom, qr_svg};

#[component]
pub fn ShareDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let file_name = ctx.dialog.with_untracked(|d| match d {
        Dialog::Share { target, .. } => target.name.clone(),
        _ => String::new(),
    });
    let state = Memo::new(move |_| {
        ctx.dialog.with(|d| match d {
            Dialog::Share { state, .. } => state.clone(),
            _ => ShareState::Editing,
        })
    });

    let slug = RwSignal::new(String::new());
    let duration = RwSignal::new(ShareDuration::default());

    let submit = move |_| {
        if state.get_untracked().submit_disabled() {
            return;
        }
        ctx.submit_share(slug.get_untracked(), duration.get_untracked());
    };

    view! {
        <Modal title="分享文件">
            <p class=css::message>{file_name}</p>

            <Show when=move || state.with(ShareState::show_form)>
                <label class=css::label>"自定义后缀 (可选)"</label>
                <input
                    class=css::input
                    type="text"
                    placeholder="留空自动生成"
                    prop:value=move || slug.get()
                    on:input=move |ev| slug.set(event_target_value(&ev))
                />
                <label class=css::label>"有效期"</label>
                <select
                    class=css::input
                    on:change=move |ev| {
                        if let Some(choice) = ShareDuration::from_value(&event_target_value(&ev)) {
                            duration.set(choice);
                        }
                    }
                >
                    {ShareDuration::CHOICES
                        .into_iter()
                        .map(|choice| view! {
                            <option
                                value=choice.value()
                                selected=move || duration.get() == choice
                            >
                                {choice.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                {move || state.with(|s| s.error().map(|err| view! {
                    <p class=css::error>{err.to_string()}</p>
                }))}
                <div class=css::buttons>
                    <button
                        class=format!("{} {}", css::button, css::buttonPrimary)
                        disabled=move || state.with(ShareState::submit_disabled)
                        on:click=submit
                    >
                        {move || state.with(ShareState::submit_label)}
                    </button>
                </div>
            </Show>

            {move || state.with(|s| s.url().map(str::to_string)).map(|url| view! {
                <ShareResult url=url />
            })}
        </Modal>
    }
}

#[component]
fn ShareResult(url: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let copy_url = url.clone();
    let qr_url = url.clone();

    let on_copy = move |_| {
        let url = copy_url.clone();
        spawn_local(async move {
            dom::copy_to_clipboard(&url).await;
            dom::alert(messages::COPIED);
        });
    };

    view! {
        <div class=css::result>
            <input class=css::input type="text" readonly=true prop:value=url />
            <div class=css::buttons>
                <button class=css::button on:click=on_copy>
                    <Icon icon=ic::COPY />
                    <span>"复制链接"</span>
                </button>
                <button
                    class=css::button
                    on:click=move |_| ctx.dialog.set(Dialog::Qr { url: qr_url.clone() })
                >
                    <Icon icon=ic::QR />
                    <span>"二维码"</span>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn QrDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let svg = ctx.dialog.with_untracked(|d| match d {
        Dialog::Qr { url } => qr_svg(url, QR_SIZE_PX),
        _ => None,
    });

    view! {
        <Modal title="扫码访问">
            {match svg {
                Some(svg) => view! { <div class=css::qr inner_html=svg></div> }.into_any(),
                None => view! { <p class=css::error>"链接过长，无法生成二维码"</p> }.into_any(),
            }}
        </Modal>
    }
}
