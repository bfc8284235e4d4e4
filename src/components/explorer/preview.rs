//! In-page preview modal.
//!
//! Media elements are created from the current target and dropped when the
//! target is cleared, so closing the modal stops playback.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::{PreviewKind, PreviewTarget};
use crate::utils::{dom, fetch_text};

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");

const OVERLAY_ID: &str = "preview-overlay";

#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = Memo::new(move |_| ctx.preview.get());

    // Raw text bodies (code/text kinds only)
    let text = LocalResource::new(move || {
        let target = target.get();
        async move {
            let target = target.filter(PreviewTarget::needs_fetch)?;
            Some(fetch_text(&target.view_url).await.map_err(|e| e.to_string()))
        }
    });

    // Keydown only reaches the overlay while focus is inside it
    Effect::new(move |_| {
        if target.with(Option::is_some) {
            dom::focus_element(&format!("#{}", OVERLAY_ID));
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_preview();
        }
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div
                id=OVERLAY_ID
                class=css::overlay
                on:click=move |_| ctx.close_preview()
                on:keydown=on_keydown
                tabindex="-1"
                role="dialog"
                aria-label="File preview"
            >
                <div class=css::modal on:click=|ev| ev.stop_propagation()>
                    <div class=css::header>
                        <span class=css::title>
                            {move || target.get().map(|t| t.name).unwrap_or_default()}
                        </span>
                        <div class=css::headerActions>
                            <a
                                class=css::headerButton
                                href=move || target.get().map(|t| t.download_url).unwrap_or_default()
                                download=""
                                title="下载"
                            >
                                <Icon icon=ic::DOWNLOAD />
                            </a>
                            <button
                                class=css::headerButton
                                on:click=move |_| ctx.close_preview()
                                title="关闭"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    </div>

                    <div class=css::body>
                        {move || target.get().map(|t| match t.kind {
                            PreviewKind::Image => view! {
                                <img class=css::media src=t.view_url alt=t.name />
                            }.into_any(),
                            PreviewKind::Video => view! {
                                <video class=css::media controls=true autoplay=true>
                                    <source src=t.view_url />
                                </video>
                            }.into_any(),
                            PreviewKind::Document => view! {
                                <iframe class=css::frame src=t.view_url></iframe>
                            }.into_any(),
                            PreviewKind::Text => view! {
                                {move || match text.get() {
                                    Some(Some(Ok(body))) => view! {
                                        <pre class=css::text>{body}</pre>
                                    }.into_any(),
                                    Some(Some(Err(err))) => view! {
                                        <div class=css::message>{err}</div>
                                    }.into_any(),
                                    _ => view! {
                                        <div class=css::message>{messages::LOADING}</div>
                                    }.into_any(),
                                }}
                            }.into_any(),
                            PreviewKind::Unsupported => view! {
                                <div class=css::message>
                                    <p>{messages::PREVIEW_UNSUPPORTED}</p>
                                </div>
                            }.into_any(),
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
