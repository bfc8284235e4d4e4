//! Upload progress overlay.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::messages;
use crate::utils::format::{format_percent, progress_width};

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");

#[component]
pub fn UploadProgress() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let progress = Memo::new(move |_| ctx.upload.with(|u| u.progress().cloned()));

    view! {
        <Show when=move || progress.with(Option::is_some)>
            <div class=css::overlay role="status" aria-live="polite">
                <div class=css::progressCard>
                    <div class=css::progressTitle>{messages::UPLOADING}</div>
                    <div class=css::progressTrack>
                        <div
                            class=css::progressFill
                            style=move || progress_width(progress.get().map(|p| p.percent()).unwrap_or(0.0))
                        ></div>
                    </div>
                    <div class=css::progressMeta>
                        <span>
                            {move || format_percent(progress.get().map(|p| p.rounded_percent()).unwrap_or(0))}
                        </span>
                        <span>
                            {move || progress.get().and_then(|p| p.speed_text()).unwrap_or_default()}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
