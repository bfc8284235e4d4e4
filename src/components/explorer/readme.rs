//! README panel under the folder contents.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/explorer/markdown.module.css");

#[component]
pub fn Readme() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let html = Memo::new(move |_| {
        ctx.view.with(|v| {
            v.listing()
                .readme
                .as_deref()
                .filter(|md| !md.trim().is_empty())
                .map(markdown_to_html)
        })
    });

    view! {
        {move || html.get().map(|html| view! {
            <article class=css::readme>
                <div class=css::readmeTitle>"README.md"</div>
                <div class=css::markdown inner_html=html></div>
            </article>
        })}
    }
}
