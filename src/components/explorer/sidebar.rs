//! Sidebar: brand, type filters with counts, disk usage.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::TypeFilter;
use crate::utils::format::progress_width;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let disk = Memo::new(move |_| ctx.view.with(|v| v.listing().disk.clone()));

    view! {
        <aside class=css::sidebar>
            <button
                class=css::brand
                on:click=move |_| ctx.navigate(String::new())
                title="返回根目录"
            >
                <Icon icon=ic::HOME />
                <span>{APP_NAME}</span>
            </button>

            <nav class=css::filters>
                {TypeFilter::SIDEBAR
                    .into_iter()
                    .map(|filter| view! { <FilterItem filter=filter /> })
                    .collect_view()}
            </nav>

            {move || disk.get().map(|disk| view! {
                <div class=css::disk>
                    <div class=css::diskLabel>
                        <Icon icon=ic::DISK />
                        <span>{format!("{} / {}", disk.used, disk.total)}</span>
                    </div>
                    <div class=css::diskTrack>
                        <div class=css::diskFill style=progress_width(disk.percent)></div>
                    </div>
                </div>
            })}
        </aside>
    }
}

#[component]
fn FilterItem(filter: TypeFilter) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_active = Memo::new(move |_| ctx.view.with(|v| v.filter() == filter));
    let count = Memo::new(move |_| {
        ctx.view
            .with(|v| v.listing().stats.as_ref().and_then(|s| filter.count(s)))
    });
    let icon = match filter {
        TypeFilter::All => ic::ALL_TYPES,
        TypeFilter::Kind(kind) => ic::for_kind(kind),
    };

    view! {
        <button
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::filterItem, css::filterActive)
                } else {
                    css::filterItem.to_string()
                }
            }
            on:click=move |_| ctx.view.update(|v| v.set_filter(filter))
        >
            <span class=css::filterIcon><Icon icon=icon /></span>
            <span class=css::filterLabel>{filter.label()}</span>
            {move || count.get().map(|n| view! { <span class=css::filterCount>{n}</span> })}
        </button>
    }
}
