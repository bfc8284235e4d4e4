//! Path bar component.
//!
//! Displays the current folder as clickable breadcrumbs, root first.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Breadcrumb;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| ctx.view.with(|v| v.listing().breadcrumbs()));

    view! {
        <nav class=css::pathbar>
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len();

                let root = if last == 0 {
                    view! { <SegmentCurrent icon=ic::HOME label="/".to_string() /> }.into_any()
                } else {
                    view! {
                        <SegmentLink icon=ic::HOME label="/".to_string() path=String::new() />
                    }.into_any()
                };

                let rest = crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, Breadcrumb { name, path })| {
                        view! {
                            <span class=css::separator>
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            {if idx + 1 == last {
                                view! { <SegmentCurrent icon=ic::FOLDER label=name /> }.into_any()
                            } else {
                                view! { <SegmentLink icon=ic::FOLDER label=name path=path /> }.into_any()
                            }}
                        }
                    })
                    .collect_view();

                view! { {root} {rest} }
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink(icon: icondata::Icon, label: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::segment
            on:click=move |_| ctx.navigate(path.clone())
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
