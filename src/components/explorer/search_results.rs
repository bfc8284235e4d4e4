//! Global search results.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::SearchState;
use crate::models::FileEntry;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::searchResults>
            <div class=css::searchHeader>
                <span>
                    {move || ctx.search.with(|s| match s {
                        SearchState::Results { query, entries } => {
                            format!("\"{}\" 的搜索结果: {} 项", query, entries.len())
                        }
                        SearchState::Loading(query) => format!("正在搜索 \"{}\"", query),
                        SearchState::Failed(_) => "搜索失败".to_string(),
                        SearchState::Idle => String::new(),
                    })}
                </span>
                <button
                    class=css::actionButton
                    on:click=move |_| ctx.search.set(SearchState::Idle)
                    title="关闭搜索"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            {move || match ctx.search.get() {
                SearchState::Results { entries, .. } if entries.is_empty() => {
                    view! { <div class=css::empty>"没有找到匹配的文件"</div> }.into_any()
                }
                SearchState::Results { entries, .. } => entries
                    .into_iter()
                    .map(|entry| view! { <SearchHit entry=entry /> })
                    .collect_view()
                    .into_any(),
                SearchState::Loading(_) => {
                    view! { <div class=css::empty>{messages::LOADING}</div> }.into_any()
                }
                SearchState::Failed(err) => {
                    view! { <div class=css::empty>{err}</div> }.into_any()
                }
                SearchState::Idle => ().into_any(),
            }}
        </section>
    }
}

#[component]
fn SearchHit(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_kind(entry.kind);
    let name = entry.name.clone();
    let location = entry.path.clone();
    let size = entry.size.clone();

    view! {
        <div class=css::searchHit on:click=move |_| ctx.open_entry(&entry)>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::name>{name}</span>
            <span class=css::searchPath>{location}</span>
            <span class=css::size>{size}</span>
        </div>
    }
}
