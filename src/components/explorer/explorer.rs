//! Main explorer component.
//!
//! ## Layout
//!
//! Sidebar (type filters, stats, disk) on the left; on the right the
//! toolbar, path bar, selection bar, then either global search results or
//! the folder contents followed by its README.

use leptos::prelude::*;

use super::pathbar::PathBar;
use super::readme::Readme;
use super::search_results::SearchResults;
use super::selection_bar::SelectionBar;
use super::sidebar::Sidebar;
use super::toolbar::Toolbar;
use super::{FileList, PreviewModal, UploadProgress};
use crate::app::AppContext;
use crate::components::dialogs::DialogHost;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Desktop file explorer.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let searching = Memo::new(move |_| ctx.search.with(|s| s.is_open()));

    view! {
        <div class=css::explorer>
            <Sidebar />

            <main class=css::main>
                <Toolbar />
                <PathBar />
                <SelectionBar />

                <div class=css::content>
                    <Show
                        when=move || searching.get()
                        fallback=|| view! {
                            <FileList />
                            <Readme />
                        }
                    >
                        <SearchResults />
                    </Show>
                </div>
            </main>

            <PreviewModal />
            <UploadProgress />
            <DialogHost />
        </div>
    }
}
