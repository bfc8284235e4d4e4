//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! application-level actions that talk to the file server.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::components::AppRouter;
use crate::config::{SHEET_OPEN_DELAY_MS, SHEET_TRANSITION_MS, messages};
use crate::core::error::FetchError;
use crate::core::{
    ActionSheet, AdminRequest, Dialog, LoadSequence, PreviewTarget, SearchState, ShareDuration, ShareRequest,
    ShareState, UploadProgress, UploadStatus, ViewModel, actions, download, listing, upload,
};
use crate::models::{BrowseRoute, FileEntry, Listing};
use crate::utils::{dom, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// Each signal wraps a plain state object from [`crate::core`]; components
/// read them reactively and mutate them only through the methods below or
/// the state object's own API.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current folder and layout override, mirrored in the address bar.
    pub route: RwSignal<BrowseRoute>,
    /// Listing plus filter, search and selection.
    pub view: RwSignal<ViewModel>,
    /// Entry shown in the preview modal.
    pub preview: RwSignal<Option<PreviewTarget>>,
    /// Desktop modal dialog.
    pub dialog: RwSignal<Dialog>,
    /// Mobile action sheet.
    pub sheet: RwSignal<ActionSheet>,
    /// Desktop upload indicator.
    pub upload: RwSignal<UploadStatus>,
    /// Global search panel.
    pub search: RwSignal<SearchState>,
    /// Mobile inline upload spinner.
    pub busy: RwSignal<bool>,
    /// Guards the listing against answers to superseded fetches.
    pub loads: RwSignal<LoadSequence>,
}

impl AppContext {
    pub fn new(listing: Listing, route: BrowseRoute) -> Self {
        Self {
            route: RwSignal::new(route),
            view: RwSignal::new(ViewModel::new(listing)),
            preview: RwSignal::new(None),
            dialog: RwSignal::new(Dialog::None),
            sheet: RwSignal::new(ActionSheet::default()),
            upload: RwSignal::new(UploadStatus::Idle),
            search: RwSignal::new(SearchState::Idle),
            busy: RwSignal::new(false),
            loads: RwSignal::new(LoadSequence::default()),
        }
    }

    /// Relative path of the listed folder.
    pub fn current_path(&self) -> String {
        self.view.with_untracked(|v| v.path().to_string())
    }

    // ========================================================================
    // Listing sync and navigation
    // ========================================================================

    /// Fetch and install the listing of `path`.
    ///
    /// Resolves to `Ok(false)` when a newer load was started meanwhile; the
    /// answer, successful or not, is then ignored.
    async fn load(self, path: &str) -> Result<bool, FetchError> {
        let mut ticket = 0;
        self.loads.update(|loads| ticket = loads.begin());
        let result = listing::fetch_listing(path).await;
        if !self.loads.with_untracked(|loads| loads.is_current(ticket)) {
            log::info(&format!("dropping superseded listing of /{}", path));
            return Ok(false);
        }
        let listing = result?;
        self.view.update(|v| v.replace_listing(listing));
        Ok(true)
    }

    /// Re-fetch the current folder after a mutation.
    ///
    /// Falls back to a full page reload when the listing cannot be fetched.
    pub fn sync_listing(self) {
        let path = self.current_path();
        spawn_local(async move {
            if let Err(err) = self.load(&path).await {
                log::warn(&format!("listing sync failed, reloading: {}", err));
                dom::reload();
            }
        });
    }

    /// Fetch the listing when the page carried none.
    pub fn initial_load(self) {
        let path = self.route.get_untracked().path;
        spawn_local(async move {
            if let Err(err) = self.load(&path).await {
                log::error(&format!("failed to load listing for /{}: {}", path, err));
            }
        });
    }

    /// Open the folder at `path` and record it in the session history.
    pub fn navigate(self, path: String) {
        self.preview.set(None);
        self.search.set(SearchState::Idle);
        spawn_local(async move {
            let route = self.route.get_untracked();
            match self.load(&path).await {
                Ok(true) => {
                    let next = route.with_path(self.current_path());
                    next.push();
                    self.route.set(next);
                }
                Ok(false) => {}
                Err(err) => {
                    log::warn(&format!("in-app navigation failed: {}", err));
                    dom::navigate_to(&route.with_path(path).to_url());
                }
            }
        });
    }

    /// Follow a back/forward step.
    pub fn restore_route(self) {
        let route = BrowseRoute::current();
        self.route.set(route.clone());
        self.preview.set(None);
        self.search.set(SearchState::Idle);
        spawn_local(async move {
            if let Err(err) = self.load(&route.path).await {
                log::warn(&format!("history restore failed, reloading: {}", err));
                dom::reload();
            }
        });
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Search the whole tree.
    pub fn run_search(self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            self.search.set(SearchState::Idle);
            return;
        }
        self.search.set(SearchState::Loading(query.clone()));
        spawn_local(async move {
            let next = match listing::search(&query).await {
                Ok(entries) => SearchState::Results {
                    query: query.clone(),
                    entries,
                },
                Err(err) => SearchState::Failed(err.to_string()),
            };
            // A newer search may have started meanwhile.
            let current = self.search.with_untracked(|s| match s {
                SearchState::Loading(q) => q == &query,
                _ => false,
            });
            if current {
                self.search.set(next);
            }
        });
    }

    // ========================================================================
    // Preview and download
    // ========================================================================

    /// Open `entry`: folders navigate, files preview.
    pub fn open_entry(self, entry: &FileEntry) {
        if entry.is_dir() {
            self.navigate(entry.path.clone());
        } else {
            self.preview.set(Some(PreviewTarget::from_entry(entry)));
        }
    }

    pub fn close_preview(self) {
        self.preview.set(None);
    }

    /// Download every selected file, staggered.
    pub fn download_selected(self) {
        let urls = self.view.with_untracked(|v| v.selected_download_urls());
        download::dispatch(urls);
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Send a mutation; re-sync on success, alert on failure.
    ///
    /// The desktop layout prefixes server messages with the action name,
    /// the mobile layout shows them bare.
    pub fn submit_admin(self, request: AdminRequest, with_prefix: bool) {
        log::info(&format!("{} in /{}", request.endpoint(), self.current_path()));
        spawn_local(async move {
            match actions::submit(&request).await {
                Ok(()) => self.sync_listing(),
                Err(err) => {
                    let prefix = with_prefix.then(|| request.failure_prefix());
                    dom::alert(&err.alert_text(prefix));
                }
            }
        });
    }

    /// Request a share link for the entry of the open share dialog.
    pub fn submit_share(self, slug: String, duration: ShareDuration) {
        let Dialog::Share { target, .. } = self.dialog.get_untracked() else {
            return;
        };
        let file_path = target.path;
        self.dialog.update(|d| {
            d.update_share(&file_path, ShareState::Submitting);
        });
        let request = ShareRequest::new(&file_path, &slug, duration);
        spawn_local(async move {
            let state = match actions::create_share(&request).await {
                Ok(url) => ShareState::Created(url),
                Err(err) => ShareState::Failed(err.alert_text(None)),
            };
            let mut applied = false;
            self.dialog.update(|d| applied = d.update_share(&file_path, state));
            if !applied {
                log::info(&format!("dropping share result for closed dialog of /{}", file_path));
            }
        });
    }

    /// Upload with the desktop progress indicator.
    pub fn upload_with_progress(self, files: Vec<File>) {
        if files.is_empty() || self.upload.with_untracked(|u| u.is_active()) {
            return;
        }
        let path = self.current_path();
        log::info(&format!("uploading {} file(s) to /{}", files.len(), path));
        self.upload
            .set(UploadStatus::Uploading(UploadProgress::new(js_sys::Date::now())));

        let on_progress = move |loaded: f64, total: f64| {
            self.upload.update(|status| {
                if let UploadStatus::Uploading(progress) = status {
                    progress.record(loaded as u64, total as u64, js_sys::Date::now());
                }
            });
        };

        spawn_local(async move {
            let result = upload::send_with_progress(&path, &files, on_progress).await;
            self.upload.set(UploadStatus::Idle);
            match result {
                Ok(()) => self.sync_listing(),
                Err(err) => dom::alert(&err.alert_text(Some(messages::UPLOAD_FAILED))),
            }
        });
    }

    /// Upload with the mobile inline spinner.
    pub fn upload_simple(self, files: Vec<File>) {
        if files.is_empty() || self.busy.get_untracked() {
            return;
        }
        let path = self.current_path();
        self.busy.set(true);
        spawn_local(async move {
            let result = upload::send(&path, &files).await;
            self.busy.set(false);
            match result {
                Ok(()) => self.sync_listing(),
                Err(err) => dom::alert(&err.alert_text(Some(messages::UPLOAD_FAILED))),
            }
        });
    }

    // ========================================================================
    // Mobile action sheet
    // ========================================================================

    pub fn open_sheet(self, entry: FileEntry) {
        let mut epoch = 0;
        self.sheet.update(|sheet| epoch = sheet.open(entry));
        Timeout::new(SHEET_OPEN_DELAY_MS, move || {
            self.sheet.update(|sheet| {
                sheet.settle_open(epoch);
            });
        })
        .forget();
    }

    pub fn close_sheet(self) {
        let mut closing = None;
        self.sheet.update(|sheet| closing = sheet.close());
        if let Some(epoch) = closing {
            Timeout::new(SHEET_TRANSITION_MS, move || {
                self.sheet.update(|sheet| {
                    sheet.finish_close(epoch);
                });
            })
            .forget();
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Seeds it from the listing embedded in the page, or fetches one
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let route = BrowseRoute::current();
    let embedded = listing::embedded_listing();
    let needs_fetch = embedded.is_none();

    let ctx = AppContext::new(
        embedded.unwrap_or_else(|| Listing {
            path: route.path.clone(),
            ..Default::default()
        }),
        route,
    );
    provide_context(ctx);

    if needs_fetch {
        ctx.initial_load();
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f7fa;
                    color: #333;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #e74c3c; margin-bottom: 1rem;">
                            "出错了"
                        </h1>
                        <p style="color: #777; margin-bottom: 2rem;">
                            "页面发生意外错误，请刷新重试。"
                        </p>
                        <ul style="text-align: left; color: #e74c3c; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #3498db;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "刷新页面"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
