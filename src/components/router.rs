//! Application router component.
//!
//! The address bar path is the listed folder. In-app navigation pushes
//! history entries; back/forward steps arrive as `popstate` and re-sync the
//! listing for the restored path.
//!
//! Layout: `?view=mobile` forces the mobile explorer, otherwise the
//! `MOBILE_MEDIA_QUERY` breakpoint decides.

use leptos::prelude::*;
use leptos_use::use_media_query;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::components::mobile::MobileExplorer;
use crate::config::MOBILE_MEDIA_QUERY;

#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.restore_route();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let narrow = use_media_query(MOBILE_MEDIA_QUERY);
    let is_mobile = Memo::new(move |_| ctx.route.with(|r| r.force_mobile) || narrow.get());

    view! {
        <Show when=move || is_mobile.get() fallback=|| view! { <Explorer /> }>
            <MobileExplorer />
        </Show>
    }
}
