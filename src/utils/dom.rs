//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAnchorElement, HtmlDocument, HtmlElement, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Text content of the element with `id`.
pub fn element_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Open the file picker of the input matching `selector`.
pub fn click_element(selector: &str) {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.click();
    }
}

// =============================================================================
// Blocking dialogs
// =============================================================================

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// `false` when dismissed or when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `None` when cancelled.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Full page reload.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Leave the page for `url`.
pub fn navigate_to(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_href(url);
    }
}

/// Start a browser download of `url` through a transient hidden anchor.
pub fn trigger_download(url: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(anchor) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<HtmlAnchorElement>())
    else {
        return;
    };

    anchor.set_href(url);
    anchor.set_download("");
    let _ = anchor.style().set_property("display", "none");
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        anchor.remove();
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Copy `text`, using the async Clipboard API in secure contexts and the
/// legacy `execCommand("copy")` elsewhere. Returns whether it succeeded.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };

    if window.is_secure_context() {
        let promise = window.navigator().clipboard().write_text(text);
        if JsFuture::from(promise).await.is_ok() {
            return true;
        }
    }

    copy_with_exec_command(text)
}

fn copy_with_exec_command(text: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(input) = document
        .create_element("input")
        .map(|el| el.unchecked_into::<HtmlInputElement>())
    else {
        return false;
    };

    input.set_value(text);
    let _ = input.style().set_property("position", "fixed");
    let _ = input.style().set_property("opacity", "0");
    if body.append_child(&input).is_err() {
        return false;
    }
    input.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    input.remove();
    copied
}
