//! Multipart upload transport.
//!
//! `fetch` cannot report request-body progress, so the desktop upload goes
//! through `XMLHttpRequest` and surfaces `upload.onprogress` events. The
//! mobile layout has no progress UI and posts the same form with `fetch`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_net::http::Request as HttpRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FileList, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::{UPLOAD_FILES_FIELD, UPLOAD_PATH_FIELD};
use crate::core::error::FetchError;

/// Status and raw body of an upload answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReply {
    pub status: u16,
    pub body: String,
}

impl UploadReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Collect the files of a file input selection.
pub fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Build the `path` + repeated `files` form.
pub fn build_form(path: &str, files: &[File]) -> Result<FormData, FetchError> {
    let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;
    form.append_with_str(UPLOAD_PATH_FIELD, path)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FILES_FIELD, file, &file.name())
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }
    Ok(form)
}

/// POST `form` to `url`, calling `on_progress(loaded, total)` for every
/// length-computable progress event.
pub async fn upload_with_progress(
    url: &str,
    form: &FormData,
    mut on_progress: impl FnMut(f64, f64) + 'static,
) -> Result<UploadReply, FetchError> {
    let xhr = XmlHttpRequest::new().map_err(|_| FetchError::RequestCreationFailed)?;
    xhr.open("POST", url)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    let upload = xhr
        .upload()
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let (tx, rx) = oneshot::channel::<Result<UploadReply, FetchError>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let on_progress_event = Closure::<dyn FnMut(ProgressEvent)>::wrap(Box::new(move |event: ProgressEvent| {
        if event.length_computable() {
            on_progress(event.loaded(), event.total());
        }
    }));
    upload.set_onprogress(Some(on_progress_event.as_ref().unchecked_ref()));

    let xhr_for_load = xhr.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(ProgressEvent)>::wrap(Box::new(move |_| {
        let reply = xhr_for_load
            .status()
            .map_err(|_| FetchError::ResponseReadFailed)
            .map(|status| UploadReply {
                status,
                body: xhr_for_load
                    .response_text()
                    .ok()
                    .flatten()
                    .unwrap_or_default(),
            });
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(reply);
        }
    }));
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err(FetchError::NetworkError("upload failed".to_string())));
        }
    }));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_error.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(form))
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = rx
        .await
        .map_err(|_| FetchError::NetworkError("upload was interrupted".to_string()))?;

    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    drop((on_progress_event, on_load, on_error));
    result
}

/// POST `form` to `url` without progress reporting.
pub async fn upload_simple(url: &str, form: FormData) -> Result<UploadReply, FetchError> {
    let response = HttpRequest::post(url)
        .body(form)
        .map_err(|_| FetchError::RequestCreationFailed)?
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    Ok(UploadReply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_ok_range() {
        let reply = |status| UploadReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).ok());
        assert!(reply(204).ok());
        assert!(!reply(403).ok());
        assert!(!reply(500).ok());
    }
}
