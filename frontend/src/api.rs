use detector_shared::api::FIELD_FILE;
use detector_shared::{FilePart, ProcessForm, Response, Transport, TransportError};
use gloo_file::{Blob as GlooBlob, File as GlooFile};
use gloo_net::http::{Request, Response as GlooResponse};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// `Transport` backed by the browser's `fetch`.
pub struct BrowserTransport;

fn js_error(context: &str, value: JsValue) -> TransportError {
    TransportError::new(format!("{}: {:?}", context, value))
}

async fn read_response(resp: GlooResponse) -> Result<Response, TransportError> {
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp
        .binary()
        .await
        .map_err(|e| TransportError::new(e.to_string()))?;
    Ok(Response {
        status,
        status_text,
        body,
    })
}

impl Transport for BrowserTransport {
    type Handle = GlooFile;

    async fn fetch(&self, url: &str) -> Result<Response, TransportError> {
        log::debug!("Fetching source bytes from {}", url);
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        read_response(resp).await
    }

    async fn post_process(
        &self,
        endpoint: &str,
        form: ProcessForm<'_, GlooFile>,
    ) -> Result<Response, TransportError> {
        let form_data = FormData::new().map_err(|e| js_error("FormData", e))?;

        match &form.file {
            FilePart::Local(local) => {
                let raw: &web_sys::File = local.handle().as_ref();
                form_data
                    .append_with_blob_and_filename(FIELD_FILE, raw, &local.name)
                    .map_err(|e| js_error(FIELD_FILE, e))?;
            }
            FilePart::Fetched { bytes, filename } => {
                let blob = GlooBlob::new(bytes.as_slice());
                form_data
                    .append_with_blob_and_filename(FIELD_FILE, blob.as_ref(), filename)
                    .map_err(|e| js_error(FIELD_FILE, e))?;
            }
        }

        for (name, value) in form.text_fields() {
            form_data
                .append_with_str(name, value)
                .map_err(|e| js_error(name, e))?;
        }

        let request = Request::post(endpoint)
            .body(form_data)
            .map_err(|e| TransportError::new(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        read_response(resp).await
    }
}
