use crate::api::{
    self, FETCHED_FILENAME, FIELD_CONFIDENCE, FIELD_DISPLAY_MODE, FIELD_MODEL, ProcessingResult,
};
use crate::config::ClientConfig;
use crate::error::{SubmitError, TransportError};
use crate::media::LocalFile;
use crate::params::ProcessingParameters;
use crate::session::SubmissionTicket;

/// An HTTP response as the workflow needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The `file` part of the upload.
#[derive(Debug)]
pub enum FilePart<'a, H> {
    Local(&'a LocalFile<H>),
    Fetched {
        bytes: Vec<u8>,
        filename: &'static str,
    },
}

/// Multipart body of `POST /api/process`.
#[derive(Debug)]
pub struct ProcessForm<'a, H> {
    pub file: FilePart<'a, H>,
    pub model: &'static str,
    pub confidence: String,
    pub display_mode: &'static str,
}

impl<'a, H> ProcessForm<'a, H> {
    pub fn new(file: FilePart<'a, H>, parameters: &ProcessingParameters) -> Self {
        Self {
            file,
            model: parameters.model.wire_id(),
            confidence: parameters.confidence.wire_value(),
            display_mode: parameters.display_mode.wire_id(),
        }
    }

    /// Non-file fields in the order they are appended.
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            (FIELD_MODEL, self.model),
            (FIELD_CONFIDENCE, &self.confidence),
            (FIELD_DISPLAY_MODE, self.display_mode),
        ]
    }
}

/// HTTP access used by [`submit`]. The browser implementation lives in the
/// frontend; tests use a recording mock.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Platform handle of a local file.
    type Handle;

    /// `GET url`. A non-2xx status is a response, not an error.
    async fn fetch(&self, url: &str) -> Result<Response, TransportError>;

    /// `POST endpoint` with a multipart body.
    async fn post_process(
        &self,
        endpoint: &str,
        form: ProcessForm<'_, Self::Handle>,
    ) -> Result<Response, TransportError>;
}

/// Runs one submission: builds the payload, sends exactly one processing
/// request, and interprets the answer.
pub async fn submit<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    ticket: &SubmissionTicket<T::Handle>,
) -> Result<ProcessingResult, SubmitError> {
    let selection = ticket.selection();

    let file = match selection.file() {
        Some(local) => {
            if local.size > config.max_upload_bytes {
                return Err(SubmitError::FileTooLarge {
                    size: local.size,
                    limit: config.max_upload_bytes,
                });
            }
            FilePart::Local(local)
        }
        None => {
            let response = transport
                .fetch(selection.display_url())
                .await
                .map_err(|e| SubmitError::Unknown(format!("Failed to fetch image: {}", e)))?;
            if !response.is_success() {
                return Err(SubmitError::RemoteFetchFailed {
                    status: response.status,
                });
            }
            FilePart::Fetched {
                bytes: response.body,
                filename: FETCHED_FILENAME,
            }
        }
    };

    let form = ProcessForm::new(file, ticket.parameters());
    log::info!(
        "Submitting {} (model={}, confidence={}, displayMode={})",
        selection.display_url(),
        form.model,
        form.confidence,
        form.display_mode
    );

    let response = transport.post_process(&config.process_endpoint, form).await?;
    if !response.is_success() {
        return Err(SubmitError::ServerRejected {
            status: response.status,
            status_text: response.status_text.clone(),
            body: response.text(),
        });
    }

    let file_id = api::parse_file_id(&response.body)?;
    Ok(ProcessingResult::new(file_id, &config.results_prefix))
}
