//! Core of the road boundary detector UI: the selection/submission state
//! machine and the `/api/process` contract, independent of the browser.

pub mod api;
pub mod config;
pub mod error;
pub mod media;
pub mod params;
pub mod session;
pub mod submit;
pub mod view;

pub use api::ProcessingResult;
pub use config::ClientConfig;
pub use error::{ConfigError, SubmitError, TransportError};
pub use media::{AcceptFilter, LocalFile, MediaKind, MediaSelection, SourceKind};
pub use params::{ConfidenceThreshold, DisplayMode, ModelVariant, ProcessingParameters};
pub use session::{Session, Status, SubmissionTicket};
pub use submit::{FilePart, ProcessForm, Response, Transport, submit};
pub use view::Stage;
