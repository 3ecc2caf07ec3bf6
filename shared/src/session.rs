use crate::api::ProcessingResult;
use crate::error::SubmitError;
use crate::media::MediaSelection;
use crate::params::{ConfidenceThreshold, DisplayMode, ModelVariant, ProcessingParameters};

/// Phase of the submission workflow. A result only exists in `Succeeded`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Processing,
    Succeeded(ProcessingResult),
    Failed(String),
}

/// Everything a submission needs, captured when it starts.
#[derive(Debug, Clone)]
pub struct SubmissionTicket<H> {
    generation: u64,
    selection: MediaSelection<H>,
    parameters: ProcessingParameters,
}

impl<H> SubmissionTicket<H> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selection(&self) -> &MediaSelection<H> {
        &self.selection
    }

    pub fn parameters(&self) -> &ProcessingParameters {
        &self.parameters
    }
}

/// State of the detector view. All changes go through the methods below.
///
/// `generation` is bumped by every new selection and every submission; a
/// completion carrying an older generation is dropped.
#[derive(Debug)]
pub struct Session<H> {
    selection: Option<MediaSelection<H>>,
    parameters: ProcessingParameters,
    status: Status,
    generation: u64,
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Self::new(ProcessingParameters::default())
    }
}

impl<H> Session<H> {
    pub fn new(parameters: ProcessingParameters) -> Self {
        Self {
            selection: None,
            parameters,
            status: Status::Idle,
            generation: 0,
        }
    }

    pub fn selection(&self) -> Option<&MediaSelection<H>> {
        self.selection.as_ref()
    }

    pub fn parameters(&self) -> &ProcessingParameters {
        &self.parameters
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        match &self.status {
            Status::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.status == Status::Processing
    }

    /// Whether the Run control is enabled.
    pub fn can_run(&self) -> bool {
        self.selection.is_some() && !self.is_processing()
    }

    /// Replaces the current media. Clears any result or error, and orphans an
    /// in-flight submission.
    pub fn select(&mut self, selection: MediaSelection<H>) {
        if self.is_processing() {
            log::debug!(
                "New selection while submission {} is in flight; its outcome will be ignored",
                self.generation
            );
        }
        log::info!("Selected {:?} {}", selection.kind(), selection.display_url());
        self.generation += 1;
        self.selection = Some(selection);
        self.status = Status::Idle;
    }

    pub fn set_model(&mut self, model: ModelVariant) {
        self.parameters.model = model;
    }

    /// Clamped to `0..=100`.
    pub fn set_confidence(&mut self, percent: u8) {
        self.parameters.confidence = ConfidenceThreshold::new(percent);
    }

    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.parameters.display_mode = display_mode;
    }

    /// Hides the error banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, Status::Failed(_)) {
            self.status = Status::Idle;
        }
    }

    /// Moves into `Processing` and hands out the snapshot to submit.
    ///
    /// Refused without touching state while another submission runs. With
    /// nothing selected the session fails immediately.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket<H>, SubmitError>
    where
        H: Clone,
    {
        if self.is_processing() {
            return Err(SubmitError::AlreadyProcessing);
        }

        let Some(selection) = self.selection.clone() else {
            let err = SubmitError::NoMediaSelected;
            self.status = Status::Failed(err.to_string());
            return Err(err);
        };

        self.generation += 1;
        self.status = Status::Processing;

        Ok(SubmissionTicket {
            generation: self.generation,
            selection,
            parameters: self.parameters,
        })
    }

    /// Applies the outcome of the submission started as `generation`.
    /// Returns `false` when the outcome is stale and was dropped.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<ProcessingResult, SubmitError>,
    ) -> bool {
        if generation != self.generation || !self.is_processing() {
            log::warn!(
                "Dropping outcome of submission {} (current is {})",
                generation,
                self.generation
            );
            return false;
        }

        self.status = match outcome {
            Ok(result) => Status::Succeeded(result),
            Err(err) => Status::Failed(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProcessingResult, RESULTS_PREFIX};
    use crate::media::{LocalFile, MediaSelection};

    fn sample() -> MediaSelection<()> {
        MediaSelection::sample("/samples/frame_0002.jpg")
    }

    fn succeeded(session: &mut Session<()>) {
        let ticket = session.begin_submission().unwrap();
        session.complete(ticket.generation(), Ok(ProcessingResult::new("r1", RESULTS_PREFIX)));
        assert!(session.result().is_some());
    }

    fn failed(session: &mut Session<()>) {
        let ticket = session.begin_submission().unwrap();
        session.complete(ticket.generation(), Err(SubmitError::Unknown("bad".into())));
        assert_eq!(session.error(), Some("bad"));
    }

    #[test]
    fn every_channel_clears_result_and_error() {
        let channels: Vec<Box<dyn Fn() -> MediaSelection<()>>> = vec![
            Box::new(|| MediaSelection::local_file(LocalFile::new("a.png", "image/png", 10, ()), "blob:1")),
            // Drag and drop produces the same kind of selection as the picker.
            Box::new(|| MediaSelection::local_file(LocalFile::new("b.mp4", "video/mp4", 10, ()), "blob:2")),
            Box::new(|| MediaSelection::sample("/samples/frame_0003.jpg")),
            Box::new(|| MediaSelection::remote_url("https://example.com/c.jpg").unwrap()),
        ];

        for make in channels {
            let mut session = Session::default();
            session.select(sample());
            succeeded(&mut session);
            session.select(make());
            assert_eq!(session.status(), &Status::Idle);
            assert!(session.result().is_none());

            failed(&mut session);
            session.select(make());
            assert!(session.error().is_none());
        }
    }

    #[test]
    fn submitting_without_selection_fails_immediately() {
        let mut session = Session::<()>::default();
        assert_eq!(session.begin_submission().unwrap_err(), SubmitError::NoMediaSelected);
        assert_eq!(session.error(), Some("No image or video selected"));
        assert!(!session.can_run());
    }

    #[test]
    fn second_run_while_processing_is_refused() {
        let mut session = Session::default();
        session.select(sample());
        let first = session.begin_submission().unwrap();

        assert!(!session.can_run());
        assert_eq!(session.begin_submission().unwrap_err(), SubmitError::AlreadyProcessing);
        assert!(session.is_processing());

        assert!(session.complete(first.generation(), Ok(ProcessingResult::new("x", RESULTS_PREFIX))));
        assert!(session.can_run());
    }

    #[test]
    fn stale_outcome_after_new_selection_is_dropped() {
        let mut session = Session::default();
        session.select(sample());
        let ticket = session.begin_submission().unwrap();

        session.select(MediaSelection::sample("/samples/frame_0241.jpg"));
        let applied = session.complete(ticket.generation(), Ok(ProcessingResult::new("old", RESULTS_PREFIX)));

        assert!(!applied);
        assert_eq!(session.status(), &Status::Idle);
        assert_eq!(session.selection().unwrap().display_url(), "/samples/frame_0241.jpg");
    }

    #[test]
    fn ticket_snapshots_parameters() {
        let mut session = Session::default();
        session.select(sample());
        session.set_confidence(37);
        session.set_display_mode(DisplayMode::Outline);
        let ticket = session.begin_submission().unwrap();

        session.set_confidence(90);
        assert_eq!(ticket.parameters().confidence.percent(), 37);
        assert_eq!(ticket.parameters().display_mode, DisplayMode::Outline);
    }

    #[test]
    fn parameters_survive_new_selections() {
        let mut session = Session::default();
        session.set_model(ModelVariant::Nighttime);
        session.set_confidence(12);
        session.select(sample());
        session.select(MediaSelection::sample("/samples/frame_0242.jpg"));
        assert_eq!(session.parameters().model, ModelVariant::Nighttime);
        assert_eq!(session.parameters().confidence.percent(), 12);
    }

    #[test]
    fn dismissing_only_affects_errors() {
        let mut session = Session::default();
        session.select(sample());
        failed(&mut session);
        session.dismiss_error();
        assert_eq!(session.status(), &Status::Idle);

        succeeded(&mut session);
        session.dismiss_error();
        assert!(session.result().is_some());
    }
}
