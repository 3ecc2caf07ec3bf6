//! What the main card shows, derived from the session alone.

use crate::media::MediaKind;
use crate::session::Session;

pub const EMPTY_PLACEHOLDER: &str = "Upload an image or video to see preview";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage<'a> {
    Empty,
    Preview {
        url: &'a str,
        kind: MediaKind,
    },
    /// `caption` is set for annotated images only.
    Result {
        url: &'a str,
        kind: MediaKind,
        caption: Option<String>,
    },
}

impl<'a> Stage<'a> {
    pub fn of<H>(session: &'a Session<H>) -> Self {
        let selection = session.selection();
        let kind = selection.map(|s| s.kind()).unwrap_or(MediaKind::Image);

        if let Some(result) = session.result() {
            let caption = (kind == MediaKind::Image)
                .then(|| format!("Road-Boundary {}", session.parameters().confidence));
            return Stage::Result {
                url: &result.result_url,
                kind,
                caption,
            };
        }

        match selection {
            Some(selection) => Stage::Preview {
                url: selection.display_url(),
                kind,
            },
            None => Stage::Empty,
        }
    }
}

pub fn run_label<H>(session: &Session<H>) -> &'static str {
    if session.is_processing() {
        "Processing..."
    } else {
        "Run Results"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProcessingResult, RESULTS_PREFIX};
    use crate::media::{LocalFile, MediaSelection};

    #[test]
    fn empty_session_shows_placeholder() {
        let session = Session::<()>::default();
        assert_eq!(Stage::of(&session), Stage::Empty);
        assert_eq!(run_label(&session), "Run Results");
    }

    #[test]
    fn selection_shows_preview_until_result_arrives() {
        let mut session = Session::<()>::default();
        session.set_confidence(64);
        session.select(MediaSelection::sample("/samples/frame_0003.jpg"));
        assert_eq!(
            Stage::of(&session),
            Stage::Preview {
                url: "/samples/frame_0003.jpg",
                kind: MediaKind::Image
            }
        );

        let ticket = session.begin_submission().unwrap();
        assert_eq!(run_label(&session), "Processing...");
        session.complete(ticket.generation(), Ok(ProcessingResult::new("abc", RESULTS_PREFIX)));

        assert_eq!(
            Stage::of(&session),
            Stage::Result {
                url: "/api/results/abc",
                kind: MediaKind::Image,
                caption: Some("Road-Boundary 64%".into()),
            }
        );
    }

    #[test]
    fn video_results_have_no_caption() {
        let mut session = Session::default();
        let file = LocalFile::new("drive.mp4", "video/mp4", 1024, ());
        session.select(MediaSelection::local_file(file, "blob:v"));
        let ticket = session.begin_submission().unwrap();
        session.complete(ticket.generation(), Ok(ProcessingResult::new("vid", RESULTS_PREFIX)));

        assert_eq!(
            Stage::of(&session),
            Stage::Result {
                url: "/api/results/vid",
                kind: MediaKind::Video,
                caption: None,
            }
        );
    }
}
