use serde::{Deserialize, Serialize};

/// Extensions the processing service treats as video.
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".avi", ".mov", ".mkv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else {
            MediaKind::Video
        }
    }

    /// Guesses the kind of a remote resource from its path. Anything that is
    /// not a known video container is shown as an image.
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    LocalFile,
    RemoteUrl,
    SampleAsset,
}

/// `accept` filter for the file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptFilter {
    #[default]
    Any,
    Images,
    Videos,
}

impl AcceptFilter {
    pub fn as_attr(self) -> &'static str {
        match self {
            AcceptFilter::Any => "image/*,video/*",
            AcceptFilter::Images => "image/*",
            AcceptFilter::Videos => "video/*",
        }
    }
}

/// A file picked or dropped by the user. `H` is the platform handle used to
/// upload the bytes later (a browser `File` in the frontend).
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile<H> {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    handle: H,
}

impl<H> LocalFile<H> {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64, handle: H) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            handle,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// The media currently chosen for analysis. Built in one step by the
/// constructors below so `kind` always matches `display_url`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSelection<H> {
    source: SourceKind,
    file: Option<LocalFile<H>>,
    display_url: String,
    kind: MediaKind,
}

impl<H> MediaSelection<H> {
    pub fn local_file(file: LocalFile<H>, object_url: impl Into<String>) -> Self {
        let kind = MediaKind::from_mime(&file.mime_type);
        Self {
            source: SourceKind::LocalFile,
            file: Some(file),
            display_url: object_url.into(),
            kind,
        }
    }

    /// Returns `None` for a blank URL.
    pub fn remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            source: SourceKind::RemoteUrl,
            file: None,
            display_url: url.to_string(),
            kind: MediaKind::from_url(url),
        })
    }

    pub fn sample(path: impl Into<String>) -> Self {
        Self {
            source: SourceKind::SampleAsset,
            file: None,
            display_url: path.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn file(&self) -> Option<&LocalFile<H>> {
        self.file.as_ref()
    }

    pub fn display_url(&self) -> &str {
        &self.display_url
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}
