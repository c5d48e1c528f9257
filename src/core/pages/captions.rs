//! Caption track picker for the course video

use crate::core::dom::{Document, NodeId};
use crate::core::media::{TextTrack, TrackMode};
use crate::debug;

/// Id of the `<video>` element
pub const VIDEO_ID: &str = "courseVideo";

/// Id of the caption `<select>`
pub const SELECT_ID: &str = "captionSelect";

/// Picker value that turns captions off
pub const NONE_VALUE: &str = "none";

/// Keeps at most one text track of the course video showing
#[derive(Debug, Clone, Copy)]
pub struct CaptionSelector {
    video: NodeId,
    select: NodeId,
}

impl CaptionSelector {
    /// Bind to the video and picker; `None` unless both are present
    #[must_use]
    pub fn attach(document: &Document) -> Option<Self> {
        Some(Self {
            video: document.get_element_by_id(VIDEO_ID)?,
            select: document.get_element_by_id(SELECT_ID)?,
        })
    }

    /// The video element
    #[must_use]
    pub const fn video(&self) -> NodeId {
        self.video
    }

    /// Handle page load: show the first track when there is one
    pub fn on_load(&self, document: &mut Document) {
        if let Some(first) = document.element_mut(self.video).text_tracks.first_mut() {
            first.mode = TrackMode::Showing;
            debug!("showing default caption track '{}'", first.label);
        }
    }

    /// Handle a change of the picker
    ///
    /// Disables every track, then shows the track whose index the picker
    /// holds. `none`, a non-numeric value or an index past the last track
    /// leaves all tracks disabled.
    ///
    /// # Returns
    /// The index of the track now showing
    pub fn on_change(&self, document: &mut Document) -> Option<usize> {
        let selection = document.value(self.select).to_string();
        let tracks = &mut document.element_mut(self.video).text_tracks;
        for track in tracks.iter_mut() {
            track.mode = TrackMode::Disabled;
        }

        if selection == NONE_VALUE {
            return None;
        }
        let index = selection.trim().parse::<usize>().ok()?;
        let Some(track) = tracks.get_mut(index) else {
            debug!("caption index {index} out of range ({} tracks)", tracks.len());
            return None;
        };
        track.mode = TrackMode::Showing;
        Some(index)
    }

    /// Set the picker to `value` and fire the change handler
    pub fn select(&self, document: &mut Document, value: &str) -> Option<usize> {
        document.set_value(self.select, value);
        self.on_change(document)
    }

    /// Current modes of the video's tracks, in order
    #[must_use]
    pub fn modes(&self, document: &Document) -> Vec<TrackMode> {
        document
            .element(self.video)
            .text_tracks
            .iter()
            .map(|track| track.mode)
            .collect()
    }
}

/// Video page markup: a video carrying `tracks` and a picker listing them
#[must_use]
pub fn video_page_document(tracks: Vec<TextTrack>) -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    let video = doc.append_with_id(body, "video", VIDEO_ID);
    doc.set_attribute(video, "controls", "controls");

    let select = doc.append_with_id(body, "select", SELECT_ID);
    let off = doc.create_element("option");
    doc.set_attribute(off, "value", NONE_VALUE);
    doc.set_text(off, "Off");
    doc.append_child(select, off);
    for (index, track) in tracks.iter().enumerate() {
        let option = doc.create_element("option");
        doc.set_attribute(option, "value", &index.to_string());
        doc.set_text(option, &track.label);
        doc.append_child(select, option);
    }

    doc.element_mut(video).text_tracks = tracks;
    doc
}
