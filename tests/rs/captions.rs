//! Integration tests for the caption track picker

use edu_portal::core::dom::Document;
use edu_portal::core::media::{TextTrack, TrackMode};
use edu_portal::core::pages::captions::{video_page_document, NONE_VALUE};
use edu_portal::core::pages::CaptionSelector;

fn two_track_page() -> (Document, CaptionSelector) {
    let mut doc = video_page_document(vec![
        TextTrack::captions("English", "en"),
        TextTrack::captions("Hindi", "hi"),
    ]);
    let selector = CaptionSelector::attach(&doc).expect("video page has both controls");
    selector.on_load(&mut doc);
    (doc, selector)
}

#[test]
fn first_track_shows_by_default() {
    let (doc, selector) = two_track_page();
    assert_eq!(
        selector.modes(&doc),
        vec![TrackMode::Showing, TrackMode::Disabled]
    );
}

#[test]
fn selecting_index_switches_track() {
    let (mut doc, selector) = two_track_page();
    assert_eq!(selector.select(&mut doc, "1"), Some(1));
    assert_eq!(
        selector.modes(&doc),
        vec![TrackMode::Disabled, TrackMode::Showing]
    );
}

#[test]
fn selecting_none_disables_everything() {
    let (mut doc, selector) = two_track_page();
    assert_eq!(selector.select(&mut doc, NONE_VALUE), None);
    assert!(selector
        .modes(&doc)
        .iter()
        .all(|mode| *mode == TrackMode::Disabled));
}

#[test]
fn out_of_range_index_shows_nothing() {
    let (mut doc, selector) = two_track_page();
    assert_eq!(selector.select(&mut doc, "5"), None);
    assert_eq!(
        selector.modes(&doc),
        vec![TrackMode::Disabled, TrackMode::Disabled]
    );

    assert_eq!(selector.select(&mut doc, "0"), Some(0));
    let video = doc.element(selector.video());
    assert!(video.text_tracks[0].is_showing());
}

#[test]
fn pages_without_a_video_are_left_alone() {
    let doc = Document::new();
    assert!(CaptionSelector::attach(&doc).is_none());
}
