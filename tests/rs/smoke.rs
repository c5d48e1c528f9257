//! Integration smoke tests for `edu_portal`

use edu_portal::core::pages::sparkle::landing_page_document;
use edu_portal::core::pages::AskDoubtsLink;
use edu_portal::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn ask_doubts_link_scrolls_to_contact() {
    let mut doc = landing_page_document();
    let link = AskDoubtsLink::attach(&doc).expect("landing page has the link");
    let outcome = link.on_click(&mut doc);

    assert!(outcome.default_prevented);
    assert!(outcome.scrolled);
    let contact = doc.get_element_by_id("contact").unwrap();
    assert_eq!(doc.last_scroll().map(|(node, _)| node), Some(contact));
}
