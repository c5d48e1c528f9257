//! Integration tests for the sparkle decoration pass

use edu_portal::core::dom::Document;
use edu_portal::core::pages::sparkle::{
    dashboard_page_document, landing_page_document, BACKGROUND_SPARKLES, DASHBOARD_SPARKLES,
    KEYFRAMES_STYLE_ID,
};
use edu_portal::core::pages::{SparkleDecorator, SparkleKind, SparkleReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn count(doc: &Document, kind: SparkleKind) -> usize {
    let container = doc.query_selector(kind.container_selector()).unwrap();
    doc.children(container).len()
}

#[test]
fn landing_page_gets_forty_sparkles() {
    let mut doc = landing_page_document();
    let mut rng = StdRng::seed_from_u64(1);
    let report = SparkleDecorator::decorate(&mut doc, &mut rng);

    assert_eq!(
        report,
        SparkleReport {
            background: 40,
            dashboard: 0,
            keyframes_injected: true
        }
    );
    assert_eq!(count(&doc, SparkleKind::Background), BACKGROUND_SPARKLES);
    assert_eq!(doc.query_selector_all(".background-glitter .sparkle").len(), 40);
}

#[test]
fn dashboard_gets_eighteen_sparkles() {
    let mut doc = dashboard_page_document();
    let report = SparkleDecorator::decorate(&mut doc, &mut StdRng::seed_from_u64(2));

    assert_eq!(report.background, 0);
    assert_eq!(report.dashboard, DASHBOARD_SPARKLES);
    assert_eq!(doc.query_selector_all(".dashboard-sparkle").len(), 18);
}

#[test]
fn bare_page_is_untouched_apart_from_keyframes() {
    let mut doc = Document::new();
    let report = SparkleDecorator::decorate(&mut doc, &mut StdRng::seed_from_u64(3));

    assert_eq!(report.background + report.dashboard, 0);
    assert!(doc.children(doc.body()).is_empty());
}

#[test]
fn second_pass_appends_another_batch() {
    let mut doc = landing_page_document();
    let mut rng = StdRng::seed_from_u64(4);
    SparkleDecorator::decorate(&mut doc, &mut rng);
    let second = SparkleDecorator::decorate(&mut doc, &mut rng);

    assert_eq!(count(&doc, SparkleKind::Background), 80);
    assert!(!second.keyframes_injected);
    assert_eq!(doc.query_selector_all(&format!("#{KEYFRAMES_STYLE_ID}")).len(), 1);
}

#[test]
fn same_seed_same_page() {
    let render = |seed| {
        let mut doc = landing_page_document();
        SparkleDecorator::decorate(&mut doc, &mut StdRng::seed_from_u64(seed));
        doc.to_html()
    };
    assert_eq!(render(9), render(9));
    assert_ne!(render(9), render(10));
}

#[test]
fn background_sparkles_are_styled() {
    let mut doc = landing_page_document();
    SparkleDecorator::decorate(&mut doc, &mut StdRng::seed_from_u64(5));
    let first = doc.query_selector(".sparkle").unwrap();

    assert!(doc.style(first, "left").unwrap().ends_with("vw"));
    assert!(doc.style(first, "top").unwrap().ends_with("vh"));
    assert!(doc
        .style(first, "animation")
        .unwrap()
        .starts_with("floatSparkle "));
}

#[test]
fn dashboard_sparkles_are_styled() {
    let mut doc = dashboard_page_document();
    SparkleDecorator::decorate(&mut doc, &mut StdRng::seed_from_u64(6));

    let sparkles = doc.query_selector_all(".dashboard-section .dashboard-sparkle");
    assert_eq!(sparkles.len(), DASHBOARD_SPARKLES);
    for sparkle in sparkles {
        assert!(doc.style(sparkle, "left").unwrap().ends_with('%'));
        assert!(doc.style(sparkle, "top").unwrap().ends_with('%'));
        assert!(doc.style(sparkle, "width").unwrap().ends_with("px"));

        let duration = doc.style(sparkle, "animation-duration").unwrap();
        let seconds: f64 = duration.strip_suffix('s').unwrap().parse().unwrap();
        assert!((5.0..=9.0).contains(&seconds), "{duration}");
        assert!(doc.style(sparkle, "animation").is_none());
    }
}
