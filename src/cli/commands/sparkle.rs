//! Sparkle command handler

use edu_portal::core::pages::sparkle::{dashboard_page_document, landing_page_document};
use edu_portal::core::pages::SparkleDecorator;
use edu_portal::verbose;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Decorate a page and print its markup
pub fn run(seed: Option<u64>, dashboard: bool) {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut document = if dashboard {
        dashboard_page_document()
    } else {
        landing_page_document()
    };

    let report = SparkleDecorator::decorate(&mut document, &mut rng);
    verbose!(
        "Added {} background and {} dashboard sparkles",
        report.background,
        report.dashboard
    );
    println!("{}", document.to_html());
}
