//! Decorative floating sparkles for the landing and dashboard pages
//!
//! Sampling a sparkle ([`SparkleKind::sample`]) is kept apart from putting
//! it in the document ([`SparkleDecorator::populate`]) so the random
//! layout can be checked without a page.

use crate::core::dom::{Document, NodeId};
use crate::debug;
use rand::Rng;

/// Sparkles added to the landing page background per population pass
pub const BACKGROUND_SPARKLES: usize = 40;

/// Sparkles added to a dashboard section per population pass
pub const DASHBOARD_SPARKLES: usize = 18;

/// Id of the `<style>` element holding the shared animation
pub const KEYFRAMES_STYLE_ID: &str = "sparkle-keyframes";

const KEYFRAMES_CSS: &str = "
@keyframes floatSparkle {
    0% { transform: translateY(0) scale(1); }
    50% { transform: translateY(-30px) scale(1.2); }
    100% { transform: translateY(0) scale(1); }
}
.sparkle {
    pointer-events: none;
    position: absolute;
    z-index: 1;
}
";

/// Which container a sparkle decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkleKind {
    /// Full-viewport glitter behind the landing page
    Background,
    /// Smaller, dimmer sparkles inside a dashboard section
    Dashboard,
}

impl SparkleKind {
    /// Selector of the container this kind is appended to
    #[must_use]
    pub const fn container_selector(self) -> &'static str {
        match self {
            Self::Background => ".background-glitter",
            Self::Dashboard => ".dashboard-section",
        }
    }

    /// Class given to each sparkle element
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Background => "sparkle",
            Self::Dashboard => "dashboard-sparkle",
        }
    }

    /// Sparkles appended per population pass
    #[must_use]
    pub const fn batch_size(self) -> usize {
        match self {
            Self::Background => BACKGROUND_SPARKLES,
            Self::Dashboard => DASHBOARD_SPARKLES,
        }
    }

    /// Draw one sparkle's position, size, opacity and animation timing
    pub fn sample<R: Rng>(self, rng: &mut R) -> Sparkle {
        let (size, opacity, duration) = match self {
            Self::Background => (4.0..10.0, 0.3..1.0, 4.0..10.0),
            Self::Dashboard => (6.0..14.0, 0.3..0.8, 5.0..9.0),
        };
        Sparkle {
            kind: self,
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(size),
            opacity: rng.gen_range(opacity),
            duration: rng.gen_range(duration),
        }
    }
}

/// One sampled sparkle, before it becomes an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Container kind
    pub kind: SparkleKind,
    /// Horizontal position, percent of the viewport or section
    pub left: f64,
    /// Vertical position, percent of the viewport or section
    pub top: f64,
    /// Width and height in pixels
    pub size: f64,
    /// Opacity between 0 and 1
    pub opacity: f64,
    /// Length of one float loop in seconds
    pub duration: f64,
}

impl Sparkle {
    /// Inline style declarations for this sparkle
    #[must_use]
    pub fn styles(&self) -> Vec<(&'static str, String)> {
        let size = format!("{:.2}px", self.size);
        match self.kind {
            SparkleKind::Background => vec![
                ("position", "absolute".to_string()),
                ("left", format!("{:.2}vw", self.left)),
                ("top", format!("{:.2}vh", self.top)),
                ("width", size.clone()),
                ("height", size),
                (
                    "background",
                    "radial-gradient(circle, #fff 60%, #e75480 100%)".to_string(),
                ),
                ("opacity", format!("{:.2}", self.opacity)),
                ("border-radius", "50%".to_string()),
                ("filter", "blur(0.5px)".to_string()),
                (
                    "animation",
                    format!("floatSparkle {:.2}s ease-in-out infinite", self.duration),
                ),
            ],
            SparkleKind::Dashboard => vec![
                ("left", format!("{:.2}%", self.left)),
                ("top", format!("{:.2}%", self.top)),
                ("width", size.clone()),
                ("height", size),
                ("opacity", format!("{:.2}", self.opacity)),
                ("animation-duration", format!("{:.2}s", self.duration)),
            ],
        }
    }
}

/// How many sparkles one decoration pass added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SparkleReport {
    /// Sparkles appended to `.background-glitter`
    pub background: usize,
    /// Sparkles appended to `.dashboard-section`
    pub dashboard: usize,
    /// Whether this pass added the keyframes style
    pub keyframes_injected: bool,
}

/// Populates the sparkle containers of a page
pub struct SparkleDecorator;

impl SparkleDecorator {
    /// Run the page-load decoration pass
    ///
    /// Each present container gets a full batch; absent containers are
    /// skipped. Calling this again appends another batch rather than
    /// replacing the first one. The keyframes style is added only once.
    pub fn decorate<R: Rng>(document: &mut Document, rng: &mut R) -> SparkleReport {
        let mut report = SparkleReport::default();

        if let Some(glitter) = document.query_selector(SparkleKind::Background.container_selector()) {
            report.background = Self::populate(document, glitter, SparkleKind::Background, rng);
        } else {
            debug!("no background glitter container, skipping sparkles");
        }

        if let Some(section) = document.query_selector(SparkleKind::Dashboard.container_selector()) {
            report.dashboard = Self::populate(document, section, SparkleKind::Dashboard, rng);
        } else {
            debug!("no dashboard section, skipping dashboard sparkles");
        }

        report.keyframes_injected = Self::inject_keyframes(document);
        report
    }

    /// Append one batch of `kind` sparkles to `container`
    ///
    /// # Returns
    /// The number of elements appended
    pub fn populate<R: Rng>(
        document: &mut Document,
        container: NodeId,
        kind: SparkleKind,
        rng: &mut R,
    ) -> usize {
        for _ in 0..kind.batch_size() {
            let sparkle = kind.sample(rng);
            let node = document.append_with_class(container, "div", kind.class());
            for (property, value) in sparkle.styles() {
                document.set_style(node, property, &value);
            }
        }
        debug!("appended {} {} elements", kind.batch_size(), kind.class());
        kind.batch_size()
    }

    /// Add the shared `floatSparkle` animation to `<head>` unless present
    ///
    /// # Returns
    /// `true` if the style element was added by this call
    pub fn inject_keyframes(document: &mut Document) -> bool {
        if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
            return false;
        }
        let head = document.head();
        let style = document.append_with_id(head, "style", KEYFRAMES_STYLE_ID);
        document.set_text(style, KEYFRAMES_CSS);
        true
    }
}

/// Landing page markup: glitter background, call-to-action buttons, contact section
#[must_use]
pub fn landing_page_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append_with_class(body, "div", "background-glitter");
    let cta = doc.append_with_class(body, "div", "cta-buttons");
    let enroll = doc.append_with_class(cta, "a", "primary");
    doc.set_text(enroll, "Explore Courses");
    let ask = doc.append_with_class(cta, "a", "secondary");
    doc.set_attribute(ask, "href", "#contact");
    doc.set_text(ask, "Ask Doubts");
    let contact = doc.append_with_id(body, "section", "contact");
    doc.set_text(contact, "Contact us");
    doc
}

/// Dashboard page markup with one decorated section
#[must_use]
pub fn dashboard_page_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append_with_class(body, "section", "dashboard-section");
    doc
}
