//! Home page scroll-through: layout geometry feeds the tracker, the tracker
//! feeds the navigation bar.

use hush_content::{HOME_SECTION_IDS, NAVIGATION};
use hush_core::{resolve_links, ActiveSectionOptions, DetectionBand, ScrollMetrics, SectionTracker};

const VIEWPORT: f64 = 1000.0;

/// Document offsets of each home section, top and bottom.
const LAYOUT: [(&str, f64, f64); 6] = [
    ("overview", 0.0, 900.0),
    ("problem", 900.0, 1700.0),
    ("solution", 1700.0, 2900.0),
    ("architecture", 2900.0, 4100.0),
    ("goals", 4100.0, 5200.0),
    ("github", 5200.0, 5500.0),
];

fn section_ids() -> Vec<String> {
    HOME_SECTION_IDS.iter().map(ToString::to_string).collect()
}

fn scroll_to(tracker: &mut SectionTracker, band: &DetectionBand, scroll_y: f64) -> String {
    let batch = LAYOUT
        .iter()
        .map(|(id, top, bottom)| band.observe(id, top - scroll_y, bottom - scroll_y));
    tracker.record(batch);
    tracker.record_scroll(ScrollMetrics {
        viewport_height: VIEWPORT,
        scroll_y,
        document_height: 5500.0,
    });
    tracker.active().to_string()
}

fn highlighted(active: &str) -> Vec<&'static str> {
    resolve_links(NAVIGATION, "/", active)
        .into_iter()
        .filter(|link| link.active)
        .map(|link| link.label)
        .collect()
}

#[test]
fn scrolling_down_walks_the_navigation() {
    let options = ActiveSectionOptions::default();
    let band = DetectionBand::new(VIEWPORT, &options.root_margin);
    let mut tracker = SectionTracker::new(&section_ids(), |_| true, &options);

    assert_eq!(scroll_to(&mut tracker, &band, 0.0), "overview");
    assert_eq!(highlighted(tracker.active()), vec!["Overview"]);

    // Band is 200..500 of the viewport: document 3200..3500 lies in architecture.
    assert_eq!(scroll_to(&mut tracker, &band, 3000.0), "architecture");
    assert_eq!(highlighted(tracker.active()), vec!["Architecture"]);

    // github is too short to ever fill the band; reaching the bottom selects it.
    assert_eq!(scroll_to(&mut tracker, &band, 4500.0), "github");
    assert!(highlighted(tracker.active()).is_empty());
}

#[test]
fn band_straddling_two_sections_picks_the_larger_share() {
    let options = ActiveSectionOptions::default();
    let band = DetectionBand::new(VIEWPORT, &options.root_margin);
    let mut tracker = SectionTracker::new(&section_ids(), |_| true, &options);

    // Band covers document 1600..1900: 100px of problem, 200px of solution.
    assert_eq!(scroll_to(&mut tracker, &band, 1400.0), "solution");
}

#[test]
fn sections_missing_from_the_page_are_never_selected() {
    let options = ActiveSectionOptions::default();
    let band = DetectionBand::new(VIEWPORT, &options.root_margin);
    let mut tracker = SectionTracker::new(&section_ids(), |id| id != "solution", &options);

    assert_eq!(scroll_to(&mut tracker, &band, 1400.0), "problem");
}
