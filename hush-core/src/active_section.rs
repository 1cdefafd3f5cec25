//! Scroll-spy: decides which page section best represents the reading
//! position.
//!
//! The browser reports intersection changes per element, in any order and
//! in arbitrary batches. [`SectionTracker`] keeps the latest report for every
//! observed element and re-ranks all of them on each batch, so the answer
//! never depends on which elements happened to be in a given batch.

use std::fmt;

/// Distance from the document bottom within which the last section wins.
pub const BOTTOM_OFFSET_PX: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    /// Length in pixels against a root extent (viewport height or width).
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            MarginLength::Px(px) => px,
            MarginLength::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// CSS-style margin applied to the viewport before intersection testing.
/// Negative values shrink the detection region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    /// Upper-middle reading band: 20% off the top, 50% off the bottom.
    fn default() -> Self {
        Self {
            top: MarginLength::Percent(-20.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Percent(-50.0),
            left: MarginLength::Px(0.0),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionOptions {
    pub root_margin: RootMargin,
    pub thresholds: Vec<f64>,
    pub bottom_offset: f64,
}

impl Default for ActiveSectionOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            thresholds: (0..=10).map(|step| f64::from(step) / 10.0).collect(),
            bottom_offset: BOTTOM_OFFSET_PX,
        }
    }
}

/// One intersection report for a section element.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub id: String,
    pub intersecting: bool,
    /// Height in pixels of the part of the element inside the detection band.
    pub visible_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn near_bottom(&self, offset: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - offset
    }
}

/// Vertical detection band in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionBand {
    pub top: f64,
    pub bottom: f64,
}

impl DetectionBand {
    pub fn new(viewport_height: f64, margin: &RootMargin) -> Self {
        Self {
            top: -margin.top.resolve(viewport_height),
            bottom: viewport_height + margin.bottom.resolve(viewport_height),
        }
    }

    pub fn visible_height(&self, element_top: f64, element_bottom: f64) -> f64 {
        (self.bottom.min(element_bottom) - self.top.max(element_top)).max(0.0)
    }

    /// Report for an element spanning `top..bottom` in viewport coordinates.
    pub fn observe(&self, id: &str, top: f64, bottom: f64) -> Observation {
        let visible_height = self.visible_height(top, bottom);
        Observation {
            id: id.to_string(),
            intersecting: visible_height > 0.0,
            visible_height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SectionTracker {
    configured: Vec<String>,
    observed: Vec<String>,
    /// Latest report per element, in the order elements were first reported.
    latest: Vec<Observation>,
    active: String,
    bottom_offset: f64,
}

impl SectionTracker {
    /// Ids for which `is_present` is false are skipped; they are never
    /// observed and never ranked.
    pub fn new(
        ids: &[String],
        is_present: impl Fn(&str) -> bool,
        options: &ActiveSectionOptions,
    ) -> Self {
        let observed: Vec<String> = ids.iter().filter(|id| is_present(id)).cloned().collect();
        let active = observed.first().cloned().unwrap_or_default();
        Self {
            configured: ids.to_vec(),
            observed,
            latest: Vec::new(),
            active,
            bottom_offset: options.bottom_offset,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn observed_ids(&self) -> &[String] {
        &self.observed
    }

    /// No element resolved, so there is nothing to observe.
    pub fn is_idle(&self) -> bool {
        self.observed.is_empty()
    }

    /// Folds a batch of reports in and re-ranks. Returns the new active id
    /// only when it changed.
    pub fn record(&mut self, batch: impl IntoIterator<Item = Observation>) -> Option<String> {
        for observation in batch {
            if !self.observed.contains(&observation.id) {
                continue;
            }
            match self.latest.iter_mut().find(|o| o.id == observation.id) {
                Some(slot) => *slot = observation,
                None => self.latest.push(observation),
            }
        }

        let mut visible: Vec<&Observation> =
            self.latest.iter().filter(|o| o.intersecting).collect();
        visible.sort_by(|a, b| b.visible_height.total_cmp(&a.visible_height));
        let leader = visible.first()?.id.clone();
        self.set_active(leader)
    }

    /// Forces the last configured section when the page is scrolled to the
    /// bottom; short final sections never reach the detection band.
    pub fn record_scroll(&mut self, metrics: ScrollMetrics) -> Option<String> {
        if self.is_idle() || !metrics.near_bottom(self.bottom_offset) {
            return None;
        }
        let last = self.configured.last()?.clone();
        tracing::trace!(section = %last, "scrolled to bottom");
        self.set_active(last)
    }

    fn set_active(&mut self, id: String) -> Option<String> {
        if self.active == id {
            return None;
        }
        self.active = id.clone();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn obs(id: &str, intersecting: bool, visible_height: f64) -> Observation {
        Observation { id: id.into(), intersecting, visible_height }
    }

    fn tracker(list: &[&str]) -> SectionTracker {
        SectionTracker::new(&ids(list), |_| true, &ActiveSectionOptions::default())
    }

    #[test]
    fn default_margin_renders_as_css() {
        assert_eq!(RootMargin::default().to_string(), "-20% 0px -50% 0px");
    }

    #[test]
    fn margins_resolve_against_the_viewport() {
        let margin = RootMargin {
            top: MarginLength::Px(10.0),
            right: MarginLength::Percent(5.0),
            bottom: MarginLength::Px(10.0),
            left: MarginLength::Percent(5.0),
        };
        assert_eq!(margin.to_string(), "10px 5% 10px 5%");
        assert_eq!(margin.right.resolve(400.0), 20.0);
        assert_eq!(margin.top.resolve(400.0), 10.0);
    }

    #[test]
    fn default_thresholds_step_by_tenths() {
        let options = ActiveSectionOptions::default();
        assert_eq!(options.thresholds.len(), 11);
        assert_eq!(options.thresholds[0], 0.0);
        assert_eq!(options.thresholds[10], 1.0);
    }

    #[test]
    fn band_covers_upper_middle_of_viewport() {
        let band = DetectionBand::new(1000.0, &RootMargin::default());
        assert_eq!(band, DetectionBand { top: 200.0, bottom: 500.0 });
        assert_eq!(band.visible_height(0.0, 300.0), 100.0);
        assert_eq!(band.visible_height(600.0, 900.0), 0.0);
        assert!(!band.observe("x", 600.0, 900.0).intersecting);
    }

    #[test]
    fn empty_list_is_idle_with_empty_active() {
        let t = tracker(&[]);
        assert!(t.is_idle());
        assert_eq!(t.active(), "");
    }

    #[test]
    fn missing_elements_resolve_to_empty_active() {
        let mut t = SectionTracker::new(&ids(&["a", "b"]), |_| false, &ActiveSectionOptions::default());
        assert!(t.is_idle());
        assert_eq!(t.active(), "");
        assert_eq!(t.record([obs("a", true, 100.0)]), None);
        let bottom = ScrollMetrics { viewport_height: 800.0, scroll_y: 1200.0, document_height: 2000.0 };
        assert_eq!(t.record_scroll(bottom), None);
        assert_eq!(t.active(), "");
    }

    #[test]
    fn missing_ids_are_skipped() {
        let t = SectionTracker::new(&ids(&["a", "ghost", "c"]), |id| id != "ghost", &ActiveSectionOptions::default());
        assert_eq!(t.observed_ids(), &ids(&["a", "c"])[..]);
        assert_eq!(t.active(), "a");
    }

    #[test]
    fn tallest_visible_section_wins() {
        let mut t = tracker(&["a", "b", "c"]);
        let changed = t.record([obs("a", true, 40.0), obs("b", true, 220.0), obs("c", false, 0.0)]);
        assert_eq!(changed.as_deref(), Some("b"));
        assert_eq!(t.active(), "b");
    }

    #[test]
    fn ranking_uses_every_latest_report_not_just_the_batch() {
        let mut t = tracker(&["a", "b", "c"]);
        t.record([obs("a", true, 300.0), obs("b", true, 100.0)]);
        assert_eq!(t.active(), "a");
        // Only b is reported; a's previous 300px still outranks it.
        assert_eq!(t.record([obs("b", true, 250.0)]), None);
        assert_eq!(t.active(), "a");
        // a leaves the band; b is now the leader.
        assert_eq!(t.record([obs("a", false, 0.0)]).as_deref(), Some("b"));
    }

    #[test]
    fn out_of_order_batches_converge() {
        let mut forward = tracker(&["a", "b", "c"]);
        forward.record([obs("a", true, 10.0)]);
        forward.record([obs("b", true, 90.0)]);
        forward.record([obs("c", true, 50.0)]);

        let mut backward = tracker(&["a", "b", "c"]);
        backward.record([obs("c", true, 50.0), obs("b", true, 90.0)]);
        backward.record([obs("a", true, 10.0)]);

        assert_eq!(forward.active(), "b");
        assert_eq!(backward.active(), "b");
    }

    #[test]
    fn ties_keep_first_reported_order() {
        let mut t = tracker(&["a", "b", "c"]);
        t.record([obs("c", true, 0.0), obs("b", true, 0.0)]);
        t.record([obs("b", true, 120.0), obs("c", true, 120.0)]);
        assert_eq!(t.active(), "c");
    }

    #[test]
    fn nothing_intersecting_keeps_previous_active() {
        let mut t = tracker(&["a", "b"]);
        t.record([obs("b", true, 50.0)]);
        assert_eq!(t.record([obs("b", false, 0.0)]), None);
        assert_eq!(t.active(), "b");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut t = tracker(&["a"]);
        assert_eq!(t.record([obs("zzz", true, 999.0)]), None);
        assert_eq!(t.active(), "a");
    }

    #[test]
    fn bottom_of_page_forces_last_section() {
        let mut t = tracker(&["a", "b", "c"]);
        t.record([obs("a", true, 400.0)]);
        let near = ScrollMetrics { viewport_height: 800.0, scroll_y: 1130.0, document_height: 2000.0 };
        assert_eq!(t.record_scroll(near).as_deref(), Some("c"));
        assert_eq!(t.record_scroll(near), None);

        let far = ScrollMetrics { viewport_height: 800.0, scroll_y: 500.0, document_height: 2000.0 };
        let mut fresh = tracker(&["a", "b", "c"]);
        assert_eq!(fresh.record_scroll(far), None);
        assert_eq!(fresh.active(), "a");
    }
}
