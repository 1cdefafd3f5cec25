//! Smooth scrolling to the section named by the URL fragment.
//!
//! The host arms a settle timer and a fragment-change listener on
//! [`Transition::Arm`] and drops both on [`Transition::Release`]. Callbacks
//! that still fire after release resolve to [`ScrollOutcome::Inactive`].

use std::time::Duration;

/// Delay before the first scroll so layout can settle.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Access to the page the controller scrolls.
pub trait ScrollHost {
    /// Current URL fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;
    /// Scrolls the element with `id` to the top of the viewport. Returns
    /// false when no such element exists.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Arm { settle: Duration },
    Release,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled(String),
    NoFragment,
    MissingTarget(String),
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Disabled,
    Settling,
    Listening,
}

#[derive(Clone, Debug)]
pub struct HashScroll {
    phase: Phase,
    settle: Duration,
}

impl Default for HashScroll {
    fn default() -> Self {
        Self::new(SETTLE_DELAY)
    }
}

impl HashScroll {
    pub fn new(settle: Duration) -> Self {
        Self {
            phase: Phase::Disabled,
            settle,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.phase != Phase::Disabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Transition {
        match (self.phase, enabled) {
            (Phase::Disabled, true) => {
                self.phase = Phase::Settling;
                Transition::Arm {
                    settle: self.settle,
                }
            }
            (Phase::Settling | Phase::Listening, false) => {
                self.phase = Phase::Disabled;
                Transition::Release
            }
            _ => Transition::Unchanged,
        }
    }

    /// The settle timer fired.
    pub fn settle_elapsed(&mut self, host: &impl ScrollHost) -> ScrollOutcome {
        if self.phase != Phase::Settling {
            return ScrollOutcome::Inactive;
        }
        self.phase = Phase::Listening;
        scroll_to_fragment(host)
    }

    /// The URL fragment changed.
    pub fn fragment_changed(&self, host: &impl ScrollHost) -> ScrollOutcome {
        if !self.is_enabled() {
            return ScrollOutcome::Inactive;
        }
        scroll_to_fragment(host)
    }
}

/// Element id named by a fragment such as `#goals`.
pub fn fragment_target(fragment: &str) -> Option<&str> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    (!id.is_empty()).then_some(id)
}

fn scroll_to_fragment(host: &impl ScrollHost) -> ScrollOutcome {
    let fragment = host.fragment();
    let Some(id) = fragment_target(&fragment) else {
        return ScrollOutcome::NoFragment;
    };
    if host.scroll_to(id) {
        ScrollOutcome::Scrolled(id.to_string())
    } else {
        ScrollOutcome::MissingTarget(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        fragment: RefCell<String>,
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(fragment: &str, ids: &[&'static str]) -> Self {
            Self {
                fragment: RefCell::new(fragment.to_string()),
                ids: ids.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }

        fn navigate(&self, fragment: &str) {
            *self.fragment.borrow_mut() = fragment.to_string();
        }
    }

    impl ScrollHost for FakePage {
        fn fragment(&self) -> String {
            self.fragment.borrow().clone()
        }

        fn scroll_to(&self, id: &str) -> bool {
            if !self.ids.contains(&id) {
                return false;
            }
            self.scrolled.borrow_mut().push(id.to_string());
            true
        }
    }

    #[test]
    fn fragment_target_strips_hash() {
        assert_eq!(fragment_target("#goals"), Some("goals"));
        assert_eq!(fragment_target("goals"), Some("goals"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn enabling_arms_settle_timer() {
        let mut scroll = HashScroll::default();
        assert_eq!(scroll.set_enabled(true), Transition::Arm { settle: SETTLE_DELAY });
        assert_eq!(scroll.set_enabled(true), Transition::Unchanged);
        assert_eq!(scroll.set_enabled(false), Transition::Release);
        assert_eq!(scroll.set_enabled(false), Transition::Unchanged);
    }

    #[test]
    fn settle_scrolls_to_existing_target() {
        let page = FakePage::new("#bom-table", &["bom-table", "contact"]);
        let mut scroll = HashScroll::default();
        scroll.set_enabled(true);
        assert_eq!(scroll.settle_elapsed(&page), ScrollOutcome::Scrolled("bom-table".into()));
        assert_eq!(*page.scrolled.borrow(), vec!["bom-table".to_string()]);
        // The settle timer is one-shot.
        assert_eq!(scroll.settle_elapsed(&page), ScrollOutcome::Inactive);
    }

    #[test]
    fn unknown_or_empty_fragment_does_not_scroll() {
        let page = FakePage::new("#nowhere", &["goals"]);
        let mut scroll = HashScroll::default();
        scroll.set_enabled(true);
        assert_eq!(scroll.settle_elapsed(&page), ScrollOutcome::MissingTarget("nowhere".into()));
        page.navigate("");
        assert_eq!(scroll.fragment_changed(&page), ScrollOutcome::NoFragment);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn fragment_changes_scroll_while_enabled() {
        let page = FakePage::new("", &["goals", "problem"]);
        let mut scroll = HashScroll::default();
        scroll.set_enabled(true);
        scroll.settle_elapsed(&page);
        page.navigate("#problem");
        assert_eq!(scroll.fragment_changed(&page), ScrollOutcome::Scrolled("problem".into()));
    }

    #[test]
    fn disabling_cancels_pending_and_later_scrolls() {
        let page = FakePage::new("#goals", &["goals"]);
        let mut scroll = HashScroll::default();
        scroll.set_enabled(true);
        scroll.set_enabled(false);
        assert_eq!(scroll.settle_elapsed(&page), ScrollOutcome::Inactive);
        page.navigate("#goals");
        assert_eq!(scroll.fragment_changed(&page), ScrollOutcome::Inactive);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn re_enabling_rearms() {
        let page = FakePage::new("#goals", &["goals"]);
        let mut scroll = HashScroll::default();
        scroll.set_enabled(true);
        scroll.set_enabled(false);
        assert!(matches!(scroll.set_enabled(true), Transition::Arm { .. }));
        assert_eq!(scroll.settle_elapsed(&page), ScrollOutcome::Scrolled("goals".into()));
    }
}
