use super::millis;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use hush_core::{HashScroll, ScrollHost, ScrollOutcome, Transition};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The current document, scrolled smoothly.
pub struct DocumentScrollHost;

impl ScrollHost for DocumentScrollHost {
    fn fragment(&self) -> String {
        window().location().hash().unwrap_or_default()
    }

    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Timer and listener alive while scrolling is enabled.
struct Armed {
    _settle: Timeout,
    _hashchange: EventListener,
}

impl Armed {
    fn new(controller: &Rc<RefCell<HashScroll>>, settle: Duration) -> Self {
        let settle_timer = {
            let controller = Rc::downgrade(controller);
            Timeout::new(millis(settle), move || {
                if let Some(controller) = controller.upgrade() {
                    let outcome = controller.borrow_mut().settle_elapsed(&DocumentScrollHost);
                    trace_outcome(&outcome);
                }
            })
        };
        let hashchange = {
            let controller = Rc::downgrade(controller);
            EventListener::new(&window(), "hashchange", move |_| {
                if let Some(controller) = controller.upgrade() {
                    let outcome = controller.borrow().fragment_changed(&DocumentScrollHost);
                    trace_outcome(&outcome);
                }
            })
        };
        Self {
            _settle: settle_timer,
            _hashchange: hashchange,
        }
    }
}

fn trace_outcome(outcome: &ScrollOutcome) {
    match outcome {
        ScrollOutcome::MissingTarget(id) => tracing::debug!(%id, "no element for fragment"),
        other => tracing::trace!(?other, "hash scroll"),
    }
}

/// Scrolls to the element named by the URL fragment once the page settles,
/// and again on every fragment change, while `enabled` is true.
pub fn use_hash_scroll(enabled: impl Into<MaybeSignal<bool>>) {
    let enabled = enabled.into();
    let controller = Rc::new(RefCell::new(HashScroll::default()));
    let armed = Rc::new(RefCell::new(None::<Armed>));

    create_effect({
        let controller = Rc::clone(&controller);
        let armed = Rc::clone(&armed);
        move |_| {
            let transition = controller.borrow_mut().set_enabled(enabled.get());
            match transition {
                Transition::Arm { settle } => {
                    *armed.borrow_mut() = Some(Armed::new(&controller, settle));
                }
                Transition::Release => drop(armed.borrow_mut().take()),
                Transition::Unchanged => {}
            }
        }
    });

    on_cleanup(move || {
        controller.borrow_mut().set_enabled(false);
        drop(armed.borrow_mut().take());
    });
}
