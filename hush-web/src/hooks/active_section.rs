use super::ViewportObserver;
use gloo::events::EventListener;
use hush_core::{ActiveSectionOptions, Observation, ScrollMetrics, SectionTracker};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserverEntry};

/// Live observation of one id list; dropping it stops both sources.
struct Subscription {
    _observer: ViewportObserver,
    _scroll: EventListener,
}

/// Tracks which of `ids` is the section being read.
///
/// Re-subscribes whenever `ids` changes. Elements are looked up on the next
/// animation frame so a list that changes together with the markup sees the
/// rendered sections.
pub fn use_active_section(
    ids: Signal<Vec<String>>,
    options: ActiveSectionOptions,
) -> ReadSignal<String> {
    let (active, set_active) = create_signal(String::new());
    let subscription = Rc::new(RefCell::new(None::<Subscription>));
    let generation = Rc::new(Cell::new(0u64));

    create_effect({
        let subscription = Rc::clone(&subscription);
        let generation = Rc::clone(&generation);
        move |_| {
            let ids = ids.get();
            subscription.borrow_mut().take();
            let current = generation.get() + 1;
            generation.set(current);

            if ids.is_empty() {
                spawn_local(async move { set_active.set(String::new()) });
                return;
            }

            let subscription = Rc::clone(&subscription);
            let generation = Rc::clone(&generation);
            let options = options.clone();
            request_animation_frame(move || {
                if generation.get() != current {
                    return;
                }
                match subscribe(&ids, &options, set_active) {
                    Ok(live) => *subscription.borrow_mut() = live,
                    Err(err) => tracing::warn!(?err, "cannot observe sections"),
                }
            });
        }
    });

    on_cleanup(move || {
        generation.set(generation.get() + 1);
        subscription.borrow_mut().take();
    });

    active
}

fn subscribe(
    ids: &[String],
    options: &ActiveSectionOptions,
    set_active: WriteSignal<String>,
) -> Result<Option<Subscription>, JsValue> {
    let document = document();
    let mut elements: Vec<Element> = Vec::with_capacity(ids.len());
    for id in ids {
        match document.get_element_by_id(id) {
            Some(element) => elements.push(element),
            None => tracing::debug!(section = %id, "section element not found"),
        }
    }

    let tracker = SectionTracker::new(ids, |id| elements.iter().any(|el| el.id() == id), options);
    set_active.set(tracker.active().to_string());
    if tracker.is_idle() {
        return Ok(None);
    }
    let tracker = Rc::new(RefCell::new(tracker));

    let observer = ViewportObserver::new(&options.root_margin.to_string(), &options.thresholds, {
        let tracker = Rc::clone(&tracker);
        move |entries| {
            let changed = tracker.borrow_mut().record(entries.iter().map(observation));
            if let Some(id) = changed {
                set_active.set(id);
            }
        }
    })?;
    for element in &elements {
        observer.observe(element);
    }

    let scroll = EventListener::new(&window(), "scroll", move |_| {
        let Some(metrics) = scroll_metrics() else {
            return;
        };
        let changed = tracker.borrow_mut().record_scroll(metrics);
        if let Some(id) = changed {
            set_active.set(id);
        }
    });

    Ok(Some(Subscription {
        _observer: observer,
        _scroll: scroll,
    }))
}

fn observation(entry: &IntersectionObserverEntry) -> Observation {
    Observation {
        id: entry.target().id(),
        intersecting: entry.is_intersecting(),
        visible_height: entry.intersection_rect().height(),
    }
}

fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    let document_height = f64::from(window.document()?.body()?.offset_height());
    Some(ScrollMetrics {
        viewport_height,
        scroll_y,
        document_height,
    })
}
