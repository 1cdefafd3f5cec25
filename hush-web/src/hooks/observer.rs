use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// `IntersectionObserver` owned by Rust. Dropping it disconnects every
/// observed element and releases the callback.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new(
        root_margin: &str,
        thresholds: &[f64],
        mut on_entries: impl FnMut(Vec<IntersectionObserverEntry>) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                on_entries(entries);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let thresholds: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        init.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Stops reporting without releasing the callback, so it is safe to call
    /// from inside `on_entries`.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
