//! Scroll reveal: keeps the `show` class on `.reveal` sections in sync with
//! their viewport intersection.
//!
//! A single observer watches every section. Leaving the viewport removes
//! the class again, so sections re-animate on re-entry.

/// Selector for sections that participate in scroll reveal.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Class applied while a section intersects the viewport.
pub const SHOW_CLASS: &str = "show";

/// Fraction of a section that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Observe every reveal section, toggling [`SHOW_CLASS`] on intersection
/// changes. The observer and its callback live for the page lifetime.
pub fn observe_all() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(sections) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        if sections.length() == 0 {
            return;
        }

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let classes = entry.target().class_list();
                    if entry.is_intersecting() {
                        let _ = classes.add_1(SHOW_CLASS);
                    } else {
                        let _ = classes.remove_1(SHOW_CLASS);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        for i in 0..sections.length() {
            if let Some(node) = sections.item(i) {
                if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                    observer.observe(&el);
                }
            }
        }
        on_intersect.forget();
    }
}
