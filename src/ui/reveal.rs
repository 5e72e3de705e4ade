//! Reveal-on-scroll visibility watcher
//!
//! Observes every element carrying the `reveal-on-scroll` class and adds a
//! persistent `is-visible` class the first time 10% of the element enters
//! the viewport. The mark is one-shot per element; elements stay observed
//! until the component unmounts, at which point the observer is released.

use leptos::prelude::*;

/// Fraction of an element that must be visible before it is revealed
#[allow(dead_code)]
const REVEAL_THRESHOLD: f64 = 0.1;

/// Mounts the visibility watcher for the current page
///
/// Renders nothing; place it once inside any page that uses
/// `reveal-on-scroll` elements.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::RevealLatch;
        use leptos::web_sys;
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::prelude::JsValue;

        let observer_handle: StoredValue<Option<web_sys::IntersectionObserver>, LocalStorage> =
            StoredValue::new_local(None);

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let latch = Rc::new(RefCell::new(RevealLatch::new()));
            let latch_for_callback = latch.clone();

            let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let key = target
                            .get_attribute("data-reveal-key")
                            .and_then(|k| k.parse::<usize>().ok());
                        if let Some(key) = key {
                            // One-shot: only the first intersection applies the class
                            if latch_for_callback.borrow_mut().mark(key) {
                                let _ = target.class_list().add_1("is-visible");
                            }
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };

            if let Ok(elements) = document.query_selector_all(".reveal-on-scroll") {
                for index in 0..elements.length() {
                    if let Some(node) = elements.item(index) {
                        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                            let _ = element.set_attribute("data-reveal-key", &index.to_string());
                            observer.observe(&element);
                        }
                    }
                }
            }

            observer_handle.set_value(Some(observer));
            // Keep the callback alive for the observer's lifetime
            callback.forget();
        });

        on_cleanup(move || {
            if let Some(observer) = observer_handle.get_value() {
                observer.disconnect();
            }
        });
    }
}
