//! Pointer parallax for the hero background orbs
//!
//! Two decorative blurred layers drift opposite ways as the pointer moves.
//! The offset is purely derived from the pointer position and the current
//! viewport size; nothing is cached between events.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::parallax_offsets;

/// Decorative parallax orb layers for the hero section
#[component]
pub fn ParallaxOrbs() -> impl IntoView {
    let orb_a: NodeRef<html::Div> = NodeRef::new();
    let orb_b: NodeRef<html::Div> = NodeRef::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev;
        use leptos::web_sys;

        let handle = window_event_listener(ev::mousemove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            // Viewport dimensions are read per event, not cached
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            if width <= 0.0 || height <= 0.0 {
                return;
            }

            let ((ax, ay), (bx, by)) =
                parallax_offsets(ev.client_x() as f64, ev.client_y() as f64, width, height);

            if let Some(orb) = orb_a.get() {
                let _ = orb
                    .style()
                    .set_property("transform", &format!("translate({ax:.1}px, {ay:.1}px)"));
            }
            if let Some(orb) = orb_b.get() {
                let _ = orb
                    .style()
                    .set_property("transform", &format!("translate({bx:.1}px, {by:.1}px)"));
            }
        });

        on_cleanup(move || drop(handle));
    }

    view! {
        <div
            node_ref=orb_a
            class="absolute top-1/4 -left-32 w-96 h-96 rounded-full bg-gradient-to-br from-purple-500/20 to-purple-300/20 blur-3xl opacity-70 transition-transform duration-300"
            aria-hidden="true"
        ></div>
        <div
            node_ref=orb_b
            class="absolute bottom-0 right-0 w-80 h-80 rounded-full bg-gradient-to-tr from-purple-300/30 to-purple-200/30 blur-3xl opacity-60 transition-transform duration-300"
            aria-hidden="true"
        ></div>
    }
}
