//! Browser glue for the scroll/visibility layer: RAII wrappers over the
//! platform observers plus the hooks the sections consume. Pure decisions
//! (fractions, latching arithmetic) live in `motion`; this module only
//! measures and forwards.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::motion::{region_exit_fraction, scroll_fraction, RevealLatch};

const WINDOW_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Watches one region for viewport intersection. `watch_once` fires the
/// callback on the first entry, then disconnects itself; dropping the
/// handle disconnects too, so an unmounting region always tears its
/// observer down.
pub struct RegionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RegionObserver {
    pub fn watch_once(
        target: &Element,
        root_margin: &str,
        threshold: f64,
        on_enter: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut pending = Some(on_enter);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });

                if entered {
                    observer.disconnect();
                    if let Some(notify) = pending.take() {
                        notify();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One callback registered for window scroll and resize; dropping the
/// handle unregisters both.
pub struct ScrollWatcher {
    callback: Closure<dyn FnMut()>,
}

impl ScrollWatcher {
    pub fn attach(on_change: impl FnMut() + 'static) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut()>::new(on_change);

        for event in WINDOW_EVENTS {
            let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }

        Some(Self { callback })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        let Some(win) = window() else {
            return;
        };

        for event in WINDOW_EVENTS {
            let _ =
                win.remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn window_scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn page_scroll_extent() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };
    let Some(root) = win.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };

    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);

    f64::from(root.scroll_height()) - viewport_height
}

pub fn page_scroll_fraction() -> f64 {
    scroll_fraction(window_scroll_offset(), page_scroll_extent())
}

fn measure_region_exit(target: &NodeRef) -> Option<f64> {
    let element = target.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(region_exit_fraction(rect.top(), rect.height()))
}

/// Fire-once reveal latch for a section. Latches true on the first
/// intersection and never resets. When the platform observer cannot be
/// wired, or the user asked for reduced motion, the latch starts true so
/// the content is simply visible.
#[hook]
pub fn use_reveal_once(target: NodeRef, root_margin: &'static str) -> bool {
    let latch = use_state_eq(RevealLatch::default);

    {
        let latch = latch.clone();
        use_effect_with(target, move |target| {
            let mut registration = None;

            let fire = |latch: &UseStateHandle<RevealLatch>| {
                let mut next = **latch;
                next.observe(true);
                latch.set(next);
            };

            if !latch.fired() {
                if prefers_reduced_motion() {
                    fire(&latch);
                } else if let Some(element) = target.cast::<Element>() {
                    let notify = {
                        let latch = latch.clone();
                        move || fire(&latch)
                    };

                    match RegionObserver::watch_once(&element, root_margin, 0.0, notify) {
                        Ok(active) => registration = Some(active),
                        Err(_) => fire(&latch),
                    }
                } else {
                    fire(&latch);
                }
            }

            move || drop(registration)
        });
    }

    latch.fired()
}

/// Continuous page progress in [0, 1], recomputed on scroll and resize.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let fraction = use_state_eq(|| 0.0_f64);

    {
        let fraction = fraction.clone();
        use_effect_with((), move |_| {
            fraction.set(page_scroll_fraction());

            let watcher = ScrollWatcher::attach({
                let fraction = fraction.clone();
                move || fraction.set(page_scroll_fraction())
            });

            move || drop(watcher)
        });
    }

    *fraction
}

/// Whether the page has scrolled beyond `threshold_px`.
#[hook]
pub fn use_scrolled_past(threshold_px: f64) -> bool {
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with((), move |_| {
            past.set(window_scroll_offset() > threshold_px);

            let watcher = ScrollWatcher::attach({
                let past = past.clone();
                move || past.set(window_scroll_offset() > threshold_px)
            });

            move || drop(watcher)
        });
    }

    *past
}

/// How far a region anchored at the page top has scrolled out of the
/// viewport, in [0, 1]. Drives the hero parallax and fade.
#[hook]
pub fn use_region_exit(target: NodeRef) -> f64 {
    let fraction = use_state_eq(|| 0.0_f64);

    {
        let fraction = fraction.clone();
        use_effect_with(target, move |target| {
            if let Some(value) = measure_region_exit(target) {
                fraction.set(value);
            }

            let watcher = ScrollWatcher::attach({
                let fraction = fraction.clone();
                let target = target.clone();
                move || {
                    if let Some(value) = measure_region_exit(&target) {
                        fraction.set(value);
                    }
                }
            });

            move || drop(watcher)
        });
    }

    *fraction
}
