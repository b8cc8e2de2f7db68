//! Random blink: on a fixed interval, one flashable element briefly gains
//! the `blink` class. The caller skips starting the loop entirely under
//! reduced motion.

use rand::Rng;
use rand::rngs::SmallRng;

#[cfg(test)]
#[path = "blink_test.rs"]
mod blink_test;

/// Pool selector: list items, card headings, and the typewriter line.
pub const FLASHABLE_SELECTOR: &str = ".list li, .card h3, .typewriter";

/// Class applied for the duration of a blink.
pub const BLINK_CLASS: &str = "blink";

/// Milliseconds between blink picks.
pub const BLINK_INTERVAL_MS: u32 = 2200;

/// Milliseconds a blink stays applied.
pub const BLINK_DURATION_MS: u32 = 500;

/// Pick a pool index uniformly at random; `None` when the pool is empty.
#[must_use]
pub fn pick_index(len: usize, rng: &mut SmallRng) -> Option<usize> {
    if len == 0 { None } else { Some(rng.random_range(0..len)) }
}

/// Collect the flashable pool once and start the blink interval.
///
/// The interval runs for the page lifetime; a tick with an empty pool is a
/// no-op.
pub fn start(rng: SmallRng) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::{Interval, Timeout};
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(FLASHABLE_SELECTOR) else {
            return;
        };
        let mut pool = Vec::new();
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                    pool.push(el);
                }
            }
        }

        let mut rng = rng;
        Interval::new(BLINK_INTERVAL_MS, move || {
            let Some(idx) = pick_index(pool.len(), &mut rng) else {
                return;
            };
            let el = pool[idx].clone();
            let _ = el.class_list().add_1(BLINK_CLASS);
            Timeout::new(BLINK_DURATION_MS, move || {
                let _ = el.class_list().remove_1(BLINK_CLASS);
            })
            .forget();
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = rng;
    }
}
