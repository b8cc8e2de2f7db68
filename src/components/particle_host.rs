//! Bridge component between the page and the imperative `particles::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The particles crate owns the per-frame math and drawing; this host mounts
//! the canvas, seeds the field from the wall clock, drives the
//! animation-frame loop, and forwards viewport resizes. Under reduced motion
//! the component renders the canvas element and wires nothing.

use leptos::prelude::*;

use crate::util::motion::MotionPrefs;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use particles::engine::Engine;
#[cfg(feature = "csr")]
use rand::SeedableRng;
#[cfg(feature = "csr")]
use rand::rngs::SmallRng;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Full-viewport background canvas with the particle network.
#[component]
pub fn ParticleHost() -> impl IntoView {
    let motion = expect_context::<MotionPrefs>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine_mounted = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if motion.reduce_motion || engine_mounted.get_untracked() {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            engine_mounted.set(true);
            mount_engine(&canvas);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (motion, engine_mounted);
    }

    view! { <canvas class="ai-bg" id="ai-bg" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mount_engine(canvas: &web_sys::HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(mut engine) = Engine::new(canvas.clone()) else {
        return;
    };
    let (width, height) = viewport_size(&window);
    engine.set_viewport(width, height);
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    engine.seed(&mut rng);

    let engine = Rc::new(RefCell::new(Some(engine)));
    attach_resize(&window, &engine);
    start_frame_loop(&window, engine);
}

#[cfg(feature = "csr")]
fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Keep the drawing surface matched to the viewport. The field is never
/// re-seeded here; particles drift back in via the bounce rule.
#[cfg(feature = "csr")]
fn attach_resize(window: &web_sys::Window, engine: &Rc<RefCell<Option<Engine>>>) {
    let engine_for_cb = Rc::clone(engine);
    let window_for_cb = window.clone();
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let (width, height) = viewport_size(&window_for_cb);
        if let Some(engine) = engine_for_cb.borrow_mut().as_mut() {
            engine.set_viewport(width, height);
        }
    });
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Self-rescheduling animation-frame loop. The closure holds itself through
/// the shared holder and runs for the page lifetime.
#[cfg(feature = "csr")]
fn start_frame_loop(window: &web_sys::Window, engine: Rc<RefCell<Option<Engine>>>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(engine) = engine.borrow_mut().as_mut() {
            let _ = engine.frame();
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            let _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    }
}
