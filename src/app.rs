//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::assistant::knowledge::OWNER;
use crate::pages::home::HomePage;
use crate::state::assistant::AssistantState;
use crate::state::menu::MenuState;
use crate::util::motion::{self, MotionPrefs};

/// Root application component.
///
/// Provides the shared contexts (assistant and menu state, the knowledge
/// base, the startup motion-preference snapshot), sets up routing, and
/// starts the page-level animators after mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let assistant = RwSignal::new(AssistantState::default());
    let menu = RwSignal::new(MenuState::default());
    let prefs = motion::detect();

    provide_context(assistant);
    provide_context(menu);
    provide_context(OWNER);
    provide_context(prefs);

    start_animators(prefs);

    view! {
        <Title text="Qaisar Zhumabay — Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Start the reveal observer and the blink loop once the routed page content
/// is in the DOM. The observer runs regardless of the motion preference; the
/// blink loop only starts when motion is not reduced.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn start_animators(prefs: MotionPrefs) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        Effect::new(move || {
            // Defer one tick so the observer and the blink pool see the
            // mounted sections rather than an empty body.
            Timeout::new(0, move || {
                crate::util::reveal::observe_all();
                if !prefs.reduce_motion {
                    let rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
                    crate::util::blink::start(rng);
                }
            })
            .forget();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prefs;
    }
}
