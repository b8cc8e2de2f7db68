//! Hero typewriter: cycles through phrases, typing forward and deleting
//! back on a timer.
//!
//! The phrase machine is plain state ([`TypewriterSession`]) so the
//! typing/hold/deleting transitions are tested natively; the browser shim
//! only chains one `Timeout` per tick.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay before the next tick while typing, in milliseconds.
pub const TYPE_MS: u32 = 90;

/// Delay before the next tick while deleting, in milliseconds.
pub const DELETE_MS: u32 = 60;

/// Extra ticks the full phrase stays visible before deletion starts.
pub const HOLD_TICKS: usize = 8;

/// Phrase-cycling state machine. One [`TypewriterSession::tick`] per timer
/// callback; [`TypewriterSession::text`] is the visible prefix afterwards.
#[derive(Debug, Clone)]
pub struct TypewriterSession {
    phrases: &'static [&'static str],
    phrase: usize,
    count: usize,
    deleting: bool,
}

impl TypewriterSession {
    #[must_use]
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            count: 0,
            deleting: false,
        }
    }

    /// Advance one step: grow the prefix, hold on the full phrase, shrink,
    /// then move to the next phrase (wrapping) once empty.
    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        if self.deleting {
            self.count = self.count.saturating_sub(1);
            if self.count == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
            }
        } else {
            self.count += 1;
            if self.count >= self.phrase_len() + HOLD_TICKS {
                self.deleting = true;
            }
        }
    }

    /// Visible prefix of the current phrase.
    #[must_use]
    pub fn text(&self) -> String {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return String::new();
        };
        let len = phrase.chars().count();
        phrase.chars().take(self.count.min(len)).collect()
    }

    /// Delay until the next tick, decided by the post-tick state.
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        if self.deleting { DELETE_MS } else { TYPE_MS }
    }

    fn phrase_len(&self) -> usize {
        self.phrases.get(self.phrase).map_or(0, |p| p.chars().count())
    }
}

/// Typewriter line. Renders a single space while the prefix is empty so the
/// hero row keeps its height.
#[component]
pub fn Typewriter(phrases: &'static [&'static str]) -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let session = Rc::new(RefCell::new(TypewriterSession::new(phrases)));
            schedule_tick(session, text);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = phrases;
    }

    view! {
        <span class="typewriter" id="typewriter">
            {move || {
                let current = text.get();
                if current.is_empty() { " ".to_owned() } else { current }
            }}
        </span>
    }
}

#[cfg(feature = "csr")]
fn schedule_tick(session: Rc<RefCell<TypewriterSession>>, text: RwSignal<String>) {
    let (shown, delay) = {
        let mut session = session.borrow_mut();
        session.tick();
        (session.text(), session.delay_ms())
    };
    text.set(shown);
    Timeout::new(delay, move || schedule_tick(session, text)).forget();
}
