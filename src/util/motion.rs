//! Reduced-motion preference, read once at startup.
//!
//! When the user prefers reduced motion, the particle field and the random
//! blink loop never start. Everything else is unaffected.

#[cfg(feature = "csr")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Snapshot of the motion preference taken at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPrefs {
    pub reduce_motion: bool,
}

/// Query the platform's reduced-motion flag.
///
/// Reads as "not reduced" when the media-query capability (or the window
/// itself) is unavailable.
#[must_use]
pub fn detect() -> MotionPrefs {
    #[cfg(feature = "csr")]
    {
        let reduce = web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches());
        MotionPrefs { reduce_motion: reduce }
    }
    #[cfg(not(feature = "csr"))]
    {
        MotionPrefs::default()
    }
}
