#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn default_is_not_reduced() {
    assert!(!MotionPrefs::default().reduce_motion);
}

#[test]
fn detect_without_a_browser_reads_not_reduced() {
    assert_eq!(detect(), MotionPrefs::default());
}
