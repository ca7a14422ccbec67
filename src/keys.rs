use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::distributions::Alphanumeric;
use rand::Rng;

static NEXT_AUTO_KEY: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh item key, unique for the lifetime of the process.
///
/// Auto-generated keys are deliberately unguessable by normal callers so that
/// unkeyed items can never be targeted for in-place replacement.
pub(crate) fn auto_key() -> String {
    let n = NEXT_AUTO_KEY.fetch_add(1, Ordering::Relaxed);
    format!("item-{}-{}", process::id(), n)
}

/// Generate a random HTML element id with the given prefix.
///
/// The prefix keeps ids starting with a letter, which the HTML spec requires.
pub(crate) fn element_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    format!("{}-{}", prefix, suffix)
}
