//! Global name → pattern registry
//!
//! The built-in patterns are exposed both through the direct accessors in
//! [`builtin`](crate::pattern::builtin) and through this mapping, built
//! once at first use. There is no dynamic registration.

use crate::pattern::{builtin, Pattern};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static REGISTRY: Lazy<BTreeMap<&'static str, &'static Pattern>> = Lazy::new(|| {
    let mut patterns = BTreeMap::new();
    for pattern in [
        builtin::mixed_ordinals(),
        builtin::integers(),
        builtin::dates_iso8601(),
        builtin::dates_dd_mmm_yyyy(),
    ] {
        patterns.insert(pattern.name(), pattern);
    }
    patterns
});

/// The full name → pattern mapping
pub fn all() -> &'static BTreeMap<&'static str, &'static Pattern> {
    &REGISTRY
}

/// Resolve a pattern by its registered name
pub fn lookup(name: &str) -> Option<&'static Pattern> {
    REGISTRY.get(name).copied()
}
