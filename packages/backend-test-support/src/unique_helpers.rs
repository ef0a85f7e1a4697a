//! Helpers for generating unique test data
//!
//! ULID suffixes keep player names distinct across tests that share a store.

use ulid::Ulid;

/// Generate a unique string with the given prefix, formatted `{prefix}-{ulid}`.
///
/// ```
/// use dots_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("alice");
/// let b = unique_str("alice");
/// assert_ne!(a, b);
/// assert!(a.starts_with("alice-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` unique player names: `player0-{ulid}`, `player1-{ulid}`, ...
pub fn unique_player_names(count: usize) -> Vec<String> {
    (0..count).map(|i| unique_str(&format!("player{i}"))).collect()
}
