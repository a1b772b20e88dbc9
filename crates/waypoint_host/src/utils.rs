//! # Utility Functions
//!
//! Small helpers shared across the Waypoint crates.

/// Returns the current Unix timestamp in seconds.
///
/// All event timestamps use this function so they are generated the same way
/// everywhere.
///
/// # Panics
///
/// Panics if the system clock is set to a time before the Unix epoch
/// (January 1, 1970). This should never happen in practice on modern systems.
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
