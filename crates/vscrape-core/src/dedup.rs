//! Duplicate detection by venue name.

use std::collections::HashSet;

/// Returns true if `venue_name` has already been seen.
///
/// The set is only read; inserting the name afterwards is up to the caller.
pub fn is_duplicate_venue(venue_name: &str, seen_names: &HashSet<String>) -> bool {
    seen_names.contains(venue_name)
}
