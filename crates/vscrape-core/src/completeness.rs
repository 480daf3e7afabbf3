//! Required-field presence checks.

use crate::record::Record;

/// Returns true if every key in `required_keys` is present in `venue`.
///
/// Only presence is checked: a key mapped to `null` or `""` still counts.
/// An empty `required_keys` is always satisfied.
pub fn is_complete_venue<S: AsRef<str>>(venue: &Record, required_keys: &[S]) -> bool {
    required_keys
        .iter()
        .all(|key| venue.contains_key(key.as_ref()))
}

/// Required keys absent from `venue`, in `required_keys` order.
pub fn missing_keys<'a, S: AsRef<str>>(venue: &Record, required_keys: &'a [S]) -> Vec<&'a str> {
    required_keys
        .iter()
        .map(|key| key.as_ref())
        .filter(|key| !venue.contains_key(*key))
        .collect()
}
