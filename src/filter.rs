//! Row filtering shared by every vendor extractor.

/// Returns true when no value's string form contains any of the filter
/// substrings (case-sensitive). Short-circuits on the first hit; pure.
///
/// Callers feed it whole rows, single cells, or whitespace tokens - the
/// contract is the same for all three.
pub fn passes<I, S>(filters: &[&str], values: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for value in values {
        let value = value.as_ref();
        if filters.iter().any(|f| value.contains(f)) {
            return false;
        }
    }
    true
}
