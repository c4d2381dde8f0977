//! Small string helpers shared by the fuzzy matchers. Callers lower-case first.

/// Containment in either direction. Blank operands never match.
pub(crate) fn contains_either(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Splits on any char accepted by `is_sep`, dropping empty pieces.
pub(crate) fn split_words(s: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    s.split(is_sep).filter(|w| !w.is_empty()).collect()
}

pub(crate) fn lowered(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
