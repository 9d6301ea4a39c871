use crate::text::normalize_key;

pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// Edit distance over Unicode scalar values; every insert, delete and
/// substitution costs 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

pub fn within_distance(a: &str, b: &str, max_distance: usize) -> bool {
    // A length gap larger than the budget can never close.
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a.abs_diff(len_b) > max_distance {
        return false;
    }
    levenshtein(a, b) <= max_distance
}

/// Candidates within `max_distance` of `input`, both sides compared in
/// normalized form. Input order is preserved.
pub fn fuzzy_match<'a, I>(input: &str, candidates: I, max_distance: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let input_norm = normalize_key(input);
    candidates
        .into_iter()
        .filter(|c| within_distance(&input_norm, &normalize_key(c), max_distance))
        .collect()
}
