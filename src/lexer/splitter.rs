/// Splits text into whitespace-delimited fragments.
///
/// Any run of whitespace is one delimiter; leading and trailing whitespace
/// never produces empty fragments.
pub fn split_fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Rebuilds the whitespace-normalized form of the input: fragments joined by single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    split_fragments(text).collect::<Vec<_>>().join(" ")
}
