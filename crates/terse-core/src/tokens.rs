//! Token counting

/// Count whitespace-delimited tokens
///
/// A token is a non-empty run of non-whitespace characters, a cheap proxy
/// for language-model usage. Empty or whitespace-only input counts as 0.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
