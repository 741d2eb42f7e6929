//! Free-text tokenizer shared by every scoring dimension.

/// Splits free text into lowercase alphanumeric tokens.
///
/// Any non-alphanumeric character becomes a separator, so "Node.js" yields
/// `["node", "js"]`. Total function: empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
