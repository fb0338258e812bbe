use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,;/&]+").expect("separator pattern is valid"));

/// Lower-cases `raw` and splits it on runs of whitespace, `,`, `;`, `/` or `&`.
///
/// Order and duplicates are kept; empty pieces are dropped.
pub fn tokenize(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    SEPARATORS
        .split(&lowered)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(
            tokenize("Research, Ops/Automation"),
            vec!["research", "ops", "automation"]
        );
    }

    #[test]
    fn test_tokenize_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(" ,;/& \n\t").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_order() {
        assert_eq!(
            tokenize("writing & Writing;design"),
            vec!["writing", "writing", "design"]
        );
    }

    #[test]
    fn test_tokenize_leaves_other_punctuation() {
        assert_eq!(tokenize("no-code, c++"), vec!["no-code", "c++"]);
    }
}
