//! # Issue Key Extraction
//!
//! Scans free-form release-note text for Jira issue keys and provides the
//! order-preserving set operations used when assigning a fix version to a
//! batch of issues.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// Pattern for issue keys embedded in release notes (e.g. MB-1337)
static ISSUE_KEY_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[A-Z]+-[0-9]+").expect("Failed to compile issue key regex"));

/// Extract all Jira issue keys from free-form text.
///
/// Keys are returned in the order they appear, duplicates included.
/// Matching is case-sensitive: lowercase project codes are not issue keys.
pub fn extract_issue_keys(text: &str) -> Vec<String> {
  ISSUE_KEY_PATTERN
    .find_iter(text)
    .map(|m| m.as_str().to_string())
    .collect()
}

/// Remove duplicate keys, keeping the first occurrence of each.
pub fn deduplicate(keys: &[String]) -> Vec<String> {
  let mut seen = HashSet::new();
  keys.iter().filter(|key| seen.insert(key.as_str())).cloned().collect()
}

/// Drop every key that appears in the exclusion list, preserving order.
pub fn filter_excluded(keys: &[String], exclude: &[String]) -> Vec<String> {
  if exclude.is_empty() {
    return keys.to_vec();
  }

  keys.iter().filter(|key| !exclude.contains(key)).cloned().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
  }

  #[test]
  fn test_extract_issue_keys() {
    let text = "Awesome release notes (MB-1337, HB-1338)";
    assert_eq!(extract_issue_keys(text), keys(&["MB-1337", "HB-1338"]));
  }

  #[test]
  fn test_extract_preserves_order_and_duplicates() {
    let text = "MB-2 before MB-1, then MB-2 again";
    assert_eq!(extract_issue_keys(text), keys(&["MB-2", "MB-1", "MB-2"]));
  }

  #[test]
  fn test_extract_is_case_sensitive() {
    assert!(extract_issue_keys("fixed mb-1337 and hb-1338").is_empty());
  }

  #[test]
  fn test_extract_embedded_keys() {
    assert_eq!(extract_issue_keys("see [MB-1337]/(HB-1)"), keys(&["MB-1337", "HB-1"]));
  }

  #[test]
  fn test_extract_without_keys() {
    assert!(extract_issue_keys("no issues mentioned here").is_empty());
    assert!(extract_issue_keys("").is_empty());
  }

  #[test]
  fn test_deduplicate_keeps_first_occurrence() {
    let input = keys(&["MB-1", "HB-2", "MB-1", "MB-3", "HB-2"]);
    assert_eq!(deduplicate(&input), keys(&["MB-1", "HB-2", "MB-3"]));
  }

  #[test]
  fn test_deduplicate_is_idempotent() {
    let input = keys(&["MB-1", "HB-2", "MB-1"]);
    let once = deduplicate(&input);
    assert_eq!(deduplicate(&once), once);
  }

  #[test]
  fn test_deduplicate_empty() {
    assert!(deduplicate(&[]).is_empty());
  }

  #[test]
  fn test_filter_excluded() {
    let main = keys(&["MB-1", "HB-2", "MB-3"]);
    assert_eq!(filter_excluded(&main, &keys(&["HB-2"])), keys(&["MB-1", "MB-3"]));
  }

  #[test]
  fn test_filter_excluded_empty_exclusions() {
    let main = keys(&["MB-1", "HB-2"]);
    assert_eq!(filter_excluded(&main, &[]), main);
  }

  #[test]
  fn test_filter_excluded_everything() {
    let main = keys(&["MB-1", "HB-2"]);
    assert!(filter_excluded(&main, &main).is_empty());
  }
}
