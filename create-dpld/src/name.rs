//! Project name sanitization
//!
//! Turns free-form user input into a name usable both as a directory name and
//! as the `name` field of a package manifest.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;

/// Zero-width no-break space, treated as whitespace like JavaScript does
const BYTE_ORDER_MARK: char = '\u{FEFF}';

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid regex"));
static LEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[._]").expect("valid regex"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("valid regex"));

/// Sanitize a raw project name
///
/// Steps, applied in order:
/// 1. trim surrounding whitespace
/// 2. lowercase
/// 3. collapse each whitespace run into `-`
/// 4. strip a single leading `.` or `_`
/// 5. collapse each run of characters outside `[a-z0-9-~]` into `-`
///
/// Never fails. An empty result is returned as-is.
///
/// # Examples
///
/// ```
/// use create_dpld::sanitize;
///
/// assert_eq!(sanitize("My App"), "my-app");
/// assert_eq!(sanitize("_Foo Bar_"), "foo-bar-");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let lowered = raw
        .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let unmarked = LEADING_MARKER.replace(&hyphenated, "");
    DISALLOWED.replace_all(&unmarked, "-").into_owned()
}

/// A sanitized project name
///
/// Only constructible through [`ProjectName::from_raw`], so every value
/// satisfies the [`sanitize`] rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Sanitize raw user input into a project name
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self(sanitize(raw))
    }

    /// The name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether sanitization left nothing behind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(sanitize("My App"), "my-app");
        assert_eq!(sanitize("my   big\tapp"), "my-big-app");
    }

    #[test]
    fn test_only_one_leading_marker_is_stripped() {
        assert_eq!(sanitize("_Foo Bar_"), "foo-bar-");
        assert_eq!(sanitize(".hidden"), "hidden");
        // second dot survives step 4, then collapses in step 5
        assert_eq!(sanitize("..hello"), "-hello");
    }

    #[test]
    fn test_symbols_collapse_to_single_hyphen() {
        assert_eq!(sanitize("  hello_world!!  "), "hello-world-");
        assert_eq!(sanitize("a@#$b"), "a-b");
        assert_eq!(sanitize("keep~tilde-and-9"), "keep~tilde-and-9");
    }

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("_"), "");
        assert!(ProjectName::from_raw("  ").is_empty());
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(sanitize("\u{FEFF}app"), "app");
        assert_eq!(sanitize("app\u{FEFF}"), "app");
        assert_eq!(sanitize("my\u{FEFF}app"), "my-app");
    }

    #[test]
    fn test_default_name_is_unchanged() {
        assert_eq!(ProjectName::from_raw("dpld-app").as_str(), "dpld-app");
    }

    #[test]
    fn test_non_ascii_digits_are_replaced() {
        assert_eq!(sanitize("app٣"), "app-");
    }

    proptest! {
        #[test]
        fn test_sanitized_names_use_allowed_charset(raw in "\\PC*") {
            let name = sanitize(&raw);
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '~'));
            prop_assert!(!name.starts_with('.'));
            prop_assert!(!name.starts_with('_'));
        }

        #[test]
        fn test_sanitize_is_idempotent_on_clean_names(raw in "[a-z0-9~][a-z0-9~-]{0,20}") {
            prop_assert_eq!(sanitize(&raw), raw);
        }
    }
}
