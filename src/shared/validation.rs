use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slug fields (brand slugs, category slugs)
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "nike", "new-balance", "4f"
    /// - Invalid: "-nike", "nike-", "new--balance", "Nike", "new_balance"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("nike"));
        assert!(SLUG_REGEX.is_match("new-balance"));
        assert!(SLUG_REGEX.is_match("4f"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-nike")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("nike-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("new--balance")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Nike")); // uppercase
        assert!(!SLUG_REGEX.is_match("new_balance")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("new balance")); // space
    }
}
