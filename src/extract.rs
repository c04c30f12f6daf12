//! Address extraction from simulator output.
//!
//! The simulator prints addresses as labeled hex tokens in otherwise
//! free-form text. Extraction is a fixed, ordered list of labeled capture
//! patterns so the matcher can be exercised directly against captured
//! output fixtures.

use anyhow::{Context, Result};
use regex::RegexBuilder;

/// Labeled capture patterns, tried per line in this order.
const ADDRESS_PATTERNS: [(&str, &str); 5] = [
    ("component", r"component: ([0-9a-fA-F]+)"),
    ("resource", r"resource: ([0-9a-fA-F]+)"),
    ("package", r"package: ([0-9a-fA-F]+)"),
    ("account", r"account component address: ([0-9a-fA-F]+)"),
    ("public_key", r"public key: ([0-9a-fA-F]+)"),
];

/// Ordered set of extraction rules applied to tool output lines.
pub(crate) struct AddressExtractor {
    patterns: Vec<(&'static str, regex::Regex)>,
}

impl AddressExtractor {
    pub(crate) fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(ADDRESS_PATTERNS.len());
        for (label, pattern) in ADDRESS_PATTERNS {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("compile address pattern '{label}'"))?;
            patterns.push((label, regex));
        }
        Ok(AddressExtractor { patterns })
    }

    /// Collect every captured address, in line order and then pattern order
    /// within a line. A line may contribute more than one address; nothing
    /// is deduplicated.
    pub(crate) fn extract<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut addresses = Vec::new();
        for line in lines {
            for (label, regex) in &self.patterns {
                if let Some(captures) = regex.captures(line) {
                    let address = captures[1].to_string();
                    tracing::debug!(label = %label, address = %address, "captured address");
                    addresses.push(address);
                }
            }
        }
        addresses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> AddressExtractor {
        AddressExtractor::new().expect("compile patterns")
    }

    #[test]
    fn captures_component_address() {
        let out = extractor().extract(["component: 1a2b"].into_iter());
        assert_eq!(out, vec!["1a2b".to_string()]);
    }

    #[test]
    fn unlabeled_lines_contribute_nothing() {
        let out = extractor().extract(["Transaction Status: SUCCESS", ""].into_iter());
        assert!(out.is_empty());
    }

    #[test]
    fn matches_case_insensitively() {
        let lines = [
            "Account component address: 02a1b2",
            "Public key: 04c3d4",
            "New Package: 01ff00",
        ];
        let out = extractor().extract(lines.into_iter());
        assert_eq!(out, vec!["02a1b2", "04c3d4", "01ff00"]);
    }

    #[test]
    fn preserves_line_order_then_pattern_order() {
        let lines = ["resource: 03aa component: 1bb2", "package: 01cc"];
        let out = extractor().extract(lines.into_iter());
        // within the first line the component pattern is tried before resource
        assert_eq!(out, vec!["1bb2", "03aa", "01cc"]);
    }

    #[test]
    fn stops_capture_at_non_hex() {
        let out = extractor().extract(["component: 1a2bzz rest"].into_iter());
        assert_eq!(out, vec!["1a2b"]);
    }
}
