//! Character filters, registered under `settings.analysis.char_filter`.

use itertools::Itertools;
use serde_json::{Map, Value};

use crate::analyzer::REGEX_FLAGS;
use crate::error::Result;
use crate::source::{wrap, CharFilter, Source, Validation};

/// The `html_strip` character filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlStrip {
    name: String,
    escaped_tags: Vec<String>,
}

impl HtmlStrip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    appenders! {
        /// Tags left in place, without angle brackets.
        escaped_tags,
    }
}

impl Source for HtmlStrip {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "html_strip".into());
        many_add!(options, self.escaped_tags => "escaped_tags");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl CharFilter for HtmlStrip {}

/// The `mapping` character filter; each mapping reads `key => value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    name: String,
    mappings: Vec<String>,
    mappings_path: Option<String>,
}

impl Mapping {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        mappings_path: String,
    }

    appenders! {
        mappings,
    }
}

impl Source for Mapping {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "mapping".into());
        optional_add!(options, self.mappings_path => "mappings_path");
        many_add!(options, self.mappings => "mappings");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).require(
            "mappings",
            !self.mappings.is_empty() || self.mappings_path.is_some(),
        );
        v.finish()
    }
}

impl CharFilter for Mapping {}

/// The `pattern_replace` character filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternReplace {
    name: String,
    pattern: Option<String>,
    replacement: Option<String>,
    flags: Vec<String>,
}

impl PatternReplace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        pattern: String,
        /// Replacement text; `$1` style group references are allowed.
        replacement: String,
    }

    appenders! {
        flags,
    }
}

impl Source for PatternReplace {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "pattern_replace".into());
        optional_add!(options,
            self.pattern => "pattern",
            self.replacement => "replacement",
        );
        if !self.flags.is_empty() {
            options.insert("flags".into(), self.flags.iter().join("|").into());
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("pattern", self.pattern.is_some())
            .each_one_of("flags", &self.flags, REGEX_FLAGS);
        v.finish()
    }
}

impl CharFilter for PatternReplace {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec![], json!({"type": "html_strip"}))]
    #[case(vec!["b"], json!({"type": "html_strip", "escaped_tags": "b"}))]
    #[case(vec!["b", "i"], json!({"type": "html_strip", "escaped_tags": ["b", "i"]}))]
    fn test_html_strip_escaped_tags(#[case] tags: Vec<&str>, #[case] expected: Value) {
        assert_eq!(HtmlStrip::new("h").escaped_tags(tags).source(false).unwrap(), expected);
    }

    #[test]
    fn test_mapping() {
        let filter = Mapping::new("digits").mappings(["٠ => 0", "١ => 1"]);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"digits": {"type": "mapping", "mappings": ["٠ => 0", "١ => 1"]}})
        );
        assert!(filter.validate(true).is_ok());
    }

    #[rstest]
    #[case(vec![], json!({"type": "mapping"}))]
    #[case(vec!["& => and"], json!({"type": "mapping", "mappings": "& => and"}))]
    #[case(vec!["& => and", "+ => plus"], json!({"type": "mapping", "mappings": ["& => and", "+ => plus"]}))]
    fn test_mapping_rules(#[case] rules: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Mapping::new("m").mappings(rules).source(false).unwrap(), expected);
    }

    #[test]
    fn test_mapping_requires_rules() {
        let err = Mapping::new("m").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["mappings"]);
        assert!(Mapping::new("m").mappings_path("map.txt").validate(true).is_ok());
    }

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplace::new("dashes")
            .pattern(r"(\d+)-(?=\d)")
            .replacement("$1_")
            .flags(["CASE_INSENSITIVE"]);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "pattern_replace",
                "pattern": r"(\d+)-(?=\d)",
                "replacement": "$1_",
                "flags": "CASE_INSENSITIVE"
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "pattern_replace", "pattern": "-"}))]
    #[case(vec!["DOTALL"], json!({"type": "pattern_replace", "pattern": "-", "flags": "DOTALL"}))]
    #[case(
        vec!["DOTALL", "MULTILINE"],
        json!({"type": "pattern_replace", "pattern": "-", "flags": "DOTALL|MULTILINE"})
    )]
    fn test_pattern_replace_flags(#[case] flags: Vec<&str>, #[case] expected: Value) {
        let filter = PatternReplace::new("p").pattern("-").flags(flags);
        assert_eq!(filter.source(false).unwrap(), expected);
        assert!(filter.validate(true).is_ok());
    }

    #[test]
    fn test_pattern_replace_aggregates_errors() {
        let err = PatternReplace::new("")
            .flags(["NOPE"])
            .validate(true)
            .unwrap_err();
        assert_eq!(err.fields(), ["name", "pattern", "flags"]);
    }
}
