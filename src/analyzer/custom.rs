use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Analyzer, Normalizer, Source, Validation};

/// A `custom` analyzer assembled from a tokenizer and filter chains.
///
/// Components are referenced by name, either built-in names such as
/// `lowercase` or names of components registered in the same analysis block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Custom {
    name: String,
    tokenizer: Option<String>,
    char_filter: Vec<String>,
    filter: Vec<String>,
    position_increment_gap: Option<i64>,
}

impl Custom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        tokenizer: String,
        position_increment_gap: i64,
    }

    appenders! {
        char_filter,
        filter,
    }
}

impl Source for Custom {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "custom".into());
        optional_add!(options,
            self.tokenizer => "tokenizer",
            self.position_increment_gap => "position_increment_gap",
        );
        many_add!(options,
            self.char_filter => "char_filter",
            self.filter => "filter",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("tokenizer", self.tokenizer.is_some());
        v.finish()
    }
}

impl Analyzer for Custom {}

/// A `custom` normalizer: character and token filters without a tokenizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomNormalizer {
    name: String,
    char_filter: Vec<String>,
    filter: Vec<String>,
}

impl CustomNormalizer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    appenders! {
        char_filter,
        filter,
    }
}

impl Source for CustomNormalizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "custom".into());
        many_add!(options,
            self.char_filter => "char_filter",
            self.filter => "filter",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Normalizer for CustomNormalizer {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_custom_chain() {
        let analyzer = Custom::new("nori-default")
            .tokenizer("tokenizer_discard_puncuation_false")
            .filter(["part_of_speech_stop_sp", "nori_number", "nori_readingform"]);
        assert_eq!(
            analyzer.source(true).unwrap(),
            json!({"nori-default": {
                "type": "custom",
                "tokenizer": "tokenizer_discard_puncuation_false",
                "filter": ["part_of_speech_stop_sp", "nori_number", "nori_readingform"]
            }})
        );
    }

    #[test]
    fn test_custom_single_filter_is_scalar() {
        let analyzer = Custom::new("a")
            .tokenizer("standard")
            .char_filter(["html_strip"])
            .filter(["lowercase"])
            .position_increment_gap(100);
        assert_eq!(
            analyzer.source(false).unwrap(),
            json!({
                "type": "custom",
                "tokenizer": "standard",
                "char_filter": "html_strip",
                "filter": "lowercase",
                "position_increment_gap": 100
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "custom", "tokenizer": "standard"}))]
    #[case(vec!["html_strip"], json!({"type": "custom", "tokenizer": "standard", "char_filter": "html_strip"}))]
    #[case(
        vec!["html_strip", "ligatures"],
        json!({"type": "custom", "tokenizer": "standard", "char_filter": ["html_strip", "ligatures"]})
    )]
    fn test_custom_char_filter(#[case] char_filters: Vec<&str>, #[case] expected: Value) {
        let analyzer = Custom::new("a").tokenizer("standard").char_filter(char_filters);
        assert_eq!(analyzer.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "custom", "tokenizer": "standard"}))]
    #[case(vec!["lowercase"], json!({"type": "custom", "tokenizer": "standard", "filter": "lowercase"}))]
    #[case(
        vec!["lowercase", "asciifolding"],
        json!({"type": "custom", "tokenizer": "standard", "filter": ["lowercase", "asciifolding"]})
    )]
    fn test_custom_filter(#[case] filters: Vec<&str>, #[case] expected: Value) {
        let analyzer = Custom::new("a").tokenizer("standard").filter(filters);
        assert_eq!(analyzer.source(false).unwrap(), expected);
    }

    #[test]
    fn test_custom_requires_tokenizer() {
        let err = Custom::new("").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["name", "tokenizer"]);
    }

    #[test]
    fn test_normalizer() {
        let normalizer = CustomNormalizer::new("folding").filter(["lowercase", "asciifolding"]);
        assert_eq!(
            normalizer.source(true).unwrap(),
            json!({"folding": {"type": "custom", "filter": ["lowercase", "asciifolding"]}})
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "custom"}))]
    #[case(vec!["quotes"], json!({"type": "custom", "char_filter": "quotes"}))]
    #[case(vec!["quotes", "dashes"], json!({"type": "custom", "char_filter": ["quotes", "dashes"]}))]
    fn test_normalizer_char_filter(#[case] char_filters: Vec<&str>, #[case] expected: Value) {
        let normalizer = CustomNormalizer::new("n").char_filter(char_filters);
        assert_eq!(normalizer.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "custom"}))]
    #[case(vec!["lowercase"], json!({"type": "custom", "filter": "lowercase"}))]
    #[case(vec!["lowercase", "asciifolding"], json!({"type": "custom", "filter": ["lowercase", "asciifolding"]}))]
    fn test_normalizer_filter(#[case] filters: Vec<&str>, #[case] expected: Value) {
        let normalizer = CustomNormalizer::new("n").filter(filters);
        assert_eq!(normalizer.source(false).unwrap(), expected);
    }
}
