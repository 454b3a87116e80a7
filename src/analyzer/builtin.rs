use itertools::Itertools;
use serde_json::{Map, Value};

use super::REGEX_FLAGS;
use crate::error::Result;
use crate::source::{wrap, Analyzer, Source, Validation};

plain_component! {
    Analyzer;
    /// Splits on non-letters and lowercases.
    Simple => "simple",
    /// Splits on whitespace.
    Whitespace => "whitespace",
    /// Emits the whole input as a single token.
    Keyword => "keyword",
}

/// The `standard` analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standard {
    name: String,
    max_token_length: Option<i64>,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
}

impl Standard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        max_token_length: i64,
        stopwords_path: String,
    }

    appenders! {
        /// Append stop words or a predefined list such as `_english_`.
        stopwords,
    }
}

impl Source for Standard {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "standard".into());
        optional_add!(options,
            self.max_token_length => "max_token_length",
            self.stopwords_path => "stopwords_path",
        );
        many_add!(options, self.stopwords => "stopwords");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Analyzer for Standard {}

/// The `stop` analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stop {
    name: String,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
}

impl Stop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        stopwords_path: String,
    }

    appenders! {
        stopwords,
    }
}

impl Source for Stop {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "stop".into());
        optional_add!(options, self.stopwords_path => "stopwords_path");
        many_add!(options, self.stopwords => "stopwords");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Analyzer for Stop {}

/// The `pattern` analyzer.
///
/// Flags are Java regex flag names and render pipe separated, for example
/// `CASE_INSENSITIVE|COMMENTS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    name: String,
    pattern: Option<String>,
    flags: Vec<String>,
    lowercase: Option<bool>,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
}

impl Pattern {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        pattern: String,
        lowercase: bool,
        stopwords_path: String,
    }

    appenders! {
        flags,
        stopwords,
    }
}

impl Source for Pattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "pattern".into());
        optional_add!(options,
            self.pattern => "pattern",
            self.lowercase => "lowercase",
            self.stopwords_path => "stopwords_path",
        );
        if !self.flags.is_empty() {
            options.insert("flags".into(), self.flags.iter().join("|").into());
        }
        many_add!(options, self.stopwords => "stopwords");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .each_one_of("flags", &self.flags, REGEX_FLAGS);
        v.finish()
    }
}

impl Analyzer for Pattern {}

/// The `fingerprint` analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fingerprint {
    name: String,
    separator: Option<String>,
    max_output_size: Option<i64>,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
}

impl Fingerprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        separator: String,
        max_output_size: i64,
        stopwords_path: String,
    }

    appenders! {
        stopwords,
    }
}

impl Source for Fingerprint {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "fingerprint".into());
        optional_add!(options,
            self.separator => "separator",
            self.max_output_size => "max_output_size",
            self.stopwords_path => "stopwords_path",
        );
        many_add!(options, self.stopwords => "stopwords");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Analyzer for Fingerprint {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_fingerprint_with_name() {
        let analyzer = Fingerprint::new("test").stopwords(["_english_"]);
        assert_eq!(
            serde_json::to_string(&analyzer.source(true).unwrap()).unwrap(),
            r#"{"test":{"stopwords":"_english_","type":"fingerprint"}}"#
        );
    }

    #[test]
    fn test_fingerprint_all_options() {
        let analyzer = Fingerprint::new("fp")
            .separator("+")
            .max_output_size(255)
            .stopwords_path("stop.txt");
        assert_eq!(
            analyzer.source(false).unwrap(),
            json!({
                "type": "fingerprint",
                "separator": "+",
                "max_output_size": 255,
                "stopwords_path": "stop.txt"
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "standard"}))]
    #[case(vec!["a"], json!({"type": "standard", "stopwords": "a"}))]
    #[case(vec!["a", "an", "the"], json!({"type": "standard", "stopwords": ["a", "an", "the"]}))]
    fn test_standard_stopwords(#[case] stopwords: Vec<&str>, #[case] expected: Value) {
        let analyzer = Standard::new("std").stopwords(stopwords);
        assert_eq!(analyzer.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "stop"}))]
    #[case(vec!["_english_"], json!({"type": "stop", "stopwords": "_english_"}))]
    #[case(vec!["and", "or"], json!({"type": "stop", "stopwords": ["and", "or"]}))]
    fn test_stop_stopwords(#[case] stopwords: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Stop::new("stop").stopwords(stopwords).source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "pattern"}))]
    #[case(vec!["_english_"], json!({"type": "pattern", "stopwords": "_english_"}))]
    #[case(vec!["and", "or"], json!({"type": "pattern", "stopwords": ["and", "or"]}))]
    fn test_pattern_stopwords(#[case] stopwords: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Pattern::new("p").stopwords(stopwords).source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "pattern"}))]
    #[case(vec!["MULTILINE"], json!({"type": "pattern", "flags": "MULTILINE"}))]
    #[case(vec!["MULTILINE", "DOTALL"], json!({"type": "pattern", "flags": "MULTILINE|DOTALL"}))]
    fn test_pattern_flags(#[case] flags: Vec<&str>, #[case] expected: Value) {
        let analyzer = Pattern::new("p").flags(flags);
        assert_eq!(analyzer.source(false).unwrap(), expected);
        assert!(analyzer.validate(true).is_ok());
    }

    #[rstest]
    #[case(vec![], json!({"type": "fingerprint"}))]
    #[case(vec!["_english_"], json!({"type": "fingerprint", "stopwords": "_english_"}))]
    #[case(vec!["and", "or"], json!({"type": "fingerprint", "stopwords": ["and", "or"]}))]
    fn test_fingerprint_stopwords(#[case] stopwords: Vec<&str>, #[case] expected: Value) {
        assert_eq!(Fingerprint::new("fp").stopwords(stopwords).source(false).unwrap(), expected);
    }

    #[test]
    fn test_stopwords_accumulate() {
        let analyzer = Stop::new("stop").stopwords(["a"]).stopwords(["b", "c"]);
        assert_eq!(
            analyzer.source(false).unwrap(),
            json!({"type": "stop", "stopwords": ["a", "b", "c"]})
        );
    }

    #[test]
    fn test_pattern_flags_join() {
        let analyzer = Pattern::new("email")
            .pattern(r"\W|_")
            .flags(["CASE_INSENSITIVE", "COMMENTS"])
            .lowercase(true);
        assert_eq!(
            analyzer.source(false).unwrap(),
            json!({
                "type": "pattern",
                "pattern": r"\W|_",
                "flags": "CASE_INSENSITIVE|COMMENTS",
                "lowercase": true
            })
        );
        assert!(analyzer.validate(true).is_ok());
    }

    #[test]
    fn test_pattern_unknown_flag() {
        let err = Pattern::new("p").flags(["SHOUTING"]).validate(true).unwrap_err();
        assert_eq!(err.fields(), ["flags"]);
    }

    #[rstest]
    #[case(Simple::new("s").source(true).unwrap(), json!({"s": {"type": "simple"}}))]
    #[case(Whitespace::new("w").source(true).unwrap(), json!({"w": {"type": "whitespace"}}))]
    #[case(Keyword::new("k").source(false).unwrap(), json!({"type": "keyword"}))]
    fn test_plain_analyzers(#[case] actual: Value, #[case] expected: Value) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_name_when_named() {
        let err = Standard::new("").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["name"]);
        assert!(Standard::new("").validate(false).is_ok());
    }

    #[test]
    fn test_source_is_repeatable() {
        let analyzer = Standard::new("std").max_token_length(5).stopwords(["x", "y"]);
        assert_eq!(analyzer.source(true).unwrap(), analyzer.source(true).unwrap());
        assert_eq!(
            analyzer.source(true).unwrap(),
            json!({"std": analyzer.source(false).unwrap()})
        );
    }
}
