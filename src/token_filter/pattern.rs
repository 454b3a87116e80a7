use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

/// The `pattern_capture` filter, emitting a token per capture group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternCapture {
    name: String,
    patterns: Vec<String>,
    preserve_original: Option<bool>,
}

impl PatternCapture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        preserve_original: bool,
    }

    appenders! {
        patterns,
    }
}

impl Source for PatternCapture {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "pattern_capture".into());
        optional_add!(options, self.preserve_original => "preserve_original");
        many_add!(options, self.patterns => "patterns");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("patterns", !self.patterns.is_empty());
        v.finish()
    }
}

impl TokenFilter for PatternCapture {}

/// The `pattern_replace` token filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternReplace {
    name: String,
    pattern: Option<String>,
    replacement: Option<String>,
    all: Option<bool>,
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
        replacement: String,
        /// Replace every match rather than only the first.
        all: bool,
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
            self.all => "all",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("pattern", self.pattern.is_some());
        v.finish()
    }
}

impl TokenFilter for PatternReplace {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_pattern_capture() {
        let filter = PatternCapture::new("code")
            .patterns([r"(\p{Ll}+|\p{Lu}\p{Ll}+|\p{Lu}+)", r"(\d+)"])
            .preserve_original(true);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "pattern_capture",
                "patterns": [r"(\p{Ll}+|\p{Lu}\p{Ll}+|\p{Lu}+)", r"(\d+)"],
                "preserve_original": true
            })
        );
        assert!(PatternCapture::new("c").validate(true).is_err());
    }

    #[test]
    fn test_pattern_replace_filter() {
        let filter = PatternReplace::new("fox_to_dog")
            .pattern("(dog)")
            .replacement("watch$1")
            .all(false);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"fox_to_dog": {
                "type": "pattern_replace",
                "pattern": "(dog)",
                "replacement": "watch$1",
                "all": false
            }})
        );
        assert!(filter.validate(true).is_ok());
    }

    #[rstest]
    #[case(vec![], json!({"type": "pattern_capture"}))]
    #[case(vec!["(\\d+)"], json!({"type": "pattern_capture", "patterns": "(\\d+)"}))]
    #[case(
        vec!["(\\d+)", "(\\p{Lu}+)"],
        json!({"type": "pattern_capture", "patterns": ["(\\d+)", "(\\p{Lu}+)"]})
    )]
    fn test_pattern_capture_patterns(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = PatternCapture::new("c").patterns(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }
}
