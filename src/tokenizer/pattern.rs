use itertools::Itertools;
use serde_json::{Map, Value};

use crate::analyzer::REGEX_FLAGS;
use crate::error::Result;
use crate::source::{wrap, Source, Tokenizer, Validation};

/// The `pattern` tokenizer, splitting on a Java regular expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    name: String,
    pattern: Option<String>,
    flags: Vec<String>,
    group: Option<i64>,
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
        /// Capture group to emit as tokens instead of splitting.
        group: i64,
    }

    appenders! {
        flags,
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
            self.group => "group",
        );
        if !self.flags.is_empty() {
            options.insert("flags".into(), self.flags.iter().join("|").into());
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .each_one_of("flags", &self.flags, REGEX_FLAGS);
        v.finish()
    }
}

impl Tokenizer for Pattern {}

// Lucene regular expression tokenizers; the pattern is mandatory.
macro_rules! simple_pattern_tokenizer {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                pattern: Option<String>,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                setters! {
                    pattern: String,
                }
            }

            impl Source for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn source(&self, include_name: bool) -> Result<Value> {
                    let mut options = Map::new();
                    options.insert("type".into(), $kind.into());
                    optional_add!(options, self.pattern => "pattern");
                    Ok(wrap(&self.name, include_name, options.into()))
                }

                fn validate(&self, include_name: bool) -> Result<()> {
                    let mut v = Validation::of::<Self>();
                    v.name(&self.name, include_name)
                        .require("pattern", self.pattern.is_some());
                    v.finish()
                }
            }

            impl Tokenizer for $ty {}
        )*
    };
}

simple_pattern_tokenizer! {
    /// Emits the text matching the pattern.
    SimplePattern => "simple_pattern",
    /// Splits on text matching the pattern.
    SimplePatternSplit => "simple_pattern_split",
}

/// The `char_group` tokenizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharGroup {
    name: String,
    tokenize_on_chars: Vec<String>,
    max_token_length: Option<i64>,
}

impl CharGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        max_token_length: i64,
    }

    appenders! {
        /// Single characters, escapes such as `\n`, or classes such as `whitespace`.
        tokenize_on_chars,
    }
}

impl Source for CharGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "char_group".into());
        optional_add!(options, self.max_token_length => "max_token_length");
        many_add!(options, self.tokenize_on_chars => "tokenize_on_chars");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("tokenize_on_chars", !self.tokenize_on_chars.is_empty());
        v.finish()
    }
}

impl Tokenizer for CharGroup {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_pattern_tokenizer() {
        let tokenizer = Pattern::new("quoted")
            .pattern(r#""((?:\\"|[^"]|\\")+)""#)
            .group(1)
            .flags(["DOTALL"]);
        assert_eq!(
            tokenizer.source(false).unwrap(),
            json!({
                "type": "pattern",
                "pattern": r#""((?:\\"|[^"]|\\")+)""#,
                "group": 1,
                "flags": "DOTALL"
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "pattern"}))]
    #[case(vec!["COMMENTS"], json!({"type": "pattern", "flags": "COMMENTS"}))]
    #[case(vec!["COMMENTS", "UNICODE_CASE"], json!({"type": "pattern", "flags": "COMMENTS|UNICODE_CASE"}))]
    fn test_pattern_tokenizer_flags(#[case] flags: Vec<&str>, #[case] expected: Value) {
        let tokenizer = Pattern::new("p").flags(flags);
        assert_eq!(tokenizer.source(false).unwrap(), expected);
        assert!(tokenizer.validate(true).is_ok());
    }

    #[test]
    fn test_simple_pattern_requires_pattern() {
        let err = SimplePatternSplit::new("s").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["pattern"]);
        let tokenizer = SimplePattern::new("digits").pattern("[0123456789]{3}");
        assert_eq!(
            tokenizer.source(true).unwrap(),
            json!({"digits": {"type": "simple_pattern", "pattern": "[0123456789]{3}"}})
        );
    }

    #[test]
    fn test_char_group() {
        let tokenizer = CharGroup::new("cg").tokenize_on_chars(["whitespace", "-", "\n"]);
        assert_eq!(
            tokenizer.source(false).unwrap(),
            json!({"type": "char_group", "tokenize_on_chars": ["whitespace", "-", "\n"]})
        );
        assert!(CharGroup::new("cg").validate(false).is_err());
    }

    #[rstest]
    #[case(vec![], json!({"type": "char_group"}))]
    #[case(vec!["whitespace"], json!({"type": "char_group", "tokenize_on_chars": "whitespace"}))]
    #[case(vec!["whitespace", "-"], json!({"type": "char_group", "tokenize_on_chars": ["whitespace", "-"]}))]
    fn test_char_group_tokenize_on_chars(#[case] chars: Vec<&str>, #[case] expected: Value) {
        let tokenizer = CharGroup::new("cg").tokenize_on_chars(chars);
        assert_eq!(tokenizer.source(false).unwrap(), expected);
    }
}
