use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, Tokenizer, Validation};

const TOKEN_CHARS: &[&str] = &["letter", "digit", "whitespace", "punctuation", "symbol", "custom"];

#[derive(Debug, Clone, Default, PartialEq)]
struct Grams {
    min_gram: Option<i64>,
    max_gram: Option<i64>,
    token_chars: Vec<String>,
    custom_token_chars: Option<String>,
}

impl Grams {
    fn add_to(&self, options: &mut Map<String, Value>) {
        optional_add!(options,
            self.min_gram => "min_gram",
            self.max_gram => "max_gram",
            self.custom_token_chars => "custom_token_chars",
        );
        many_add!(options, self.token_chars => "token_chars");
    }

    fn check(&self, v: &mut Validation) {
        v.each_one_of("token_chars", &self.token_chars, TOKEN_CHARS);
        if self.token_chars.iter().any(|c| c == "custom") {
            v.require("custom_token_chars", self.custom_token_chars.is_some());
        }
    }
}

macro_rules! gram_tokenizer {
    ($($(#[$attr:meta])* $ty:ident => $kind:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $ty {
                name: String,
                grams: Grams,
            }

            impl $ty {
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        name: name.into(),
                        ..Self::default()
                    }
                }

                pub fn min_gram(mut self, min_gram: i64) -> Self {
                    self.grams.min_gram = Some(min_gram);
                    self
                }

                pub fn max_gram(mut self, max_gram: i64) -> Self {
                    self.grams.max_gram = Some(max_gram);
                    self
                }

                /// Append character classes kept in tokens.
                pub fn token_chars<I, S>(mut self, classes: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.grams.token_chars.extend(classes.into_iter().map(Into::into));
                    self
                }

                /// Characters treated as token characters by the `custom` class.
                pub fn custom_token_chars(mut self, chars: impl Into<String>) -> Self {
                    self.grams.custom_token_chars = Some(chars.into());
                    self
                }
            }

            impl Source for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn source(&self, include_name: bool) -> Result<Value> {
                    let mut options = Map::new();
                    options.insert("type".into(), $kind.into());
                    self.grams.add_to(&mut options);
                    Ok(wrap(&self.name, include_name, options.into()))
                }

                fn validate(&self, include_name: bool) -> Result<()> {
                    let mut v = Validation::of::<Self>();
                    v.name(&self.name, include_name);
                    self.grams.check(&mut v);
                    v.finish()
                }
            }

            impl Tokenizer for $ty {}
        )*
    };
}

gram_tokenizer! {
    /// The `ngram` tokenizer.
    NGram => "ngram",
    /// The `edge_ngram` tokenizer, anchored at the start of each word.
    EdgeNGram => "edge_ngram",
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_edge_ngram() {
        let tokenizer = EdgeNGram::new("autocomplete")
            .min_gram(2)
            .max_gram(10)
            .token_chars(["letter", "digit"]);
        assert_eq!(
            tokenizer.source(true).unwrap(),
            json!({"autocomplete": {
                "type": "edge_ngram",
                "min_gram": 2,
                "max_gram": 10,
                "token_chars": ["letter", "digit"]
            }})
        );
        assert!(tokenizer.validate(true).is_ok());
    }

    #[test]
    fn test_ngram_single_class() {
        let tokenizer = NGram::new("tri").min_gram(3).max_gram(3).token_chars(["letter"]);
        assert_eq!(
            tokenizer.source(false).unwrap(),
            json!({"type": "ngram", "min_gram": 3, "max_gram": 3, "token_chars": "letter"})
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "ngram"}))]
    #[case(vec!["digit"], json!({"type": "ngram", "token_chars": "digit"}))]
    #[case(vec!["digit", "punctuation"], json!({"type": "ngram", "token_chars": ["digit", "punctuation"]}))]
    fn test_ngram_token_chars(#[case] classes: Vec<&str>, #[case] expected: Value) {
        assert_eq!(NGram::new("n").token_chars(classes).source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "edge_ngram"}))]
    #[case(vec!["letter"], json!({"type": "edge_ngram", "token_chars": "letter"}))]
    #[case(vec!["letter", "whitespace"], json!({"type": "edge_ngram", "token_chars": ["letter", "whitespace"]}))]
    fn test_edge_ngram_token_chars(#[case] classes: Vec<&str>, #[case] expected: Value) {
        assert_eq!(EdgeNGram::new("e").token_chars(classes).source(false).unwrap(), expected);
    }

    #[test]
    fn test_custom_class_needs_chars() {
        let tokenizer = NGram::new("n").token_chars(["custom", "emoji"]);
        let err = tokenizer.validate(true).unwrap_err();
        assert_eq!(err.fields(), ["token_chars", "custom_token_chars"]);
        let tokenizer = NGram::new("n").token_chars(["custom"]).custom_token_chars("+-_");
        assert!(tokenizer.validate(true).is_ok());
    }
}
