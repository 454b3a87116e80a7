use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

#[derive(Debug, Clone, Default, PartialEq)]
struct Subwords {
    word_list: Vec<String>,
    word_list_path: Option<String>,
    max_subword_size: Option<i64>,
    min_subword_size: Option<i64>,
    min_word_size: Option<i64>,
    only_longest_match: Option<bool>,
}

impl Subwords {
    fn add_to(&self, options: &mut Map<String, Value>) {
        optional_add!(options,
            self.word_list_path => "word_list_path",
            self.max_subword_size => "max_subword_size",
            self.min_subword_size => "min_subword_size",
            self.min_word_size => "min_word_size",
            self.only_longest_match => "only_longest_match",
        );
        many_add!(options, self.word_list => "word_list");
    }

    fn has_words(&self) -> bool {
        !self.word_list.is_empty() || self.word_list_path.is_some()
    }
}

macro_rules! subword_setters {
    () => {
        /// Append subwords to look for.
        pub fn word_list<I, S>(mut self, words: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.subwords.word_list.extend(words.into_iter().map(Into::into));
            self
        }

        pub fn word_list_path(mut self, path: impl Into<String>) -> Self {
            self.subwords.word_list_path = Some(path.into());
            self
        }

        pub fn max_subword_size(mut self, size: i64) -> Self {
            self.subwords.max_subword_size = Some(size);
            self
        }

        pub fn min_subword_size(mut self, size: i64) -> Self {
            self.subwords.min_subword_size = Some(size);
            self
        }

        pub fn min_word_size(mut self, size: i64) -> Self {
            self.subwords.min_word_size = Some(size);
            self
        }

        pub fn only_longest_match(mut self, only_longest_match: bool) -> Self {
            self.subwords.only_longest_match = Some(only_longest_match);
            self
        }
    };
}

/// The `dictionary_decompounder` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryDecompounder {
    name: String,
    subwords: Subwords,
}

impl DictionaryDecompounder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    subword_setters!();
}

impl Source for DictionaryDecompounder {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "dictionary_decompounder".into());
        self.subwords.add_to(&mut options);
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("word_list", self.subwords.has_words());
        v.finish()
    }
}

impl TokenFilter for DictionaryDecompounder {}

/// The `hyphenation_decompounder` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyphenationDecompounder {
    name: String,
    hyphenation_patterns_path: Option<String>,
    subwords: Subwords,
}

impl HyphenationDecompounder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// Apache FOP XML hyphenation patterns, relative to the config directory.
        hyphenation_patterns_path: String,
    }

    subword_setters!();
}

impl Source for HyphenationDecompounder {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "hyphenation_decompounder".into());
        optional_add!(options, self.hyphenation_patterns_path => "hyphenation_patterns_path");
        self.subwords.add_to(&mut options);
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require(
                "hyphenation_patterns_path",
                self.hyphenation_patterns_path.is_some(),
            )
            .require("word_list", self.subwords.has_words());
        v.finish()
    }
}

impl TokenFilter for HyphenationDecompounder {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_dictionary_decompounder() {
        let filter = DictionaryDecompounder::new("de")
            .word_list(["Donau", "dampf", "meer", "schiff"])
            .max_subword_size(15)
            .only_longest_match(true);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "dictionary_decompounder",
                "word_list": ["Donau", "dampf", "meer", "schiff"],
                "max_subword_size": 15,
                "only_longest_match": true
            })
        );
        assert!(filter.validate(true).is_ok());
    }

    #[test]
    fn test_hyphenation_decompounder() {
        let filter = HyphenationDecompounder::new("hy")
            .hyphenation_patterns_path("analysis/hyphenation_patterns.xml")
            .word_list_path("analysis/example_word_list.txt")
            .min_word_size(5)
            .min_subword_size(2);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"hy": {
                "type": "hyphenation_decompounder",
                "hyphenation_patterns_path": "analysis/hyphenation_patterns.xml",
                "word_list_path": "analysis/example_word_list.txt",
                "min_word_size": 5,
                "min_subword_size": 2
            }})
        );
    }

    #[test]
    fn test_hyphenation_requires_patterns_and_words() {
        let err = HyphenationDecompounder::new("hy").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["hyphenation_patterns_path", "word_list"]);
    }

    #[rstest]
    #[case(vec![], json!({"type": "dictionary_decompounder"}))]
    #[case(vec!["schiff"], json!({"type": "dictionary_decompounder", "word_list": "schiff"}))]
    #[case(
        vec!["Donau", "schiff"],
        json!({"type": "dictionary_decompounder", "word_list": ["Donau", "schiff"]})
    )]
    fn test_dictionary_word_list(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = DictionaryDecompounder::new("de").word_list(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "hyphenation_decompounder"}))]
    #[case(vec!["kaffee"], json!({"type": "hyphenation_decompounder", "word_list": "kaffee"}))]
    #[case(
        vec!["kaffee", "zucker"],
        json!({"type": "hyphenation_decompounder", "word_list": ["kaffee", "zucker"]})
    )]
    fn test_hyphenation_word_list(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = HyphenationDecompounder::new("hy").word_list(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }
}
