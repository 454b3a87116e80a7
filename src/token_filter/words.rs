use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

const KEEP_TYPES_MODES: &[&str] = &["include", "exclude"];

/// The `stop` token filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stop {
    name: String,
    stopwords: Vec<String>,
    stopwords_path: Option<String>,
    ignore_case: Option<bool>,
    remove_trailing: Option<bool>,
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
        ignore_case: bool,
        remove_trailing: bool,
    }

    appenders! {
        /// Append stop words or a predefined list such as `_english_`.
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
        optional_add!(options,
            self.stopwords_path => "stopwords_path",
            self.ignore_case => "ignore_case",
            self.remove_trailing => "remove_trailing",
        );
        many_add!(options, self.stopwords => "stopwords");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Stop {}

/// The `keep` filter, dropping every token not in the word list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keep {
    name: String,
    keep_words: Vec<String>,
    keep_words_path: Option<String>,
    keep_words_case: Option<bool>,
}

impl Keep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        keep_words_path: String,
        /// Lowercase the word list before matching.
        keep_words_case: bool,
    }

    appenders! {
        keep_words,
    }
}

impl Source for Keep {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "keep".into());
        optional_add!(options,
            self.keep_words_path => "keep_words_path",
            self.keep_words_case => "keep_words_case",
        );
        many_add!(options, self.keep_words => "keep_words");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).require(
            "keep_words",
            !self.keep_words.is_empty() || self.keep_words_path.is_some(),
        );
        v.finish()
    }
}

impl TokenFilter for Keep {}

/// The `keep_types` filter, matching on token types such as `<NUM>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeepTypes {
    name: String,
    types: Vec<String>,
    mode: Option<String>,
}

impl KeepTypes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// `include` (the default) or `exclude`.
        mode: String,
    }

    appenders! {
        types,
    }
}

impl Source for KeepTypes {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "keep_types".into());
        optional_add!(options, self.mode => "mode");
        many_add!(options, self.types => "types");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("types", !self.types.is_empty())
            .one_of("mode", self.mode.as_deref(), KEEP_TYPES_MODES);
        v.finish()
    }
}

impl TokenFilter for KeepTypes {}

/// The `keyword_marker` filter, protecting tokens from stemming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMarker {
    name: String,
    ignore_case: Option<bool>,
    keywords: Vec<String>,
    keywords_path: Option<String>,
    keywords_pattern: Option<String>,
}

impl KeywordMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        ignore_case: bool,
        keywords_path: String,
        keywords_pattern: String,
    }

    appenders! {
        keywords,
    }
}

impl Source for KeywordMarker {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "keyword_marker".into());
        optional_add!(options,
            self.ignore_case => "ignore_case",
            self.keywords_path => "keywords_path",
            self.keywords_pattern => "keywords_pattern",
        );
        many_add!(options, self.keywords => "keywords");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let sources = [
            !self.keywords.is_empty(),
            self.keywords_path.is_some(),
            self.keywords_pattern.is_some(),
        ];
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).require(
            "keywords",
            sources.iter().filter(|set| **set).count() == 1,
        );
        v.finish()
    }
}

impl TokenFilter for KeywordMarker {}

/// The `common_grams` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonGrams {
    name: String,
    common_words: Vec<String>,
    common_words_path: Option<String>,
    ignore_case: Option<bool>,
    query_mode: Option<bool>,
}

impl CommonGrams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        common_words_path: String,
        ignore_case: bool,
        query_mode: bool,
    }

    appenders! {
        common_words,
    }
}

impl Source for CommonGrams {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "common_grams".into());
        optional_add!(options,
            self.common_words_path => "common_words_path",
            self.ignore_case => "ignore_case",
            self.query_mode => "query_mode",
        );
        many_add!(options, self.common_words => "common_words");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).require(
            "common_words",
            !self.common_words.is_empty() || self.common_words_path.is_some(),
        );
        v.finish()
    }
}

impl TokenFilter for CommonGrams {}

/// The `elision` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Elision {
    name: String,
    articles: Vec<String>,
    articles_path: Option<String>,
    articles_case: Option<bool>,
}

impl Elision {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        articles_path: String,
        articles_case: bool,
    }

    appenders! {
        articles,
    }
}

impl Source for Elision {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "elision".into());
        optional_add!(options,
            self.articles_path => "articles_path",
            self.articles_case => "articles_case",
        );
        many_add!(options, self.articles => "articles");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Elision {}

/// The `stemmer_override` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StemmerOverride {
    name: String,
    rules: Vec<String>,
    rules_path: Option<String>,
}

impl StemmerOverride {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        rules_path: String,
    }

    appenders! {
        /// Rules such as `running, runs => run`.
        rules,
    }
}

impl Source for StemmerOverride {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "stemmer_override".into());
        optional_add!(options, self.rules_path => "rules_path");
        many_add!(options, self.rules => "rules");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("rules", !self.rules.is_empty() || self.rules_path.is_some());
        v.finish()
    }
}

impl TokenFilter for StemmerOverride {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_stop_filter() {
        let filter = Stop::new("english_stop").stopwords(["_english_"]);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"english_stop": {"type": "stop", "stopwords": "_english_"}})
        );
    }

    #[test]
    fn test_stop_filter_options() {
        let filter = Stop::new("s")
            .stopwords(["and", "is", "the"])
            .ignore_case(true)
            .remove_trailing(false);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "stop",
                "stopwords": ["and", "is", "the"],
                "ignore_case": true,
                "remove_trailing": false
            })
        );
    }

    #[test]
    fn test_keep() {
        let filter = Keep::new("keep").keep_words(["dog", "elephant", "fox"]);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({"type": "keep", "keep_words": ["dog", "elephant", "fox"]})
        );
        assert!(Keep::new("k").validate(true).is_err());
    }

    #[rstest]
    #[case(vec!["<NUM>"], Some("include"), true)]
    #[case(vec!["<NUM>"], Some("skip"), false)]
    #[case(vec![], None, false)]
    fn test_keep_types_validation(
        #[case] types: Vec<&str>,
        #[case] mode: Option<&str>,
        #[case] valid: bool,
    ) {
        let mut filter = KeepTypes::new("kt").types(types);
        if let Some(mode) = mode {
            filter = filter.mode(mode);
        }
        assert_eq!(filter.validate(true).is_ok(), valid);
    }

    #[rstest]
    #[case(KeywordMarker::new("km").keywords(["jumping"]), true)]
    #[case(KeywordMarker::new("km").keywords_pattern("[a-z]+ing"), true)]
    #[case(KeywordMarker::new("km"), false)]
    #[case(KeywordMarker::new("km").keywords(["a"]).keywords_path("k.txt"), false)]
    fn test_keyword_marker_needs_one_source(#[case] filter: KeywordMarker, #[case] valid: bool) {
        assert_eq!(filter.validate(true).is_ok(), valid);
    }

    #[test]
    fn test_common_grams() {
        let filter = CommonGrams::new("cg")
            .common_words(["is", "the"])
            .ignore_case(true)
            .query_mode(true);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "common_grams",
                "common_words": ["is", "the"],
                "ignore_case": true,
                "query_mode": true
            })
        );
    }

    #[test]
    fn test_elision() {
        let filter = Elision::new("fr_elision")
            .articles(["l", "m", "t", "qu", "n", "s", "j"])
            .articles_case(true);
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"fr_elision": {
                "type": "elision",
                "articles": ["l", "m", "t", "qu", "n", "s", "j"],
                "articles_case": true
            }})
        );
    }

    #[test]
    fn test_stemmer_override() {
        let filter = StemmerOverride::new("custom_stems").rules(["running, runs => run"]);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({"type": "stemmer_override", "rules": "running, runs => run"})
        );
        assert!(StemmerOverride::new("o").validate(true).is_err());
    }

    #[rstest]
    #[case(vec![], json!({"type": "stop"}))]
    #[case(vec!["_english_"], json!({"type": "stop", "stopwords": "_english_"}))]
    #[case(vec!["and", "the"], json!({"type": "stop", "stopwords": ["and", "the"]}))]
    fn test_stop_stopwords(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = Stop::new("s").stopwords(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "keep"}))]
    #[case(vec!["dog"], json!({"type": "keep", "keep_words": "dog"}))]
    #[case(vec!["dog", "fox"], json!({"type": "keep", "keep_words": ["dog", "fox"]}))]
    fn test_keep_words(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = Keep::new("k").keep_words(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "keep_types"}))]
    #[case(vec!["<NUM>"], json!({"type": "keep_types", "types": "<NUM>"}))]
    #[case(vec!["<NUM>", "<ALPHANUM>"], json!({"type": "keep_types", "types": ["<NUM>", "<ALPHANUM>"]}))]
    fn test_keep_types(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = KeepTypes::new("kt").types(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "keyword_marker"}))]
    #[case(vec!["jumping"], json!({"type": "keyword_marker", "keywords": "jumping"}))]
    #[case(vec!["jumping", "running"], json!({"type": "keyword_marker", "keywords": ["jumping", "running"]}))]
    fn test_keyword_marker_keywords(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = KeywordMarker::new("km").keywords(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "common_grams"}))]
    #[case(vec!["the"], json!({"type": "common_grams", "common_words": "the"}))]
    #[case(vec!["is", "the"], json!({"type": "common_grams", "common_words": ["is", "the"]}))]
    fn test_common_words(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = CommonGrams::new("cg").common_words(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "elision"}))]
    #[case(vec!["l"], json!({"type": "elision", "articles": "l"}))]
    #[case(vec!["l", "qu", "j"], json!({"type": "elision", "articles": ["l", "qu", "j"]}))]
    fn test_elision_articles(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = Elision::new("e").articles(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "stemmer_override"}))]
    #[case(vec!["mice => mouse"], json!({"type": "stemmer_override", "rules": "mice => mouse"}))]
    #[case(
        vec!["mice => mouse", "feet => foot"],
        json!({"type": "stemmer_override", "rules": ["mice => mouse", "feet => foot"]})
    )]
    fn test_stemmer_override_rules(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = StemmerOverride::new("o").rules(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }
}
