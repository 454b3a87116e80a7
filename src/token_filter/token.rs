use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, TokenFilter, Validation};

const CJK_SCRIPTS: &[&str] = &["han", "hangul", "hiragana", "katakana"];

const LOWERCASE_LANGUAGES: &[&str] = &["greek", "irish", "turkish"];

const PAYLOAD_ENCODINGS: &[&str] = &["float", "identity", "int"];

/// The `asciifolding` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsciiFolding {
    name: String,
    preserve_original: Option<bool>,
}

impl AsciiFolding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        preserve_original: bool,
    }
}

impl Source for AsciiFolding {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "asciifolding".into());
        optional_add!(options, self.preserve_original => "preserve_original");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for AsciiFolding {}

/// The `cjk_bigram` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CjkBigram {
    name: String,
    ignored_scripts: Vec<String>,
    output_unigrams: Option<bool>,
}

impl CjkBigram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        output_unigrams: bool,
    }

    appenders! {
        /// Scripts left unbigrammed: `han`, `hangul`, `hiragana` or `katakana`.
        ignored_scripts,
    }
}

impl Source for CjkBigram {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "cjk_bigram".into());
        optional_add!(options, self.output_unigrams => "output_unigrams");
        many_add!(options, self.ignored_scripts => "ignored_scripts");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .each_one_of("ignored_scripts", &self.ignored_scripts, CJK_SCRIPTS);
        v.finish()
    }
}

impl TokenFilter for CjkBigram {}

/// The `delimited_payload` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelimitedPayload {
    name: String,
    delimiter: Option<String>,
    encoding: Option<String>,
}

impl DelimitedPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        delimiter: String,
        encoding: String,
    }
}

impl Source for DelimitedPayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "delimited_payload".into());
        optional_add!(options,
            self.delimiter => "delimiter",
            self.encoding => "encoding",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("encoding", self.encoding.as_deref(), PAYLOAD_ENCODINGS);
        v.finish()
    }
}

impl TokenFilter for DelimitedPayload {}

/// The `fingerprint` token filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fingerprint {
    name: String,
    max_output_size: Option<i64>,
    separator: Option<String>,
}

impl Fingerprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        max_output_size: i64,
        separator: String,
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
            self.max_output_size => "max_output_size",
            self.separator => "separator",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Fingerprint {}

/// The `length` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Length {
    name: String,
    min: Option<i64>,
    max: Option<i64>,
}

impl Length {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        min: i64,
        max: i64,
    }
}

impl Source for Length {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "length".into());
        optional_add!(options,
            self.min => "min",
            self.max => "max",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Length {}

/// The `limit` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Limit {
    name: String,
    max_token_count: Option<i64>,
    consume_all_tokens: Option<bool>,
}

impl Limit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        max_token_count: i64,
        consume_all_tokens: bool,
    }
}

impl Source for Limit {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "limit".into());
        optional_add!(options,
            self.max_token_count => "max_token_count",
            self.consume_all_tokens => "consume_all_tokens",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Limit {}

/// The `lowercase` filter, optionally with language specific rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lowercase {
    name: String,
    language: Option<String>,
}

impl Lowercase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        language: String,
    }
}

impl Source for Lowercase {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "lowercase".into());
        optional_add!(options, self.language => "language");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("language", self.language.as_deref(), LOWERCASE_LANGUAGES);
        v.finish()
    }
}

impl TokenFilter for Lowercase {}

/// The `min_hash` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinHash {
    name: String,
    bucket_count: Option<i64>,
    hash_count: Option<i64>,
    hash_set_size: Option<i64>,
    with_rotation: Option<bool>,
}

impl MinHash {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        bucket_count: i64,
        hash_count: i64,
        hash_set_size: i64,
        with_rotation: bool,
    }
}

impl Source for MinHash {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "min_hash".into());
        optional_add!(options,
            self.bucket_count => "bucket_count",
            self.hash_count => "hash_count",
            self.hash_set_size => "hash_set_size",
            self.with_rotation => "with_rotation",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for MinHash {}

/// The `truncate` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Truncate {
    name: String,
    length: Option<i64>,
}

impl Truncate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        length: i64,
    }
}

impl Source for Truncate {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "truncate".into());
        optional_add!(options, self.length => "length");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Truncate {}

/// The `unique` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unique {
    name: String,
    only_on_same_position: Option<bool>,
}

impl Unique {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        only_on_same_position: bool,
    }
}

impl Source for Unique {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "unique".into());
        optional_add!(options, self.only_on_same_position => "only_on_same_position");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Unique {}
