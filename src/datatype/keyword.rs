use serde_json::{Map, Value};

use super::KEYWORD_INDEX_OPTIONS;
use crate::error::Result;
use crate::source::{keyed, validate_all, wrap, Datatype, Source, Validation};

/// The `keyword` datatype for structured content: ids, codes, tags.
#[derive(Debug, Default)]
pub struct Keyword {
    name: String,
    boost: Option<f64>,
    copy_to: Vec<String>,
    doc_values: Option<bool>,
    eager_global_ordinals: Option<bool>,
    fields: Vec<Box<dyn Datatype>>,
    ignore_above: Option<i64>,
    index: Option<bool>,
    index_options: Option<String>,
    norms: Option<bool>,
    null_value: Option<String>,
    store: Option<bool>,
    similarity: Option<String>,
    normalizer: Option<String>,
    split_queries_on_whitespace: Option<bool>,
}

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        boost: f64,
        doc_values: bool,
        eager_global_ordinals: bool,
        /// Strings longer than this are not indexed.
        ignore_above: i64,
        index: bool,
        /// `docs` or `freqs`.
        index_options: String,
        norms: bool,
        null_value: String,
        store: bool,
        similarity: String,
        normalizer: String,
        split_queries_on_whitespace: bool,
    }

    appenders! {
        copy_to,
    }

    /// Add a multi-field indexing the same value another way.
    pub fn field(mut self, field: impl Datatype + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }
}

impl Source for Keyword {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "keyword".into());
        optional_add!(options,
            self.boost => "boost",
            self.doc_values => "doc_values",
            self.eager_global_ordinals => "eager_global_ordinals",
            self.ignore_above => "ignore_above",
            self.index => "index",
            self.index_options => "index_options",
            self.norms => "norms",
            self.null_value => "null_value",
            self.store => "store",
            self.similarity => "similarity",
            self.normalizer => "normalizer",
            self.split_queries_on_whitespace => "split_queries_on_whitespace",
        );
        many_add!(options, self.copy_to => "copy_to");
        if let Some(fields) = keyed(&self.fields)? {
            options.insert("fields".into(), fields);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        validate_all(&self.fields)?;
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).one_of(
            "index_options",
            self.index_options.as_deref(),
            KEYWORD_INDEX_OPTIONS,
        );
        v.finish()
    }
}

impl Datatype for Keyword {}

/// The `constant_keyword` datatype: every document holds the same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantKeyword {
    name: String,
    value: Option<String>,
}

impl ConstantKeyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        value: String,
    }
}

impl Source for ConstantKeyword {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "constant_keyword".into());
        optional_add!(options, self.value => "value");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for ConstantKeyword {}

/// The `wildcard` datatype, optimized for grep-like queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wildcard {
    name: String,
    ignore_above: Option<i64>,
    null_value: Option<String>,
}

impl Wildcard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        ignore_above: i64,
        null_value: String,
    }
}

impl Source for Wildcard {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "wildcard".into());
        optional_add!(options,
            self.ignore_above => "ignore_above",
            self.null_value => "null_value",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Wildcard {}
