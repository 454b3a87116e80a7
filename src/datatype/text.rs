use serde_json::{Map, Value};

use super::{TERM_VECTORS, TEXT_INDEX_OPTIONS};
use crate::error::Result;
use crate::source::{keyed, validate_all, wrap, Datatype, Source, Validation};

/// Frequency bounds limiting which terms are loaded into fielddata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FielddataFrequencyFilter {
    min: Option<f64>,
    max: Option<f64>,
    min_segment_size: Option<i64>,
}

impl FielddataFrequencyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        min: f64,
        max: f64,
        min_segment_size: i64,
    }
}

impl From<FielddataFrequencyFilter> for Value {
    fn from(filter: FielddataFrequencyFilter) -> Self {
        let mut options = Map::new();
        optional_add!(options,
            filter.min => "min",
            filter.max => "max",
            filter.min_segment_size => "min_segment_size",
        );
        Value::Object(options)
    }
}

/// Prefix lengths indexed separately to speed up prefix queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexPrefixes {
    min_chars: Option<i64>,
    max_chars: Option<i64>,
}

impl IndexPrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        min_chars: i64,
        max_chars: i64,
    }
}

impl From<IndexPrefixes> for Value {
    fn from(prefixes: IndexPrefixes) -> Self {
        let mut options = Map::new();
        optional_add!(options,
            prefixes.min_chars => "min_chars",
            prefixes.max_chars => "max_chars",
        );
        Value::Object(options)
    }
}

/// The `text` datatype for analyzed full-text values.
///
/// ```
/// use estemplate::datatype::{Keyword, Text};
/// use estemplate::Source;
/// use serde_json::json;
///
/// let title = Text::new("title").field(Keyword::new("raw"));
/// assert_eq!(
///     title.source(true).unwrap(),
///     json!({"title": {"type": "text", "fields": {"raw": {"type": "keyword"}}}})
/// );
/// ```
#[derive(Debug, Default)]
pub struct Text {
    name: String,
    analyzer: Option<String>,
    boost: Option<f64>,
    copy_to: Vec<String>,
    eager_global_ordinals: Option<bool>,
    fielddata: Option<bool>,
    fielddata_frequency_filter: Option<FielddataFrequencyFilter>,
    fields: Vec<Box<dyn Datatype>>,
    index: Option<bool>,
    index_options: Option<String>,
    index_prefixes: Option<IndexPrefixes>,
    index_phrases: Option<bool>,
    norms: Option<bool>,
    position_increment_gap: Option<i64>,
    store: Option<bool>,
    search_analyzer: Option<String>,
    search_quote_analyzer: Option<String>,
    similarity: Option<String>,
    term_vector: Option<String>,
}

impl Text {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        analyzer: String,
        boost: f64,
        eager_global_ordinals: bool,
        /// Allow in-memory fielddata for sorting and aggregations.
        fielddata: bool,
        fielddata_frequency_filter: FielddataFrequencyFilter,
        index: bool,
        index_options: String,
        index_prefixes: IndexPrefixes,
        index_phrases: bool,
        norms: bool,
        position_increment_gap: i64,
        store: bool,
        search_analyzer: String,
        search_quote_analyzer: String,
        similarity: String,
        term_vector: String,
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

impl Source for Text {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "text".into());
        optional_add!(options,
            self.analyzer => "analyzer",
            self.boost => "boost",
            self.eager_global_ordinals => "eager_global_ordinals",
            self.fielddata => "fielddata",
            self.fielddata_frequency_filter => "fielddata_frequency_filter",
            self.index => "index",
            self.index_options => "index_options",
            self.index_prefixes => "index_prefixes",
            self.index_phrases => "index_phrases",
            self.norms => "norms",
            self.position_increment_gap => "position_increment_gap",
            self.store => "store",
            self.search_analyzer => "search_analyzer",
            self.search_quote_analyzer => "search_quote_analyzer",
            self.similarity => "similarity",
            self.term_vector => "term_vector",
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
        v.name(&self.name, include_name)
            .one_of("index_options", self.index_options.as_deref(), TEXT_INDEX_OPTIONS)
            .one_of("term_vector", self.term_vector.as_deref(), TERM_VECTORS);
        v.finish()
    }
}

impl Datatype for Text {}

/// The `search_as_you_type` datatype, indexing shingle subfields for
/// as-you-type completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAsYouType {
    name: String,
    analyzer: Option<String>,
    index: Option<bool>,
    index_options: Option<String>,
    max_shingle_size: Option<i64>,
    norms: Option<bool>,
    search_analyzer: Option<String>,
    search_quote_analyzer: Option<String>,
    similarity: Option<String>,
    store: Option<bool>,
    term_vector: Option<String>,
}

impl SearchAsYouType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        analyzer: String,
        index: bool,
        index_options: String,
        /// Largest shingle subfield, between 2 and 4.
        max_shingle_size: i64,
        norms: bool,
        search_analyzer: String,
        search_quote_analyzer: String,
        similarity: String,
        store: bool,
        term_vector: String,
    }
}

impl Source for SearchAsYouType {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "search_as_you_type".into());
        optional_add!(options,
            self.analyzer => "analyzer",
            self.index => "index",
            self.index_options => "index_options",
            self.max_shingle_size => "max_shingle_size",
            self.norms => "norms",
            self.search_analyzer => "search_analyzer",
            self.search_quote_analyzer => "search_quote_analyzer",
            self.similarity => "similarity",
            self.store => "store",
            self.term_vector => "term_vector",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .one_of("index_options", self.index_options.as_deref(), TEXT_INDEX_OPTIONS)
            .one_of("term_vector", self.term_vector.as_deref(), TERM_VECTORS)
            .require(
                "max_shingle_size",
                self.max_shingle_size.map_or(true, |size| (2..=4).contains(&size)),
            );
        v.finish()
    }
}

impl Datatype for SearchAsYouType {}

/// The `token_count` datatype, indexing the number of tokens in a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCount {
    name: String,
    analyzer: Option<String>,
    enable_position_increments: Option<bool>,
    boost: Option<f64>,
    doc_values: Option<bool>,
    index: Option<bool>,
    null_value: Option<i64>,
    store: Option<bool>,
}

impl TokenCount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        analyzer: String,
        enable_position_increments: bool,
        boost: f64,
        doc_values: bool,
        index: bool,
        null_value: i64,
        store: bool,
    }
}

impl Source for TokenCount {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "token_count".into());
        optional_add!(options,
            self.analyzer => "analyzer",
            self.enable_position_increments => "enable_position_increments",
            self.boost => "boost",
            self.doc_values => "doc_values",
            self.index => "index",
            self.null_value => "null_value",
            self.store => "store",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("analyzer", self.analyzer.is_some());
        v.finish()
    }
}

impl Datatype for TokenCount {}

/// The `completion` datatype backing completion suggesters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    name: String,
    analyzer: Option<String>,
    search_analyzer: Option<String>,
    preserve_separators: Option<bool>,
    preserve_position_increments: Option<bool>,
    max_input_length: Option<i64>,
}

impl Completion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        analyzer: String,
        search_analyzer: String,
        preserve_separators: bool,
        preserve_position_increments: bool,
        max_input_length: i64,
    }
}

impl Source for Completion {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "completion".into());
        optional_add!(options,
            self.analyzer => "analyzer",
            self.search_analyzer => "search_analyzer",
            self.preserve_separators => "preserve_separators",
            self.preserve_position_increments => "preserve_position_increments",
            self.max_input_length => "max_input_length",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Completion {}
