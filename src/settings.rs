//! Index settings: analysis chain, similarity models, shard allocation
//! filtering and slow log thresholds.

use std::collections::BTreeMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{
    keyed, validate_all, wrap, Analyzer, CharFilter, Normalizer, Similarity, Source, TokenFilter,
    Tokenizer, Validation,
};

lazy_static! {
    static ref TIME_VALUE: Regex = Regex::new(r"^(-1|0|\d+(\.\d+)?(nanos|micros|ms|s|m|h|d))$").unwrap();
}

const ALLOCATION_TYPES: &[&str] = &["include", "exclude", "require"];

const SLOWLOG_PHASES: &[&str] = &["query", "fetch", "index"];

const SLOWLOG_LEVELS: &[&str] = &["warn", "info", "debug", "trace"];

fn is_time_value(value: &str) -> bool {
    TIME_VALUE.is_match(value)
}

/// Shard allocation filtering on a node attribute.
///
/// ```
/// use estemplate::{RoutingAllocation, Source};
/// use serde_json::json;
///
/// let allocation = RoutingAllocation::new("include", "_ip").values(["192.168.2.*", "10.0.0.1"]);
/// assert_eq!(
///     allocation.source(true).unwrap(),
///     json!({"routing": {"allocation.include._ip": "192.168.2.*,10.0.0.1"}})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingAllocation {
    kind: String,
    attribute: String,
    values: Vec<String>,
}

impl RoutingAllocation {
    /// `kind` is `include`, `exclude` or `require`; `attribute` a built-in
    /// such as `_name` or `_ip`, or a custom node attribute.
    pub fn new(kind: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attribute: attribute.into(),
            values: Vec::new(),
        }
    }

    appenders! {
        values,
    }

    fn key(&self) -> String {
        format!("allocation.{}.{}", self.kind, self.attribute)
    }
}

impl Source for RoutingAllocation {
    fn name(&self) -> &str {
        "routing"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        if !self.values.is_empty() {
            options.insert(self.key(), self.values.iter().join(",").into());
        }
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.one_of("type", Some(self.kind.as_str()), ALLOCATION_TYPES)
            .require("attribute", !self.attribute.is_empty())
            .require("values", !self.values.is_empty());
        v.finish()
    }
}

/// A search or indexing slow log threshold.
///
/// Query and fetch thresholds render under `search`, index thresholds under
/// `indexing`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlowlogThreshold {
    phase: String,
    level: String,
    threshold: String,
}

impl SlowlogThreshold {
    pub fn new(phase: impl Into<String>, level: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            level: level.into(),
            threshold: threshold.into(),
        }
    }

    fn key(&self) -> String {
        format!("slowlog.threshold.{}.{}", self.phase, self.level)
    }
}

impl Source for SlowlogThreshold {
    fn name(&self) -> &str {
        match self.phase.as_str() {
            "index" => "indexing",
            _ => "search",
        }
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert(self.key(), self.threshold.as_str().into());
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.one_of("phase", Some(self.phase.as_str()), SLOWLOG_PHASES)
            .one_of("level", Some(self.level.as_str()), SLOWLOG_LEVELS)
            .require("threshold", is_time_value(&self.threshold));
        v.finish()
    }
}

/// The `analysis` section: custom analyzers and the components they chain.
#[derive(Debug, Default)]
pub struct Analysis {
    analyzers: Vec<Box<dyn Analyzer>>,
    normalizers: Vec<Box<dyn Normalizer>>,
    tokenizers: Vec<Box<dyn Tokenizer>>,
    char_filters: Vec<Box<dyn CharFilter>>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyzer(mut self, analyzer: impl Analyzer + 'static) -> Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    pub fn normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizers.push(Box::new(normalizer));
        self
    }

    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizers.push(Box::new(tokenizer));
        self
    }

    pub fn char_filter(mut self, char_filter: impl CharFilter + 'static) -> Self {
        self.char_filters.push(Box::new(char_filter));
        self
    }

    pub fn filter(mut self, filter: impl TokenFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl Source for Analysis {
    fn name(&self) -> &str {
        "analysis"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        let sections = [
            ("analyzer", keyed(&self.analyzers)?),
            ("normalizer", keyed(&self.normalizers)?),
            ("tokenizer", keyed(&self.tokenizers)?),
            ("char_filter", keyed(&self.char_filters)?),
            ("filter", keyed(&self.filters)?),
        ];
        for (key, section) in sections {
            if let Some(section) = section {
                options.insert(key.into(), section);
            }
        }
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        validate_all(&self.analyzers)?;
        validate_all(&self.normalizers)?;
        validate_all(&self.tokenizers)?;
        validate_all(&self.char_filters)?;
        validate_all(&self.filters)
    }
}

/// Index settings applied by a template.
#[derive(Debug, Default)]
pub struct Settings {
    number_of_shards: Option<i64>,
    number_of_replicas: Option<i64>,
    refresh_interval: Option<String>,
    max_result_window: Option<i64>,
    analysis: Option<Analysis>,
    similarities: Vec<Box<dyn Similarity>>,
    routing: Vec<RoutingAllocation>,
    slowlogs: Vec<SlowlogThreshold>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        number_of_shards: i64,
        number_of_replicas: i64,
        /// Time value such as `30s`, or `-1` to disable refreshes.
        refresh_interval: String,
        max_result_window: i64,
        analysis: Analysis,
    }

    pub fn similarity(mut self, similarity: impl Similarity + 'static) -> Self {
        self.similarities.push(Box::new(similarity));
        self
    }

    /// Add an allocation filter; all filters render merged under `routing`.
    pub fn routing_allocation(mut self, allocation: RoutingAllocation) -> Self {
        self.routing.push(allocation);
        self
    }

    /// Add a slow log threshold; thresholds merge under `search` or `indexing`.
    pub fn slowlog(mut self, threshold: SlowlogThreshold) -> Self {
        self.slowlogs.push(threshold);
        self
    }
}

/// Merge the single-key objects rendered by `parts` into one object per name.
fn merge_by_name<'a, T>(parts: &'a [T]) -> Result<BTreeMap<&'a str, Map<String, Value>>>
where
    T: Source,
{
    let mut merged: BTreeMap<&str, Map<String, Value>> = BTreeMap::new();
    for part in parts {
        match part.source(false)? {
            Value::Object(rendered) if !rendered.is_empty() => {
                merged.entry(part.name()).or_default().extend(rendered);
            }
            _ => {}
        }
    }
    Ok(merged)
}

impl Source for Settings {
    fn name(&self) -> &str {
        "settings"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options,
            self.number_of_shards => "number_of_shards",
            self.number_of_replicas => "number_of_replicas",
            self.refresh_interval => "refresh_interval",
            self.max_result_window => "max_result_window",
        );
        if let Some(analysis) = &self.analysis {
            options.insert("analysis".into(), analysis.source(false)?);
        }
        if let Some(similarity) = keyed(&self.similarities)? {
            options.insert("similarity".into(), similarity);
        }
        for (name, merged) in merge_by_name(&self.routing)?.into_iter().chain(merge_by_name(&self.slowlogs)?) {
            options.insert(name.to_owned(), merged.into());
        }
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        if let Some(analysis) = &self.analysis {
            analysis.validate(false)?;
        }
        validate_all(&self.similarities)?;
        for allocation in &self.routing {
            allocation.validate(false)?;
        }
        for threshold in &self.slowlogs {
            threshold.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.require(
            "refresh_interval",
            self.refresh_interval.as_deref().map_or(true, is_time_value),
        );
        v.finish()
    }
}
