use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Datatype, Source, Validation};

plain_component! { Datatype;
    /// The `histogram` datatype for pre-aggregated numeric data.
    Histogram => "histogram",
    /// The `percolator` datatype, storing queries.
    Percolator => "percolator",
    /// The `rank_features` datatype.
    RankFeatures => "rank_features",
}

/// The `alias` datatype, an alternate name for another field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alias {
    name: String,
    path: Option<String>,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// Full path of the target field.
        path: String,
    }
}

impl Source for Alias {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "alias".into());
        optional_add!(options, self.path => "path");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("path", self.path.is_some());
        v.finish()
    }
}

impl Datatype for Alias {}

/// The `binary` datatype, Base64 encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binary {
    name: String,
    doc_values: Option<bool>,
    store: Option<bool>,
}

impl Binary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        doc_values: bool,
        store: bool,
    }
}

impl Source for Binary {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "binary".into());
        optional_add!(options,
            self.doc_values => "doc_values",
            self.store => "store",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Binary {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boolean {
    name: String,
    boost: Option<f64>,
    doc_values: Option<bool>,
    index: Option<bool>,
    null_value: Option<bool>,
    store: Option<bool>,
}

impl Boolean {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        boost: f64,
        doc_values: bool,
        index: bool,
        null_value: bool,
        store: bool,
    }
}

impl Source for Boolean {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "boolean".into());
        optional_add!(options,
            self.boost => "boost",
            self.doc_values => "doc_values",
            self.index => "index",
            self.null_value => "null_value",
            self.store => "store",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Boolean {}

/// The `ip` datatype, IPv4 or IPv6 addresses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ip {
    name: String,
    boost: Option<f64>,
    doc_values: Option<bool>,
    ignore_malformed: Option<bool>,
    index: Option<bool>,
    null_value: Option<String>,
    store: Option<bool>,
}

impl Ip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        boost: f64,
        doc_values: bool,
        ignore_malformed: bool,
        index: bool,
        null_value: String,
        store: bool,
    }
}

impl Source for Ip {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "ip".into());
        optional_add!(options,
            self.boost => "boost",
            self.doc_values => "doc_values",
            self.ignore_malformed => "ignore_malformed",
            self.index => "index",
            self.null_value => "null_value",
            self.store => "store",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for Ip {}

/// The `dense_vector` datatype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseVector {
    name: String,
    dims: Option<i64>,
}

impl DenseVector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// Number of dimensions in the vector.
        dims: i64,
    }
}

impl Source for DenseVector {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "dense_vector".into());
        optional_add!(options, self.dims => "dims");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("dims", self.dims.is_some());
        v.finish()
    }
}

impl Datatype for DenseVector {}

/// The `rank_feature` datatype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankFeature {
    name: String,
    positive_score_impact: Option<bool>,
}

impl RankFeature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        positive_score_impact: bool,
    }
}

impl Source for RankFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "rank_feature".into());
        optional_add!(options, self.positive_score_impact => "positive_score_impact");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Datatype for RankFeature {}
