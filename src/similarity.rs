//! Similarity models registered under `settings.index.similarity`.
//!
//! Custom models are referenced by name from a field's `similarity` option.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::script::Script;
use crate::source::{wrap, Similarity, Source, Validation};

const BASIC_MODELS: &[&str] = &["g", "if", "in", "ine"];

const AFTER_EFFECTS: &[&str] = &["b", "l"];

const NORMALIZATIONS: &[&str] = &["no", "h1", "h2", "h3", "z"];

const INDEPENDENCE_MEASURES: &[&str] = &["standardized", "saturated", "chisquared"];

const DISTRIBUTIONS: &[&str] = &["ll", "spl"];

const LAMBDAS: &[&str] = &["df", "ttf"];

/// Parameter key of a term frequency normalization, `None` for `no`.
fn normalization_key(normalization: &str) -> Option<String> {
    match normalization {
        "h1" | "h2" | "h3" => Some(format!("normalization.{}.c", normalization)),
        "z" => Some("normalization.z.z".to_owned()),
        _ => None,
    }
}

/// Insert `normalization` and its parameter under the computed key.
fn add_normalization(options: &mut Map<String, Value>, normalization: Option<&str>, param: Option<f64>) {
    let Some(normalization) = normalization else {
        return;
    };
    options.insert("normalization".into(), normalization.into());
    let param = param.filter(|param| param.is_finite());
    if let (Some(key), Some(param)) = (normalization_key(normalization), param) {
        options.insert(key, param.into());
    }
}

/// Okapi BM25, the default similarity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bm25 {
    name: String,
    k1: Option<f64>,
    b: Option<f64>,
    discount_overlaps: Option<bool>,
}

impl Bm25 {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// Term frequency saturation.
        k1: f64,
        /// Length normalization of tf values.
        b: f64,
        discount_overlaps: bool,
    }
}

impl Source for Bm25 {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "BM25".into());
        optional_add!(options,
            self.k1 => "k1",
            self.b => "b",
            self.discount_overlaps => "discount_overlaps",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Similarity for Bm25 {}

/// Divergence from randomness.
///
/// ```
/// use estemplate::similarity::Dfr;
/// use estemplate::Source;
/// use serde_json::json;
///
/// let dfr = Dfr::new("my_similarity")
///     .basic_model("g")
///     .after_effect("l")
///     .normalization("h2")
///     .normalization_param(3.0);
/// assert_eq!(
///     dfr.source(false).unwrap(),
///     json!({
///         "type": "DFR",
///         "basic_model": "g",
///         "after_effect": "l",
///         "normalization": "h2",
///         "normalization.h2.c": 3.0
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dfr {
    name: String,
    basic_model: Option<String>,
    after_effect: Option<String>,
    normalization: Option<String>,
    normalization_param: Option<f64>,
}

impl Dfr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        basic_model: String,
        after_effect: String,
        normalization: String,
        /// `c` of `h1`/`h2`/`h3`, or `z` of `z`.
        normalization_param: f64,
    }
}

impl Source for Dfr {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "DFR".into());
        optional_add!(options,
            self.basic_model => "basic_model",
            self.after_effect => "after_effect",
        );
        add_normalization(&mut options, self.normalization.as_deref(), self.normalization_param);
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("basic_model", self.basic_model.is_some())
            .one_of("basic_model", self.basic_model.as_deref(), BASIC_MODELS)
            .require("after_effect", self.after_effect.is_some())
            .one_of("after_effect", self.after_effect.as_deref(), AFTER_EFFECTS)
            .require("normalization", self.normalization.is_some())
            .one_of("normalization", self.normalization.as_deref(), NORMALIZATIONS);
        v.finish()
    }
}

impl Similarity for Dfr {}

/// Divergence from independence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dfi {
    name: String,
    independence_measure: Option<String>,
}

impl Dfi {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        independence_measure: String,
    }
}

impl Source for Dfi {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "DFI".into());
        optional_add!(options, self.independence_measure => "independence_measure");
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("independence_measure", self.independence_measure.is_some())
            .one_of(
                "independence_measure",
                self.independence_measure.as_deref(),
                INDEPENDENCE_MEASURES,
            );
        v.finish()
    }
}

impl Similarity for Dfi {}

/// Information based model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ib {
    name: String,
    distribution: Option<String>,
    lambda: Option<String>,
    normalization: Option<String>,
    normalization_param: Option<f64>,
}

impl Ib {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        distribution: String,
        lambda: String,
        normalization: String,
        normalization_param: f64,
    }
}

impl Source for Ib {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "IB".into());
        optional_add!(options,
            self.distribution => "distribution",
            self.lambda => "lambda",
        );
        add_normalization(&mut options, self.normalization.as_deref(), self.normalization_param);
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("distribution", self.distribution.is_some())
            .one_of("distribution", self.distribution.as_deref(), DISTRIBUTIONS)
            .require("lambda", self.lambda.is_some())
            .one_of("lambda", self.lambda.as_deref(), LAMBDAS)
            .require("normalization", self.normalization.is_some())
            .one_of("normalization", self.normalization.as_deref(), NORMALIZATIONS);
        v.finish()
    }
}

impl Similarity for Ib {}

/// Language model with Dirichlet smoothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LmDirichlet {
    name: String,
    mu: Option<f64>,
}

impl LmDirichlet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        mu: f64,
    }
}

impl Source for LmDirichlet {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "LMDirichlet".into());
        optional_add!(options, self.mu => "mu");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Similarity for LmDirichlet {}

/// Language model with Jelinek-Mercer smoothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LmJelinekMercer {
    name: String,
    lambda: Option<f64>,
}

impl LmJelinekMercer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        lambda: f64,
    }
}

impl Source for LmJelinekMercer {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "LMJelinekMercer".into());
        optional_add!(options, self.lambda => "lambda");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Similarity for LmJelinekMercer {}

/// A similarity computed by a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scripted {
    name: String,
    script: Option<Script>,
    weight_script: Option<Script>,
}

impl Scripted {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        script: Script,
        /// Document independent part of the score, computed once per term.
        weight_script: Script,
    }
}

impl Source for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "scripted".into());
        if let Some(script) = &self.script {
            options.insert("script".into(), script.source(false)?);
        }
        if let Some(weight_script) = &self.weight_script {
            options.insert("weight_script".into(), weight_script.source(false)?);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        for script in self.script.iter().chain(&self.weight_script) {
            script.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("script", self.script.is_some());
        v.finish()
    }
}

impl Similarity for Scripted {}

plain_component! { Similarity;
    /// Scores a matching term by its query boost alone.
    Boolean => "boolean",
}
