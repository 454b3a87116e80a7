use serde_json::{Map, Value};

use super::DateFormat;
use crate::error::Result;
use crate::source::{keyed, validate_all, wrap, Datatype, Source, Validation};

/// Width and encoding of a [`Numeric`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericType {
    #[default]
    Long,
    Integer,
    Short,
    Byte,
    Double,
    Float,
    HalfFloat,
    ScaledFloat,
    UnsignedLong,
}

impl NumericType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericType::Long => "long",
            NumericType::Integer => "integer",
            NumericType::Short => "short",
            NumericType::Byte => "byte",
            NumericType::Double => "double",
            NumericType::Float => "float",
            NumericType::HalfFloat => "half_float",
            NumericType::ScaledFloat => "scaled_float",
            NumericType::UnsignedLong => "unsigned_long",
        }
    }
}

/// One of the numeric datatypes, `long` through `unsigned_long`.
///
/// ```
/// use estemplate::datatype::Numeric;
/// use estemplate::Source;
/// use serde_json::json;
///
/// let price = Numeric::scaled_float("price", 100.0).coerce(false);
/// assert_eq!(
///     price.source(false).unwrap(),
///     json!({"type": "scaled_float", "scaling_factor": 100.0, "coerce": false})
/// );
/// ```
#[derive(Debug, Default)]
pub struct Numeric {
    name: String,
    kind: NumericType,
    coerce: Option<bool>,
    boost: Option<f64>,
    copy_to: Vec<String>,
    doc_values: Option<bool>,
    ignore_malformed: Option<bool>,
    index: Option<bool>,
    null_value: Option<Value>,
    store: Option<bool>,
    scaling_factor: Option<f64>,
    fields: Vec<Box<dyn Datatype>>,
}

impl Numeric {
    pub fn new(name: impl Into<String>, kind: NumericType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn long(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Long)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Integer)
    }

    pub fn short(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Short)
    }

    pub fn byte(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Byte)
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Double)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::Float)
    }

    pub fn half_float(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::HalfFloat)
    }

    pub fn unsigned_long(name: impl Into<String>) -> Self {
        Self::new(name, NumericType::UnsignedLong)
    }

    /// A `scaled_float`, stored as a long multiplied by `scaling_factor`.
    pub fn scaled_float(name: impl Into<String>, scaling_factor: f64) -> Self {
        Self::new(name, NumericType::ScaledFloat).scaling_factor(scaling_factor)
    }

    setters! {
        coerce: bool,
        boost: f64,
        doc_values: bool,
        ignore_malformed: bool,
        index: bool,
        store: bool,
        scaling_factor: f64,
    }

    appenders! {
        copy_to,
    }

    /// Value indexed in place of an explicit `null`.
    ///
    /// Integers are kept exact, so `long` and `unsigned_long` values beyond
    /// 2^53 survive unchanged.
    pub fn null_value(mut self, value: impl Into<Value>) -> Self {
        self.null_value = Some(value.into());
        self
    }

    /// Add a multi-field indexing the same value another way.
    pub fn field(mut self, field: impl Datatype + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }
}

impl Source for Numeric {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), self.kind.as_str().into());
        optional_add!(options,
            self.coerce => "coerce",
            self.boost => "boost",
            self.doc_values => "doc_values",
            self.ignore_malformed => "ignore_malformed",
            self.index => "index",
            self.null_value => "null_value",
            self.store => "store",
            self.scaling_factor => "scaling_factor",
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
        v.name(&self.name, include_name).require(
            "null_value",
            self.null_value.as_ref().map_or(true, Value::is_number),
        );
        if self.kind == NumericType::ScaledFloat {
            v.require("scaling_factor", self.scaling_factor.is_some());
        }
        v.finish()
    }
}

impl Datatype for Numeric {}

/// Bound type of a [`Range`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeType {
    #[default]
    Integer,
    Float,
    Long,
    Double,
    Date,
    Ip,
}

impl RangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeType::Integer => "integer_range",
            RangeType::Float => "float_range",
            RangeType::Long => "long_range",
            RangeType::Double => "double_range",
            RangeType::Date => "date_range",
            RangeType::Ip => "ip_range",
        }
    }
}

/// One of the `*_range` datatypes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    name: String,
    kind: RangeType,
    coerce: Option<bool>,
    boost: Option<f64>,
    index: Option<bool>,
    store: Option<bool>,
    format: Vec<DateFormat>,
}

impl Range {
    pub fn new(name: impl Into<String>, kind: RangeType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    setters! {
        coerce: bool,
        boost: f64,
        index: bool,
        store: bool,
    }

    /// Formats of `date_range` bounds; several render joined with `||`.
    pub fn format<I, F>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<DateFormat>,
    {
        self.format.extend(formats.into_iter().map(Into::into));
        self
    }
}

impl Source for Range {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), self.kind.as_str().into());
        optional_add!(options,
            self.coerce => "coerce",
            self.boost => "boost",
            self.index => "index",
            self.store => "store",
        );
        if let Some(format) = DateFormat::join(&self.format)? {
            options.insert("format".into(), format.into());
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("format", self.format.is_empty() || self.kind == RangeType::Date);
        v.finish()
    }
}

impl Datatype for Range {}
