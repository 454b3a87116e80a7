//! The rendering contract shared by every template component.
//!
//! Each builder owns a flat set of optional fields. [`Source::source`] copies
//! the fields that were explicitly set into a JSON object, and when asked to,
//! nests that object under the component's name:
//!
//! ```
//! use estemplate::analyzer::Fingerprint;
//! use estemplate::Source;
//! use serde_json::json;
//!
//! let analyzer = Fingerprint::new("test").stopwords(["_english_"]);
//! assert_eq!(
//!     analyzer.source(true).unwrap(),
//!     json!({"test": {"stopwords": "_english_", "type": "fingerprint"}})
//! );
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A named component that renders itself to JSON.
pub trait Source {
    /// Key the component is nested under when rendered with its name.
    fn name(&self) -> &str;

    /// Render the options that were set.
    ///
    /// With `include_name` the options are wrapped as `{name: {...}}`.
    fn source(&self, include_name: bool) -> Result<Value>;

    /// Check required fields and enumerated values.
    ///
    /// Components without required fields only check that a name is present
    /// when one would be rendered.
    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(self.name(), include_name);
        v.finish()
    }
}

/// An analyzer registered under `settings.analysis.analyzer`.
pub trait Analyzer: Source + fmt::Debug {}

/// A normalizer registered under `settings.analysis.normalizer`.
pub trait Normalizer: Source + fmt::Debug {}

/// A tokenizer registered under `settings.analysis.tokenizer`.
pub trait Tokenizer: Source + fmt::Debug {}

/// A character filter registered under `settings.analysis.char_filter`.
pub trait CharFilter: Source + fmt::Debug {}

/// A token filter registered under `settings.analysis.filter`.
pub trait TokenFilter: Source + fmt::Debug {}

/// A field type declared in a mapping.
pub trait Datatype: Source + fmt::Debug {}

/// A similarity model registered under `settings.similarity`.
pub trait Similarity: Source + fmt::Debug {}

/// A reserved document-level field configured on the mapping.
pub trait MetaField: Source + fmt::Debug {}

/// Encode a list field: nothing for no values, a bare scalar for one value,
/// an array otherwise.
pub fn one_or_many<T>(values: &[T]) -> Option<Value>
where
    T: Clone + Into<Value>,
{
    match values {
        [] => None,
        [value] => Some(value.clone().into()),
        values => Some(Value::Array(
            values.iter().cloned().map(Into::into).collect(),
        )),
    }
}

/// Nest `options` under `name` when `include_name` is set.
pub fn wrap(name: &str, include_name: bool, options: Value) -> Value {
    if !include_name {
        return options;
    }
    let mut wrapped = Map::new();
    wrapped.insert(name.to_owned(), options);
    Value::Object(wrapped)
}

/// Render named children into one object keyed by each child's name.
///
/// Returns `None` when there are no children so the parent key can be left
/// out entirely.
pub fn keyed<T>(children: &[Box<T>]) -> Result<Option<Value>>
where
    T: Source + ?Sized,
{
    if children.is_empty() {
        return Ok(None);
    }
    let mut map = Map::new();
    for child in children {
        map.insert(child.name().to_owned(), child.source(false)?);
    }
    Ok(Some(Value::Object(map)))
}

/// Validate each child, stopping at the first failure.
pub(crate) fn validate_all<T>(children: &[Box<T>]) -> Result<()>
where
    T: Source + ?Sized,
{
    children.iter().try_for_each(|child| child.validate(true))
}

/// Collects every violated field before failing once.
#[derive(Debug)]
pub(crate) struct Validation {
    kind: &'static str,
    fields: Vec<String>,
}

impl Validation {
    /// Start a validation reported against the component type `T`.
    pub(crate) fn of<T: ?Sized>() -> Self {
        let path = std::any::type_name::<T>();
        let kind = path
            .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
            .unwrap_or(path);
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub(crate) fn name(&mut self, name: &str, include_name: bool) -> &mut Self {
        if include_name && name.is_empty() {
            self.fields.push("name".into());
        }
        self
    }

    pub(crate) fn require(&mut self, field: &str, present: bool) -> &mut Self {
        if !present {
            self.fields.push(field.into());
        }
        self
    }

    pub(crate) fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &[&str]) -> &mut Self {
        if let Some(value) = value {
            if !allowed.contains(&value) {
                self.fields.push(field.into());
            }
        }
        self
    }

    pub(crate) fn each_one_of(&mut self, field: &str, values: &[String], allowed: &[&str]) -> &mut Self {
        if values.iter().any(|value| !allowed.contains(&value.as_str())) {
            self.fields.push(field.into());
        }
        self
    }

    pub(crate) fn finish(&mut self) -> Result<()> {
        if self.fields.is_empty() {
            return Ok(());
        }
        Err(Error::Validation {
            kind: self.kind,
            fields: std::mem::take(&mut self.fields),
        })
    }
}
