//! Reserved document-level fields configured on a mapping.
//!
//! Each meta-field renders under its own reserved key (`_source`, `_meta`, ...),
//! so `source(true)` produces the entry exactly as it appears in `mappings`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::source::{wrap, MetaField, Source};

/// The `_field_names` meta-field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldNames {
    enabled: Option<bool>,
}

impl FieldNames {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        enabled: bool,
    }
}

impl Source for FieldNames {
    fn name(&self) -> &str {
        "_field_names"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options, self.enabled => "enabled");
        Ok(wrap(self.name(), include_name, options.into()))
    }
}

impl MetaField for FieldNames {}

/// The `_meta` meta-field: application specific metadata kept with the mapping.
///
/// Content comes either from a serializable value or from a raw JSON string.
/// When a raw JSON string is set it is used as is and any value is ignored,
/// whichever setter was called last.
///
/// ```
/// use estemplate::meta_field::Meta;
/// use estemplate::Source;
/// use serde_json::json;
///
/// let meta = Meta::new()
///     .raw_json(r#"{"description": "Index template for book"}"#)
///     .value(json!({"version": 2}));
/// assert_eq!(
///     meta.source(true).unwrap(),
///     json!({"_meta": {"description": "Index template for book"}})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    value: Option<std::result::Result<Value, String>>,
    raw_json: Option<String>,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata from any serializable value.
    ///
    /// A value that cannot be encoded is reported by `source`.
    pub fn value<T: Serialize>(mut self, value: T) -> Self {
        self.value = Some(serde_json::to_value(value).map_err(|e| e.to_string()));
        self
    }

    setters! {
        /// Set the metadata from a JSON document, parsed when rendered.
        raw_json: String,
    }

    pub(crate) fn content(&self) -> Result<Option<Value>> {
        if let Some(raw) = &self.raw_json {
            if self.value.is_some() {
                log::debug!("[_meta] raw JSON overrides the generic value");
            }
            return Ok(Some(serde_json::from_str(raw)?));
        }
        match &self.value {
            Some(Ok(value)) => Ok(Some(value.clone())),
            Some(Err(message)) => Err(Error::Encode {
                kind: "_meta",
                message: message.clone(),
            }),
            None => Ok(None),
        }
    }
}

impl Source for Meta {
    fn name(&self) -> &str {
        "_meta"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let content = self.content()?.unwrap_or_else(|| Value::Object(Map::new()));
        Ok(wrap(self.name(), include_name, content))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        self.content().map(drop)
    }
}

impl MetaField for Meta {}

/// The `_routing` meta-field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routing {
    required: Option<bool>,
}

impl Routing {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        /// Reject indexing requests without a custom routing value.
        required: bool,
    }
}

impl Source for Routing {
    fn name(&self) -> &str {
        "_routing"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options, self.required => "required");
        Ok(wrap(self.name(), include_name, options.into()))
    }
}

impl MetaField for Routing {}

/// The `_source` meta-field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceField {
    enabled: Option<bool>,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl SourceField {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        enabled: bool,
    }

    appenders! {
        /// Paths kept in the stored `_source`; wildcards allowed.
        includes,
        /// Paths removed from the stored `_source`; wildcards allowed.
        excludes,
    }
}

impl Source for SourceField {
    fn name(&self) -> &str {
        "_source"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options, self.enabled => "enabled");
        many_add!(options,
            self.includes => "includes",
            self.excludes => "excludes",
        );
        Ok(wrap(self.name(), include_name, options.into()))
    }
}

impl MetaField for SourceField {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Ownership {
        class: &'static str,
        owner: &'static str,
    }

    #[test]
    fn test_field_names_and_routing() {
        assert_eq!(
            FieldNames::new().enabled(false).source(true).unwrap(),
            json!({"_field_names": {"enabled": false}})
        );
        assert_eq!(
            Routing::new().required(true).source(true).unwrap(),
            json!({"_routing": {"required": true}})
        );
    }

    #[test]
    fn test_meta_value() {
        let meta = Meta::new().value(Ownership {
            class: "MyApp::User",
            owner: "librarian",
        });
        assert_eq!(
            meta.source(false).unwrap(),
            json!({"class": "MyApp::User", "owner": "librarian"})
        );
    }

    #[test]
    fn test_meta_raw_json_wins_over_value() {
        let expected = json!({"_meta": {"description": "raw"}});
        let raw_last = Meta::new()
            .value(json!({"description": "value"}))
            .raw_json(r#"{"description": "raw"}"#);
        assert_eq!(raw_last.source(true).unwrap(), expected);
        let value_last = Meta::new()
            .raw_json(r#"{"description": "raw"}"#)
            .value(json!({"description": "value"}));
        assert_eq!(value_last.source(true).unwrap(), expected);
    }

    #[test]
    fn test_meta_invalid_raw_json() {
        let err = Meta::new().raw_json("{not json").source(true).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_meta_unencodable_value() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "non-string keys");
        let err = Meta::new().value(bad).source(false).unwrap_err();
        assert!(matches!(err, Error::Encode { kind: "_meta", .. }));
    }

    #[rstest]
    #[case(vec![], json!({}))]
    #[case(vec!["*.count"], json!({"includes": "*.count"}))]
    #[case(vec!["*.count", "meta.*"], json!({"includes": ["*.count", "meta.*"]}))]
    fn test_source_includes(#[case] includes: Vec<&str>, #[case] expected: Value) {
        assert_eq!(SourceField::new().includes(includes).source(false).unwrap(), expected);
    }

    #[test]
    fn test_source_field() {
        let source = SourceField::new()
            .enabled(true)
            .excludes(["meta.description", "meta.other.*"]);
        assert_eq!(
            source.source(true).unwrap(),
            json!({"_source": {
                "enabled": true,
                "excludes": ["meta.description", "meta.other.*"]
            }})
        );
    }

    #[rstest]
    #[case(vec![], json!({}))]
    #[case(vec!["meta.description"], json!({"excludes": "meta.description"}))]
    #[case(vec!["meta.description", "meta.other.*"], json!({"excludes": ["meta.description", "meta.other.*"]}))]
    fn test_source_excludes(#[case] excludes: Vec<&str>, #[case] expected: Value) {
        assert_eq!(SourceField::new().excludes(excludes).source(false).unwrap(), expected);
    }
}
