use serde_json::{Map, Value};

use super::Dynamic;
use crate::error::Result;
use crate::source::{keyed, validate_all, wrap, Datatype, Source, Validation};

/// The `object` datatype, a JSON object with its own `properties`.
#[derive(Debug, Default)]
pub struct Object {
    name: String,
    dynamic: Option<Dynamic>,
    enabled: Option<bool>,
    properties: Vec<Box<dyn Datatype>>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        dynamic: Dynamic,
        /// `false` stores the object in `_source` without parsing it.
        enabled: bool,
    }

    pub fn property(mut self, property: impl Datatype + 'static) -> Self {
        self.properties.push(Box::new(property));
        self
    }
}

impl Source for Object {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "object".into());
        optional_add!(options,
            self.dynamic => "dynamic",
            self.enabled => "enabled",
        );
        if let Some(properties) = keyed(&self.properties)? {
            options.insert("properties".into(), properties);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        validate_all(&self.properties)?;
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name);
        v.finish()
    }
}

impl Datatype for Object {}

/// The `nested` datatype: an array of objects indexed as separate documents.
#[derive(Debug, Default)]
pub struct Nested {
    name: String,
    dynamic: Option<Dynamic>,
    include_in_parent: Option<bool>,
    include_in_root: Option<bool>,
    properties: Vec<Box<dyn Datatype>>,
}

impl Nested {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        dynamic: Dynamic,
        include_in_parent: bool,
        include_in_root: bool,
    }

    pub fn property(mut self, property: impl Datatype + 'static) -> Self {
        self.properties.push(Box::new(property));
        self
    }
}

impl Source for Nested {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "nested".into());
        optional_add!(options,
            self.dynamic => "dynamic",
            self.include_in_parent => "include_in_parent",
            self.include_in_root => "include_in_root",
        );
        if let Some(properties) = keyed(&self.properties)? {
            options.insert("properties".into(), properties);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        validate_all(&self.properties)?;
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name);
        v.finish()
    }
}

impl Datatype for Nested {}

/// The `flattened` datatype: a whole object indexed as one keyword field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    name: String,
    boost: Option<f64>,
    depth_limit: Option<i64>,
    doc_values: Option<bool>,
    eager_global_ordinals: Option<bool>,
    ignore_above: Option<i64>,
    index: Option<bool>,
    index_options: Option<String>,
    null_value: Option<String>,
    similarity: Option<String>,
    split_queries_on_whitespace: Option<bool>,
}

impl Flattened {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        boost: f64,
        depth_limit: i64,
        doc_values: bool,
        eager_global_ordinals: bool,
        ignore_above: i64,
        index: bool,
        index_options: String,
        null_value: String,
        similarity: String,
        split_queries_on_whitespace: bool,
    }
}

impl Source for Flattened {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "flattened".into());
        optional_add!(options,
            self.boost => "boost",
            self.depth_limit => "depth_limit",
            self.doc_values => "doc_values",
            self.eager_global_ordinals => "eager_global_ordinals",
            self.ignore_above => "ignore_above",
            self.index => "index",
            self.index_options => "index_options",
            self.null_value => "null_value",
            self.similarity => "similarity",
            self.split_queries_on_whitespace => "split_queries_on_whitespace",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name).one_of(
            "index_options",
            self.index_options.as_deref(),
            super::KEYWORD_INDEX_OPTIONS,
        );
        v.finish()
    }
}

impl Datatype for Flattened {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Keyword, Numeric, Text};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_object_properties() {
        let manager = Object::new("manager")
            .dynamic(Dynamic::Strict)
            .property(Numeric::integer("age"))
            .property(Object::new("name").property(Text::new("first")).property(Text::new("last")));
        assert_eq!(
            manager.source(true).unwrap(),
            json!({"manager": {
                "type": "object",
                "dynamic": "strict",
                "properties": {
                    "age": {"type": "integer"},
                    "name": {"type": "object", "properties": {
                        "first": {"type": "text"},
                        "last": {"type": "text"}
                    }}
                }
            }})
        );
    }

    #[test]
    fn test_disabled_object() {
        assert_eq!(
            Object::new("session_data").enabled(false).source(false).unwrap(),
            json!({"type": "object", "enabled": false})
        );
    }

    #[test]
    fn test_empty_object_keeps_type() {
        assert_eq!(Object::new("o").source(false).unwrap(), json!({"type": "object"}));
        assert_eq!(Object::new("o").source(true).unwrap(), json!({"o": {"type": "object"}}));
    }

    #[test]
    fn test_nested() {
        let user = Nested::new("user")
            .include_in_parent(true)
            .property(Keyword::new("first"));
        assert_eq!(
            user.source(false).unwrap(),
            json!({
                "type": "nested",
                "include_in_parent": true,
                "properties": {"first": {"type": "keyword"}}
            })
        );
    }

    #[test]
    fn test_object_validates_properties() {
        let object = Object::new("o").property(Keyword::new("k").index_options("positions"));
        let err = object.validate(true).unwrap_err();
        assert_eq!(err.fields(), ["index_options"]);
        assert!(Nested::new("n").property(Keyword::new("")).validate(true).is_err());
    }

    #[test]
    fn test_flattened() {
        let labels = Flattened::new("labels").depth_limit(20).ignore_above(256);
        assert_eq!(
            labels.source(false).unwrap(),
            json!({"type": "flattened", "depth_limit": 20, "ignore_above": 256})
        );
        assert!(labels.validate(true).is_ok());
    }
}
