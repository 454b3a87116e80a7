//! Index mappings: meta-fields, dynamic templates and field properties.

use serde_json::{Map, Value};

use crate::datatype::Dynamic;
use crate::error::Result;
use crate::meta_field::{FieldNames, Meta, Routing, SourceField};
use crate::source::{keyed, validate_all, wrap, Datatype, MetaField, Source, Validation};

const MAPPING_TYPES: &[&str] = &["object", "string", "long", "double", "boolean", "date", "binary", "*"];

const MATCH_PATTERNS: &[&str] = &["regex"];

/// A rule mapping fields added dynamically to a datatype.
///
/// ```
/// use estemplate::datatype::Keyword;
/// use estemplate::{DynamicTemplate, Source};
/// use serde_json::json;
///
/// let strings = DynamicTemplate::new("strings_as_keywords")
///     .match_mapping_type("string")
///     .mapping(Keyword::new("").ignore_above(256));
/// assert_eq!(
///     strings.source(true).unwrap(),
///     json!({"strings_as_keywords": {
///         "match_mapping_type": "string",
///         "mapping": {"type": "keyword", "ignore_above": 256}
///     }})
/// );
/// ```
#[derive(Debug, Default)]
pub struct DynamicTemplate {
    name: String,
    match_mapping_type: Option<String>,
    r#match: Option<String>,
    unmatch: Option<String>,
    path_match: Option<String>,
    path_unmatch: Option<String>,
    match_pattern: Option<String>,
    mapping: Option<Box<dyn Datatype>>,
}

impl DynamicTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        /// JSON type detected for the new field, or `*`.
        match_mapping_type: String,
        /// Pattern the field name must match.
        r#match: String,
        unmatch: String,
        /// Pattern the full dotted path must match.
        path_match: String,
        path_unmatch: String,
        /// `regex` makes `match` a regular expression instead of a wildcard.
        match_pattern: String,
    }

    /// Mapping applied to matching fields; its name is not rendered.
    pub fn mapping(mut self, mapping: impl Datatype + 'static) -> Self {
        self.mapping = Some(Box::new(mapping));
        self
    }
}

impl Source for DynamicTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options,
            self.match_mapping_type => "match_mapping_type",
            self.r#match => "match",
            self.unmatch => "unmatch",
            self.path_match => "path_match",
            self.path_unmatch => "path_unmatch",
            self.match_pattern => "match_pattern",
        );
        if let Some(mapping) = &self.mapping {
            options.insert("mapping".into(), mapping.source(false)?);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        if let Some(mapping) = &self.mapping {
            mapping.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("mapping", self.mapping.is_some())
            .one_of(
                "match_mapping_type",
                self.match_mapping_type.as_deref(),
                MAPPING_TYPES,
            )
            .one_of("match_pattern", self.match_pattern.as_deref(), MATCH_PATTERNS);
        v.finish()
    }
}

/// The `mappings` of an index: how documents and their fields are stored and
/// indexed.
#[derive(Debug, Default)]
pub struct Mappings {
    dynamic: Option<Dynamic>,
    date_detection: Option<bool>,
    numeric_detection: Option<bool>,
    dynamic_date_formats: Vec<String>,
    field_names: Option<FieldNames>,
    meta: Option<Meta>,
    routing: Option<Routing>,
    source_field: Option<SourceField>,
    dynamic_templates: Vec<DynamicTemplate>,
    properties: Vec<Box<dyn Datatype>>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        dynamic: Dynamic,
        date_detection: bool,
        numeric_detection: bool,
        /// The `_field_names` meta-field.
        field_names: FieldNames,
        /// The `_meta` meta-field.
        meta: Meta,
        /// The `_routing` meta-field.
        routing: Routing,
        /// The `_source` meta-field.
        source_field: SourceField,
    }

    appenders! {
        /// Formats that make a string field detected as a date.
        dynamic_date_formats,
    }

    /// Append a dynamic template; templates are matched in insertion order.
    pub fn dynamic_template(mut self, template: DynamicTemplate) -> Self {
        self.dynamic_templates.push(template);
        self
    }

    pub fn property(mut self, property: impl Datatype + 'static) -> Self {
        self.properties.push(Box::new(property));
        self
    }

    fn meta_fields(&self) -> Vec<&dyn MetaField> {
        let mut fields: Vec<&dyn MetaField> = Vec::new();
        if let Some(field) = &self.field_names {
            fields.push(field);
        }
        if let Some(field) = &self.meta {
            fields.push(field);
        }
        if let Some(field) = &self.routing {
            fields.push(field);
        }
        if let Some(field) = &self.source_field {
            fields.push(field);
        }
        fields
    }
}

impl Source for Mappings {
    fn name(&self) -> &str {
        "mappings"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        log::debug!(
            "[mappings] rendering {} properties, {} dynamic templates",
            self.properties.len(),
            self.dynamic_templates.len()
        );
        let mut options = Map::new();
        optional_add!(options,
            self.dynamic => "dynamic",
            self.date_detection => "date_detection",
            self.numeric_detection => "numeric_detection",
        );
        many_add!(options, self.dynamic_date_formats => "dynamic_date_formats");
        for field in self.meta_fields() {
            options.insert(field.name().to_owned(), field.source(false)?);
        }
        if !self.dynamic_templates.is_empty() {
            let templates = self
                .dynamic_templates
                .iter()
                .map(|template| template.source(true))
                .collect::<Result<Vec<_>>>()?;
            options.insert("dynamic_templates".into(), templates.into());
        }
        if let Some(properties) = keyed(&self.properties)? {
            options.insert("properties".into(), properties);
        }
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        for field in self.meta_fields() {
            field.validate(false)?;
        }
        for template in &self.dynamic_templates {
            template.validate(true)?;
        }
        validate_all(&self.properties)
    }
}
