use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{one_or_many, wrap, Datatype, Source, Validation};

/// A parent/child relation of a [`Join`] field.
///
/// Renders as `{parent: child}` or `{parent: [children]}`.
///
/// ```
/// use estemplate::datatype::Relation;
/// use estemplate::Source;
/// use serde_json::json;
///
/// let relation = Relation::new("parent_1", ["children_1", "children_2"]).children(["children_3"]);
/// assert_eq!(
///     relation.source(false).unwrap(),
///     json!({"parent_1": ["children_1", "children_2", "children_3"]})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relation {
    parent: String,
    children: Vec<String>,
}

impl Relation {
    pub fn new<I, S>(parent: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parent: parent.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    appenders! {
        children,
    }

    fn check(&self) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.require("parent", !self.parent.is_empty())
            .require("children", !self.children.is_empty());
        v.finish()
    }
}

impl Source for Relation {
    fn name(&self) -> &str {
        &self.parent
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        self.check()?;
        let mut relation = Map::new();
        if let Some(children) = one_or_many(&self.children) {
            relation.insert(self.parent.clone(), children);
        }
        Ok(wrap(&self.parent, include_name, relation.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        self.check()
    }
}

/// The `join` datatype, declaring parent/child relations within an index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Join {
    name: String,
    relations: Vec<Relation>,
    eager_global_ordinals: Option<bool>,
}

impl Join {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        eager_global_ordinals: bool,
    }

    /// Append relations; they render merged into one `relations` object.
    pub fn relations(mut self, relations: impl IntoIterator<Item = Relation>) -> Self {
        self.relations.extend(relations);
        self
    }
}

impl Source for Join {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "join".into());
        optional_add!(options, self.eager_global_ordinals => "eager_global_ordinals");
        if !self.relations.is_empty() {
            let mut relations = Map::new();
            for relation in &self.relations {
                if let Value::Object(rendered) = relation.source(false)? {
                    relations.extend(rendered);
                }
            }
            options.insert("relations".into(), relations.into());
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        for relation in &self.relations {
            relation.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("relations", !self.relations.is_empty());
        v.finish()
    }
}

impl Datatype for Join {}
