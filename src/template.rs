//! Composable index templates.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::mapping::Mappings;
use crate::meta_field::Meta;
use crate::settings::Settings;
use crate::source::{wrap, Source, Validation};

/// The body of a `PUT _index_template/<name>` request.
///
/// The name is only rendered with `source(true)`; the request body itself is
/// `source(false)`.
#[derive(Debug, Default)]
pub struct IndexTemplate {
    name: String,
    index_patterns: Vec<String>,
    composed_of: Vec<String>,
    settings: Option<Settings>,
    mappings: Option<Mappings>,
    priority: Option<i64>,
    version: Option<i64>,
    meta: Option<Meta>,
}

impl IndexTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        settings: Settings,
        mappings: Mappings,
        /// Precedence among templates matching the same index.
        priority: i64,
        version: i64,
        /// Free-form metadata about the template itself.
        meta: Meta,
    }

    appenders! {
        /// Wildcard expressions matching the indices the template applies to.
        index_patterns,
        /// Component templates merged in order before this template.
        composed_of,
    }
}

impl Source for IndexTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        log::debug!("[{}] rendering index template", self.name);
        let mut options = Map::new();
        many_add!(options,
            self.index_patterns => "index_patterns",
            self.composed_of => "composed_of",
        );
        let mut template = Map::new();
        if let Some(settings) = &self.settings {
            template.insert("settings".into(), settings.source(false)?);
        }
        if let Some(mappings) = &self.mappings {
            template.insert("mappings".into(), mappings.source(false)?);
        }
        if !template.is_empty() {
            options.insert("template".into(), template.into());
        }
        optional_add!(options,
            self.priority => "priority",
            self.version => "version",
        );
        if let Some(meta) = &self.meta {
            options.insert(meta.name().to_owned(), meta.source(false)?);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        if let Some(settings) = &self.settings {
            settings.validate(false)?;
        }
        if let Some(mappings) = &self.mappings {
            mappings.validate(false)?;
        }
        if let Some(meta) = &self.meta {
            meta.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("index_patterns", !self.index_patterns.is_empty())
            .require("priority", self.priority.map_or(true, |priority| priority >= 0));
        v.finish()
    }
}
