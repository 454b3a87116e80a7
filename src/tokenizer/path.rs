use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, Tokenizer};

/// The `path_hierarchy` tokenizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathHierarchy {
    name: String,
    delimiter: Option<String>,
    replacement: Option<String>,
    buffer_size: Option<i64>,
    reverse: Option<bool>,
    skip: Option<i64>,
}

impl PathHierarchy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        delimiter: String,
        replacement: String,
        buffer_size: i64,
        reverse: bool,
        skip: i64,
    }
}

impl Source for PathHierarchy {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "path_hierarchy".into());
        optional_add!(options,
            self.delimiter => "delimiter",
            self.replacement => "replacement",
            self.buffer_size => "buffer_size",
            self.reverse => "reverse",
            self.skip => "skip",
        );
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl Tokenizer for PathHierarchy {}
