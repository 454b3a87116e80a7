//! Scripts embedded in analysis components and similarity models.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{wrap, Source, Validation};

const LANGS: &[&str] = &["painless", "expression", "mustache", "java"];

/// An inline or stored script, rendered under the key `script`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    inline: Option<String>,
    id: Option<String>,
    lang: Option<String>,
    params: Map<String, Value>,
}

impl Script {
    /// An inline script.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            inline: Some(source.into()),
            ..Self::default()
        }
    }

    /// A script previously stored under `id`.
    pub fn stored(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    setters! {
        /// Replace the inline source.
        inline: String,
        id: String,
        lang: String,
    }

    /// Add a parameter; a repeated key replaces the earlier value.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl Source for Script {
    fn name(&self) -> &str {
        "script"
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        optional_add!(options,
            self.inline => "source",
            self.id => "id",
            self.lang => "lang",
        );
        if !self.params.is_empty() {
            options.insert("params".into(), Value::Object(self.params.clone()));
        }
        Ok(wrap(self.name(), include_name, options.into()))
    }

    fn validate(&self, _include_name: bool) -> Result<()> {
        let mut v = Validation::of::<Self>();
        v.require("source", self.inline.is_some() != self.id.is_some())
            .one_of("lang", self.lang.as_deref(), LANGS);
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_inline_script() {
        let script = Script::new("Math.max(0, doc['f'].value)")
            .lang("painless")
            .param("factor", 2)
            .param("offset", 0.5);
        assert_eq!(
            script.source(true).unwrap(),
            json!({"script": {
                "source": "Math.max(0, doc['f'].value)",
                "lang": "painless",
                "params": {"factor": 2, "offset": 0.5}
            }})
        );
        assert!(script.validate(true).is_ok());
    }

    #[test]
    fn test_stored_script() {
        let script = Script::stored("my-script");
        assert_eq!(script.source(false).unwrap(), json!({"id": "my-script"}));
    }

    #[test]
    fn test_validate_source_xor_id() {
        let script = Script::new("1").id("two").lang("cobol");
        let err = script.validate(false).unwrap_err();
        assert_eq!(err.fields(), ["source", "lang"]);
        assert!(Script::default().validate(false).is_err());
    }
}
