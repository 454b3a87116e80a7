use serde_json::{Map, Value};

use crate::error::Result;
use crate::script::Script;
use crate::source::{wrap, Source, TokenFilter, Validation};

/// The `condition` filter: applies `filter` only to tokens matching `script`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    name: String,
    filter: Vec<String>,
    script: Option<Script>,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        script: Script,
    }

    appenders! {
        filter,
    }
}

impl Source for Condition {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "condition".into());
        many_add!(options, self.filter => "filter");
        if let Some(script) = &self.script {
            options.insert("script".into(), script.source(false)?);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        if let Some(script) = &self.script {
            script.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("filter", !self.filter.is_empty())
            .require("script", self.script.is_some());
        v.finish()
    }
}

impl TokenFilter for Condition {}

/// The `predicate_token_filter`: drops tokens not matching `script`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateTokenFilter {
    name: String,
    script: Option<Script>,
}

impl PredicateTokenFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        script: Script,
    }
}

impl Source for PredicateTokenFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "predicate_token_filter".into());
        if let Some(script) = &self.script {
            options.insert("script".into(), script.source(false)?);
        }
        Ok(wrap(&self.name, include_name, options.into()))
    }

    fn validate(&self, include_name: bool) -> Result<()> {
        if let Some(script) = &self.script {
            script.validate(false)?;
        }
        let mut v = Validation::of::<Self>();
        v.name(&self.name, include_name)
            .require("script", self.script.is_some());
        v.finish()
    }
}

impl TokenFilter for PredicateTokenFilter {}

/// The `multiplexer` filter.
///
/// Each entry of `filters` is one branch, given as a comma separated chain
/// such as `lowercase, porter_stem`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multiplexer {
    name: String,
    filters: Vec<String>,
    preserve_original: Option<bool>,
}

impl Multiplexer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    setters! {
        preserve_original: bool,
    }

    appenders! {
        filters,
    }
}

impl Source for Multiplexer {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self, include_name: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".into(), "multiplexer".into());
        optional_add!(options, self.preserve_original => "preserve_original");
        many_add!(options, self.filters => "filters");
        Ok(wrap(&self.name, include_name, options.into()))
    }
}

impl TokenFilter for Multiplexer {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_condition_embeds_script_without_name() {
        let filter = Condition::new("short_lowercase")
            .filter(["lowercase"])
            .script(Script::new("token.getTerm().length() < 5"));
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "condition",
                "filter": "lowercase",
                "script": {"source": "token.getTerm().length() < 5"}
            })
        );
        assert!(filter.validate(true).is_ok());
    }

    #[test]
    fn test_condition_validation() {
        let err = Condition::new("c").validate(true).unwrap_err();
        assert_eq!(err.fields(), ["filter", "script"]);
    }

    #[test]
    fn test_condition_propagates_script_errors() {
        let filter = Condition::new("c")
            .filter(["lowercase"])
            .script(Script::new("x").lang("brainfuck"));
        let err = filter.validate(true).unwrap_err();
        assert_eq!(err.fields(), ["lang"]);
    }

    #[test]
    fn test_predicate() {
        let filter = PredicateTokenFilter::new("long_only")
            .script(Script::new("token.getTerm().length() > 5"));
        assert_eq!(
            filter.source(true).unwrap(),
            json!({"long_only": {
                "type": "predicate_token_filter",
                "script": {"source": "token.getTerm().length() > 5"}
            }})
        );
    }

    #[test]
    fn test_multiplexer() {
        let filter = Multiplexer::new("mx")
            .filters(["lowercase", "lowercase, porter_stem"])
            .preserve_original(false);
        assert_eq!(
            filter.source(false).unwrap(),
            json!({
                "type": "multiplexer",
                "filters": ["lowercase", "lowercase, porter_stem"],
                "preserve_original": false
            })
        );
    }

    #[rstest]
    #[case(vec![], json!({"type": "condition"}))]
    #[case(vec!["lowercase"], json!({"type": "condition", "filter": "lowercase"}))]
    #[case(
        vec!["lowercase", "asciifolding"],
        json!({"type": "condition", "filter": ["lowercase", "asciifolding"]})
    )]
    fn test_condition_filter(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = Condition::new("c").filter(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], json!({"type": "multiplexer"}))]
    #[case(vec!["lowercase"], json!({"type": "multiplexer", "filters": "lowercase"}))]
    #[case(
        vec!["lowercase", "lowercase, porter_stem"],
        json!({"type": "multiplexer", "filters": ["lowercase", "lowercase, porter_stem"]})
    )]
    fn test_multiplexer_filters(#[case] values: Vec<&str>, #[case] expected: Value) {
        let filter = Multiplexer::new("mx").filters(values);
        assert_eq!(filter.source(false).unwrap(), expected);
    }
}
